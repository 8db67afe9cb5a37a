//! Handlers for analytics endpoints.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::analytics::{AnalyticsResponse, LinkAnalyticsResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns service-wide click analytics.
///
/// # Endpoint
///
/// `GET /api/analytics`
///
/// # Response
///
/// ```json
/// {
///   "total_links": 12,
///   "total_clicks": 340,
///   "today_clicks": 17,
///   "click_data": [{ "date": "2025-01-01", "clicks": 17 }]
/// }
/// ```
///
/// `click_data` only contains days with at least one click.
pub async fn analytics_handler(
    State(state): State<AppState>,
) -> Result<Json<AnalyticsResponse>, AppError> {
    let overview = state.analytics_service.overview().await?;

    Ok(Json(overview.into()))
}

/// Returns link metadata and every recorded click for a code.
///
/// # Endpoint
///
/// `GET /api/analytics/{short_code}`
///
/// Deactivated links are still reported.
///
/// # Errors
///
/// Returns 404 Not Found if no link has this code.
pub async fn link_analytics_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkAnalyticsResponse>, AppError> {
    let report = state.analytics_service.for_code(&short_code).await?;

    Ok(Json(report.into()))
}
