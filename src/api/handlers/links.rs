//! Handlers for link management endpoints.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::links::{LinkItem, LinksResponse, MessageResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists active links, newest first.
///
/// # Endpoint
///
/// `GET /api/links`
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<LinksResponse>, AppError> {
    let links = state.link_service.list_active().await?;

    let links = links
        .into_iter()
        .map(|link| LinkItem {
            short_url: state.link_service.short_url(&link.short_code),
            id: link.id,
            original_url: link.original_url,
            short_code: link.short_code,
            created_at: link.created_at,
            clicks: link.clicks,
        })
        .collect();

    Ok(Json(LinksResponse { links }))
}

/// Deactivates a link. Its analytics stay available.
///
/// # Endpoint
///
/// `DELETE /api/links/{short_code}`
///
/// # Errors
///
/// Returns 404 Not Found if no link has this code.
pub async fn delete_link_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    state.link_service.deactivate(&short_code).await?;

    Ok(Json(MessageResponse {
        message: "Link deactivated successfully".to_string(),
    }))
}
