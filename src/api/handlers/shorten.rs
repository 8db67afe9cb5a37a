//! Handler for link shortening endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link, or returns the existing one for the same URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "original_url": "https://example.com/page",
///   "custom_code": "my-link",  // optional
///   "expires_in_days": 30      // optional
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "id": 1,
///   "original_url": "https://example.com/page",
///   "short_code": "my-link",
///   "short_url": "http://localhost:5001/my-link",
///   "created_at": "2025-01-01T12:00:00Z",
///   "clicks": 0,
///   "qr_code": "data:image/png;base64,..."
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for an invalid URL, invalid input, or a custom
/// code that is already taken; 503 if no free code could be generated.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let result = state.shorten_service.shorten(payload.into()).await?;

    Ok(Json(result.into()))
}
