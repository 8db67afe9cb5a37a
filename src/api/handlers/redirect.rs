//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_meta::ClientMeta;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{short_code}`
///
/// The click is recorded before the redirect is sent. Client IP comes from
/// the first `X-Forwarded-For` entry, falling back to the peer address.
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown or deactivated.
/// Returns 410 Gone if the link has expired.
pub async fn redirect_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
    client: ClientMeta,
) -> Result<impl IntoResponse, AppError> {
    let original_url = state
        .redirect_service
        .resolve(&short_code, client)
        .await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, original_url)]))
}
