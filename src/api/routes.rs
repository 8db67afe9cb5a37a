//! API route configuration.

use crate::api::handlers::{
    analytics_handler, delete_link_handler, link_analytics_handler, list_links_handler,
    shorten_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// All routes nested under `/api`.
///
/// # Endpoints
///
/// - `POST   /shorten`                 - Create a short link
/// - `GET    /analytics`               - Service-wide click analytics
/// - `GET    /analytics/{short_code}`  - Analytics for one link
/// - `GET    /links`                   - List active links
/// - `DELETE /links/{short_code}`      - Deactivate a link
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/analytics", get(analytics_handler))
        .route("/analytics/{short_code}", get(link_analytics_handler))
        .route("/links", get(list_links_handler))
        .route("/links/{short_code}", delete(delete_link_handler))
}
