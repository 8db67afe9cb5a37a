//! DTOs for link management endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One active link in the listing.
#[derive(Debug, Serialize)]
pub struct LinkItem {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
    pub clicks: i64,
}

/// Active links, newest first.
#[derive(Debug, Serialize)]
pub struct LinksResponse {
    pub links: Vec<LinkItem>,
}

/// Confirmation returned after deactivating a link.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
