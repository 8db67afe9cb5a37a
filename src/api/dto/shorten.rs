//! DTOs for link shortening endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::shorten_service::MAX_EXPIRES_IN_DAYS;
use crate::application::services::{LinkResult, ShortenCommand};

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The URL to shorten. Checked for an absolute scheme and host by the service.
    pub original_url: String,

    /// Optional caller-chosen short code.
    #[validate(length(min = 3, max = 32, message = "Custom code must be 3-32 characters"))]
    pub custom_code: Option<String>,

    /// Optional lifetime in days. After it elapses the link returns 410 Gone.
    #[validate(range(min = 1, max = MAX_EXPIRES_IN_DAYS))]
    pub expires_in_days: Option<i64>,
}

impl From<ShortenRequest> for ShortenCommand {
    fn from(req: ShortenRequest) -> Self {
        ShortenCommand {
            original_url: req.original_url,
            custom_code: req.custom_code,
            expires_in_days: req.expires_in_days,
        }
    }
}

/// A created (or reused) short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
    pub clicks: i64,
    /// PNG QR code of `short_url` as a `data:` URI.
    pub qr_code: String,
}

impl From<LinkResult> for ShortenResponse {
    fn from(result: LinkResult) -> Self {
        let LinkResult {
            link,
            short_url,
            qr_code,
        } = result;

        ShortenResponse {
            id: link.id,
            original_url: link.original_url,
            short_code: link.short_code,
            short_url,
            created_at: link.created_at,
            clicks: link.clicks,
            qr_code,
        }
    }
}
