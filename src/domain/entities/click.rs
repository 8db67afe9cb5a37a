//! Click entity representing a single resolved redirect.

use chrono::{DateTime, NaiveDate, Utc};

/// A click event recorded when a short link is resolved.
///
/// Clicks reference their link by short code only and are never mutated or
/// deleted, so they outlive deactivation of the link.
#[derive(Debug, Clone, PartialEq)]
pub struct Click {
    pub id: i64,
    pub short_code: String,
    pub ip_address: String,
    pub user_agent: String,
    pub referrer: String,
    pub clicked_at: DateTime<Utc>,
}

/// Input data for recording a new click event.
///
/// Missing request metadata is stored as an empty string. The timestamp is
/// assigned by the store at insertion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewClick {
    pub short_code: String,
    pub ip_address: String,
    pub user_agent: String,
    pub referrer: String,
}

impl NewClick {
    pub fn new(
        short_code: impl Into<String>,
        ip_address: impl Into<String>,
        user_agent: impl Into<String>,
        referrer: impl Into<String>,
    ) -> Self {
        Self {
            short_code: short_code.into(),
            ip_address: ip_address.into(),
            user_agent: user_agent.into(),
            referrer: referrer.into(),
        }
    }
}

/// Number of clicks recorded on one calendar day (server-local time).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyClicks {
    pub date: NaiveDate,
    pub clicks: i64,
}
