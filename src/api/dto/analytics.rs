//! DTOs for analytics endpoints.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::application::services::{AnalyticsOverview, LinkAnalytics};
use crate::domain::entities::{Click, DailyClicks};

/// Service-wide totals with a daily click series.
#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    pub total_links: i64,
    pub total_clicks: i64,
    pub today_clicks: i64,
    pub click_data: Vec<DailyClicksItem>,
}

/// Clicks on one calendar day (`YYYY-MM-DD`).
#[derive(Debug, Serialize)]
pub struct DailyClicksItem {
    pub date: NaiveDate,
    pub clicks: i64,
}

impl From<DailyClicks> for DailyClicksItem {
    fn from(d: DailyClicks) -> Self {
        Self {
            date: d.date,
            clicks: d.clicks,
        }
    }
}

impl From<AnalyticsOverview> for AnalyticsResponse {
    fn from(o: AnalyticsOverview) -> Self {
        Self {
            total_links: o.total_links,
            total_clicks: o.total_clicks,
            today_clicks: o.today_clicks,
            click_data: o.click_data.into_iter().map(Into::into).collect(),
        }
    }
}

/// Analytics for one short code.
#[derive(Debug, Serialize)]
pub struct LinkAnalyticsResponse {
    pub url_info: UrlInfo,
    /// Click events, newest first.
    pub clicks: Vec<ClickItem>,
}

/// Link metadata in a per-code report.
#[derive(Debug, Serialize)]
pub struct UrlInfo {
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
    pub total_clicks: i64,
    pub is_active: bool,
    pub expires_at: Option<DateTime<Utc>>,
}

/// One recorded click.
#[derive(Debug, Serialize)]
pub struct ClickItem {
    pub ip_address: String,
    pub user_agent: String,
    pub referrer: String,
    pub clicked_at: DateTime<Utc>,
}

impl From<Click> for ClickItem {
    fn from(c: Click) -> Self {
        Self {
            ip_address: c.ip_address,
            user_agent: c.user_agent,
            referrer: c.referrer,
            clicked_at: c.clicked_at,
        }
    }
}

impl From<LinkAnalytics> for LinkAnalyticsResponse {
    fn from(report: LinkAnalytics) -> Self {
        let LinkAnalytics { link, clicks } = report;

        Self {
            url_info: UrlInfo {
                original_url: link.original_url,
                short_code: link.short_code,
                created_at: link.created_at,
                total_clicks: link.clicks,
                is_active: link.is_active,
                expires_at: link.expires_at,
            },
            clicks: clicks.into_iter().map(Into::into).collect(),
        }
    }
}
