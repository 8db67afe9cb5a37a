//! Click analytics service.

use std::sync::Arc;

use crate::domain::entities::{Click, DailyClicks, Link};
use crate::domain::repositories::{ClickRepository, LinkRepository};
use crate::error::AppError;
use serde_json::json;

/// Service-wide totals.
#[derive(Debug, Clone)]
pub struct AnalyticsOverview {
    /// Number of active links.
    pub total_links: i64,
    pub total_clicks: i64,
    pub today_clicks: i64,
    /// Sparse per-day counts over the configured window, ascending.
    pub click_data: Vec<DailyClicks>,
}

/// Analytics for a single short code.
#[derive(Debug, Clone)]
pub struct LinkAnalytics {
    pub link: Link,
    /// Click events, newest first.
    pub clicks: Vec<Click>,
}

/// Service for reading click analytics.
///
/// Deactivated links stay queryable: their click history is never removed.
pub struct AnalyticsService<L: LinkRepository, C: ClickRepository> {
    link_repository: Arc<L>,
    click_repository: Arc<C>,
    window_days: u32,
}

impl<L: LinkRepository, C: ClickRepository> AnalyticsService<L, C> {
    /// Creates a new analytics service reporting `window_days` trailing days.
    pub fn new(link_repository: Arc<L>, click_repository: Arc<C>, window_days: u32) -> Self {
        Self {
            link_repository,
            click_repository,
            window_days,
        }
    }

    /// Returns service-wide totals and the daily click series.
    pub async fn overview(&self) -> Result<AnalyticsOverview, AppError> {
        let total_links = self.link_repository.count_active().await?;
        let total_clicks = self.click_repository.count_all().await?;
        let today_clicks = self.click_repository.count_today().await?;
        let click_data = self.click_repository.daily_counts(self.window_days).await?;

        Ok(AnalyticsOverview {
            total_links,
            total_clicks,
            today_clicks,
            click_data,
        })
    }

    /// Returns the link and its click events.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link, active or not, has this code.
    pub async fn for_code(&self, code: &str) -> Result<LinkAnalytics, AppError> {
        let link = self
            .link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short URL not found", json!({ "code": code })))?;

        let clicks = self.click_repository.events_for_code(code).await?;

        Ok(LinkAnalytics { link, clicks })
    }
}
