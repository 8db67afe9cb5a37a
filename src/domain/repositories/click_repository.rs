//! Repository trait for click events and analytics.

use crate::domain::entities::{Click, DailyClicks, NewClick};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the append-only click log.
///
/// Calendar-day computations (`count_today`, `daily_counts`) use the
/// server's local time zone.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteClickRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Appends one click event timestamped now and increments the link's
    /// click counter, atomically.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors or when no link has
    /// the click's short code. Nothing is written in either case.
    async fn record(&self, new_click: NewClick) -> Result<Click, AppError>;

    /// Counts every recorded click.
    async fn count_all(&self) -> Result<i64, AppError>;

    /// Counts clicks recorded on the current calendar date.
    async fn count_today(&self) -> Result<i64, AppError>;

    /// Counts clicks for one short code.
    async fn count_for_code(&self, code: &str) -> Result<i64, AppError>;

    /// Click counts per calendar date for the trailing `since_days` days
    /// plus today, ascending by date.
    ///
    /// Days without clicks are omitted.
    async fn daily_counts(&self, since_days: u32) -> Result<Vec<DailyClicks>, AppError>;

    /// All clicks for one short code, newest first.
    async fn events_for_code(&self, code: &str) -> Result<Vec<Click>, AppError>;
}
