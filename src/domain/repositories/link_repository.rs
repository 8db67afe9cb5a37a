//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing short links.
///
/// Links are never physically deleted. Uniqueness of `short_code` and the
/// atomicity of click increments are guaranteed by the store itself, not by
/// application-level locking.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteLinkRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Creates a new active link with a zero click counter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DuplicateCode`] if the short code already exists on
    /// any row, active or not.
    /// Returns [`AppError::Storage`] on database errors.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link (active or not) by its exact short code.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Finds the most recently created active link for an exact original URL.
    async fn find_active_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<Link>, AppError>;

    /// Atomically adds one to the click counter.
    ///
    /// Returns `Ok(false)` if no link has this code. Redirects go through
    /// [`ClickRepository::record`](super::ClickRepository::record), which
    /// performs this increment inside its own transaction.
    async fn increment_clicks(&self, code: &str) -> Result<bool, AppError>;

    /// Lists all active links, newest first.
    async fn list_active(&self) -> Result<Vec<Link>, AppError>;

    /// Counts active links.
    async fn count_active(&self) -> Result<i64, AppError>;

    /// Marks a link inactive.
    ///
    /// Returns `Ok(true)` if a row with this code exists, `Ok(false)` otherwise.
    async fn deactivate(&self, code: &str) -> Result<bool, AppError>;
}
