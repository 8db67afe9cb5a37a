//! Redirect resolution with click recording.

use chrono::Utc;
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

use crate::domain::entities::NewClick;
use crate::domain::repositories::{ClickRepository, LinkRepository};
use crate::error::AppError;
use crate::utils::client_meta::ClientMeta;

/// Service resolving short codes to their original URL.
///
/// # Resolution
///
/// 1. Look up the link; unknown or inactive codes are [`AppError::NotFound`]
/// 2. Reject links past their expiry with [`AppError::Expired`]
/// 3. Record the click, which appends the event and increments the link's
///    counter in one transaction
/// 4. Return the original URL
///
/// A failed record fails the whole resolution and leaves no trace, so no
/// redirect is issued without its analytics and vice versa.
pub struct RedirectService<L: LinkRepository, C: ClickRepository> {
    link_repository: Arc<L>,
    click_repository: Arc<C>,
}

impl<L: LinkRepository, C: ClickRepository> RedirectService<L, C> {
    /// Creates a new redirect service.
    pub fn new(link_repository: Arc<L>, click_repository: Arc<C>) -> Self {
        Self {
            link_repository,
            click_repository,
        }
    }

    /// Resolves `code` and records the visit described by `client`.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] if the code is unknown or deactivated
    /// - [`AppError::Expired`] if the link has expired
    /// - [`AppError::Storage`] if the lookup or the click record fails
    pub async fn resolve(&self, code: &str, client: ClientMeta) -> Result<String, AppError> {
        let link = self
            .link_repository
            .find_by_code(code)
            .await?
            .filter(|link| link.is_active)
            .ok_or_else(|| AppError::not_found("Short URL not found", json!({ "code": code })))?;

        if link.is_expired_at(Utc::now()) {
            return Err(AppError::expired(
                "Short URL has expired",
                json!({ "code": code, "expires_at": link.expires_at }),
            ));
        }

        let ClientMeta {
            ip_address,
            user_agent,
            referrer,
        } = client;

        self.click_repository
            .record(NewClick::new(code, ip_address, user_agent, referrer))
            .await?;

        debug!(code, url = %link.original_url, "Resolved short link");
        Ok(link.original_url)
    }
}
