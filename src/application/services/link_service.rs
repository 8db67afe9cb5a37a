//! Link listing, lookup and deactivation.

use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::short_url::build_short_url;

/// Service for managing existing links.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
    base_url: String,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>, base_url: impl Into<String>) -> Self {
        Self {
            link_repository,
            base_url: base_url.into(),
        }
    }

    /// Lists active links, newest first.
    pub async fn list_active(&self) -> Result<Vec<Link>, AppError> {
        self.link_repository.list_active().await
    }

    /// Number of active links.
    pub async fn count_active(&self) -> Result<i64, AppError> {
        self.link_repository.count_active().await
    }

    /// Retrieves a link by code regardless of its active flag.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code.
    pub async fn get_link_by_code(&self, code: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short URL not found", json!({ "code": code })))
    }

    /// Deactivates a link. Its click history is kept.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code.
    pub async fn deactivate(&self, code: &str) -> Result<(), AppError> {
        if !self.link_repository.deactivate(code).await? {
            return Err(AppError::not_found(
                "Short URL not found",
                json!({ "code": code }),
            ));
        }

        info!(code, "Link deactivated");
        Ok(())
    }

    /// Constructs the full short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        build_short_url(&self.base_url, code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;
    use chrono::Utc;

    fn create_test_link(id: i64, code: &str) -> Link {
        Link::new(
            id,
            "https://example.com".to_string(),
            code.to_string(),
            Utc::now(),
            0,
            true,
            None,
        )
    }

    #[tokio::test]
    async fn test_deactivate_success() {
        let mut repo = MockLinkRepository::new();
        repo.expect_deactivate()
            .withf(|code| code == "abc123")
            .times(1)
            .returning(|_| Ok(true));

        let service = LinkService::new(Arc::new(repo), "http://localhost:5001");

        assert!(service.deactivate("abc123").await.is_ok());
    }

    #[tokio::test]
    async fn test_deactivate_unknown_code() {
        let mut repo = MockLinkRepository::new();
        repo.expect_deactivate().times(1).returning(|_| Ok(false));

        let service = LinkService::new(Arc::new(repo), "http://localhost:5001");

        let result = service.deactivate("missing").await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_get_link_by_code_not_found() {
        let mut repo = MockLinkRepository::new();
        repo.expect_find_by_code().returning(|_| Ok(None));

        let service = LinkService::new(Arc::new(repo), "http://localhost:5001");

        let result = service.get_link_by_code("missing").await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_active_passes_through() {
        let mut repo = MockLinkRepository::new();
        repo.expect_list_active()
            .times(1)
            .returning(|| Ok(vec![create_test_link(2, "second"), create_test_link(1, "first")]));

        let service = LinkService::new(Arc::new(repo), "http://localhost:5001");

        let links = service.list_active().await.unwrap();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].short_code, "second");
        assert_eq!(service.short_url("second"), "http://localhost:5001/second");
    }
}
