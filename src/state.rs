//! Shared application state injected into all handlers.

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::application::services::{
    AnalyticsService, CodePolicy, LinkService, RedirectService, ShortenService,
};
use crate::config::Config;
use crate::infrastructure::persistence::{SqliteClickRepository, SqliteLinkRepository};

/// Services wired to the SQLite repositories.
///
/// Cloning is cheap: every field is reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub shorten_service: Arc<ShortenService<SqliteLinkRepository>>,
    pub redirect_service: Arc<RedirectService<SqliteLinkRepository, SqliteClickRepository>>,
    pub link_service: Arc<LinkService<SqliteLinkRepository>>,
    pub analytics_service: Arc<AnalyticsService<SqliteLinkRepository, SqliteClickRepository>>,
}

impl AppState {
    /// Builds the state from a connected pool and explicit settings.
    pub fn new(
        pool: SqlitePool,
        base_url: impl Into<String>,
        code_policy: CodePolicy,
        analytics_window_days: u32,
    ) -> Self {
        let base_url = base_url.into();
        let pool = Arc::new(pool);

        let link_repository = Arc::new(SqliteLinkRepository::new(pool.clone()));
        let click_repository = Arc::new(SqliteClickRepository::new(pool));

        Self {
            shorten_service: Arc::new(ShortenService::new(
                link_repository.clone(),
                base_url.clone(),
                code_policy,
            )),
            redirect_service: Arc::new(RedirectService::new(
                link_repository.clone(),
                click_repository.clone(),
            )),
            link_service: Arc::new(LinkService::new(link_repository.clone(), base_url)),
            analytics_service: Arc::new(AnalyticsService::new(
                link_repository,
                click_repository,
                analytics_window_days,
            )),
        }
    }

    /// Builds the state using the settings in `config`.
    pub fn from_config(pool: SqlitePool, config: &Config) -> Self {
        Self::new(
            pool,
            config.base_url.clone(),
            config.code_policy(),
            config.analytics_window_days,
        )
    }
}
