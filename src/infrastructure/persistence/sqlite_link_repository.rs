//! SQLite implementation of link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{Executor, Sqlite, SqlitePool};
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

const LINK_COLUMNS: &str =
    "id, original_url, short_code, created_at, clicks, is_active, expires_at";

#[derive(sqlx::FromRow)]
struct LinkRow {
    id: i64,
    original_url: String,
    short_code: String,
    created_at: DateTime<Utc>,
    clicks: i64,
    is_active: bool,
    expires_at: Option<DateTime<Utc>>,
}

impl From<LinkRow> for Link {
    fn from(r: LinkRow) -> Self {
        Link::new(
            r.id,
            r.original_url,
            r.short_code,
            r.created_at,
            r.clicks,
            r.is_active,
            r.expires_at,
        )
    }
}

/// SQLite repository for link storage and retrieval.
///
/// Code uniqueness is enforced by the `UNIQUE` constraint on `short_code`;
/// click increments are single `UPDATE ... SET clicks = clicks + 1` statements.
pub struct SqliteLinkRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

/// Adds one to the counter of `code` on any executor, so the click log can
/// run it inside its transaction.
pub(super) async fn increment_clicks_with<'e, E>(executor: E, code: &str) -> Result<bool, AppError>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query("UPDATE links SET clicks = clicks + 1 WHERE short_code = ?")
        .bind(code)
        .execute(executor)
        .await?;

    Ok(result.rows_affected() > 0)
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .is_some_and(|db| db.is_unique_violation())
}

#[async_trait]
impl LinkRepository for SqliteLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let sql = format!(
            r#"
            INSERT INTO links (original_url, short_code, created_at, clicks, is_active, expires_at)
            VALUES (?, ?, ?, 0, 1, ?)
            RETURNING {LINK_COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, LinkRow>(&sql)
            .bind(&new_link.original_url)
            .bind(&new_link.short_code)
            .bind(Utc::now())
            .bind(new_link.expires_at)
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    AppError::duplicate_code(&new_link.short_code)
                } else {
                    AppError::from(e)
                }
            })?;

        Ok(row.into())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let sql = format!("SELECT {LINK_COLUMNS} FROM links WHERE short_code = ?");

        let row = sqlx::query_as::<_, LinkRow>(&sql)
            .bind(code)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Link::from))
    }

    async fn find_active_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<Link>, AppError> {
        let sql = format!(
            r#"
            SELECT {LINK_COLUMNS}
            FROM links
            WHERE original_url = ? AND is_active = 1
            ORDER BY created_at DESC, id DESC
            LIMIT 1
            "#
        );

        let row = sqlx::query_as::<_, LinkRow>(&sql)
            .bind(original_url)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Link::from))
    }

    async fn increment_clicks(&self, code: &str) -> Result<bool, AppError> {
        increment_clicks_with(self.pool.as_ref(), code).await
    }

    async fn list_active(&self) -> Result<Vec<Link>, AppError> {
        let sql = format!(
            r#"
            SELECT {LINK_COLUMNS}
            FROM links
            WHERE is_active = 1
            ORDER BY created_at DESC, id DESC
            "#
        );

        let rows = sqlx::query_as::<_, LinkRow>(&sql)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Link::from).collect())
    }

    async fn count_active(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM links WHERE is_active = 1")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn deactivate(&self, code: &str) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE links SET is_active = 0 WHERE short_code = ?")
            .bind(code)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
