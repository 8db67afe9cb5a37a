//! SQLite implementation of click repository.

use async_trait::async_trait;
use chrono::{DateTime, Days, Local, NaiveDate, NaiveTime, TimeZone, Utc};
use serde_json::json;
use sqlx::SqlitePool;
use std::sync::Arc;

use super::sqlite_link_repository::increment_clicks_with;
use crate::domain::entities::{Click, DailyClicks, NewClick};
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct ClickRow {
    id: i64,
    short_code: String,
    ip_address: String,
    user_agent: String,
    referrer: String,
    clicked_at: DateTime<Utc>,
}

impl From<ClickRow> for Click {
    fn from(r: ClickRow) -> Self {
        Click {
            id: r.id,
            short_code: r.short_code,
            ip_address: r.ip_address,
            user_agent: r.user_agent,
            referrer: r.referrer,
            clicked_at: r.clicked_at,
        }
    }
}

/// SQLite repository for the append-only click log.
///
/// Recording a click also bumps the link's counter inside the same
/// transaction, so the log and the counter never disagree.
///
/// Timestamps are stored in UTC; calendar-day boundaries are computed in the
/// server's local time zone and converted back to UTC for range queries.
pub struct SqliteClickRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteClickRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

/// UTC instant of local midnight at the start of `date`.
///
/// Falls back to UTC midnight when local midnight does not exist (DST gap).
fn local_midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    let naive = date.and_time(NaiveTime::MIN);
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| Utc.from_utc_datetime(&naive))
}

#[async_trait]
impl ClickRepository for SqliteClickRepository {
    async fn record(&self, new_click: NewClick) -> Result<Click, AppError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, ClickRow>(
            r#"
            INSERT INTO clicks (short_code, ip_address, user_agent, referrer, clicked_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, short_code, ip_address, user_agent, referrer, clicked_at
            "#,
        )
        .bind(&new_click.short_code)
        .bind(&new_click.ip_address)
        .bind(&new_click.user_agent)
        .bind(&new_click.referrer)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        // Dropping `tx` rolls the insert back.
        if !increment_clicks_with(&mut *tx, &new_click.short_code).await? {
            return Err(AppError::storage(
                "Link disappeared while recording click",
                json!({ "code": new_click.short_code }),
            ));
        }

        tx.commit().await?;

        Ok(row.into())
    }

    async fn count_all(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM clicks")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn count_today(&self) -> Result<i64, AppError> {
        let today = Local::now().date_naive();
        let start = local_midnight_utc(today);
        let end = today
            .checked_add_days(Days::new(1))
            .map(local_midnight_utc)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM clicks WHERE clicked_at >= ? AND clicked_at < ?",
        )
        .bind(start)
        .bind(end)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }

    async fn count_for_code(&self, code: &str) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM clicks WHERE short_code = ?")
            .bind(code)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn daily_counts(&self, since_days: u32) -> Result<Vec<DailyClicks>, AppError> {
        let today = Local::now().date_naive();
        let first_day = today
            .checked_sub_days(Days::new(u64::from(since_days)))
            .unwrap_or(NaiveDate::MIN);

        let rows = sqlx::query_as::<_, (NaiveDate, i64)>(
            r#"
            SELECT date(clicked_at, 'localtime') AS day, COUNT(*) AS clicks
            FROM clicks
            WHERE clicked_at >= ?
            GROUP BY day
            ORDER BY day
            "#,
        )
        .bind(local_midnight_utc(first_day))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|(date, clicks)| DailyClicks { date, clicks })
            .collect())
    }

    async fn events_for_code(&self, code: &str) -> Result<Vec<Click>, AppError> {
        let rows = sqlx::query_as::<_, ClickRow>(
            r#"
            SELECT id, short_code, ip_address, user_agent, referrer, clicked_at
            FROM clicks
            WHERE short_code = ?
            ORDER BY clicked_at DESC, id DESC
            "#,
        )
        .bind(code)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Click::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_midnight_is_start_of_local_day() {
        let today = Local::now().date_naive();
        let midnight = local_midnight_utc(today).with_timezone(&Local);

        assert_eq!(midnight.date_naive(), today);
        assert_eq!(midnight.time(), NaiveTime::MIN);
    }
}
