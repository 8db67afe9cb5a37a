//! SQLite repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx. Each
//! statement acquires a pooled connection and returns it on every exit path.
//!
//! # Repositories
//!
//! - [`SqliteLinkRepository`] - Link storage and retrieval
//! - [`SqliteClickRepository`] - Click log and analytics queries

pub mod sqlite_click_repository;
pub mod sqlite_link_repository;

pub use sqlite_click_repository::SqliteClickRepository;
pub use sqlite_link_repository::SqliteLinkRepository;

use sqlx::SqlitePool;
use sqlx::migrate::MigrateError;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

/// Opens a connection pool to the SQLite database at `database_url`.
///
/// The database file is created if missing. Connections use WAL journaling
/// and wait up to five seconds on a locked database before failing.
pub async fn connect(
    database_url: &str,
    max_connections: u32,
    acquire_timeout: Duration,
) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5));

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(acquire_timeout)
        .connect_with(options)
        .await
}

/// Applies embedded migrations from `./migrations`.
pub async fn migrate(pool: &SqlitePool) -> Result<(), MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
