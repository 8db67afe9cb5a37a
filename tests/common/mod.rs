#![allow(dead_code)]

use chrono::{DateTime, Utc};
use shortlink::application::services::CodePolicy;
use shortlink::state::AppState;
use sqlx::SqlitePool;

pub const BASE_URL: &str = "http://localhost:5001";

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(pool, BASE_URL, CodePolicy::default(), 7)
}

pub async fn create_test_link(pool: &SqlitePool, code: &str, url: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO links (original_url, short_code, created_at) VALUES (?, ?, ?) RETURNING id",
    )
    .bind(url)
    .bind(code)
    .bind(Utc::now())
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_link_created_at(
    pool: &SqlitePool,
    code: &str,
    url: &str,
    created_at: DateTime<Utc>,
) {
    sqlx::query("INSERT INTO links (original_url, short_code, created_at) VALUES (?, ?, ?)")
        .bind(url)
        .bind(code)
        .bind(created_at)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn create_inactive_link(pool: &SqlitePool, code: &str, url: &str) {
    sqlx::query(
        "INSERT INTO links (original_url, short_code, created_at, is_active) VALUES (?, ?, ?, 0)",
    )
    .bind(url)
    .bind(code)
    .bind(Utc::now())
    .execute(pool)
    .await
    .unwrap();
}

pub async fn create_expired_link(pool: &SqlitePool, code: &str, url: &str) {
    sqlx::query(
        "INSERT INTO links (original_url, short_code, created_at, expires_at) VALUES (?, ?, ?, ?)",
    )
    .bind(url)
    .bind(code)
    .bind(Utc::now())
    .bind(Utc::now() - chrono::Duration::hours(1))
    .execute(pool)
    .await
    .unwrap();
}

pub async fn create_click_at(pool: &SqlitePool, code: &str, ip: &str, at: DateTime<Utc>) {
    sqlx::query(
        "INSERT INTO clicks (short_code, ip_address, user_agent, referrer, clicked_at) VALUES (?, ?, '', '', ?)",
    )
    .bind(code)
    .bind(ip)
    .bind(at)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn link_clicks(pool: &SqlitePool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT clicks FROM links WHERE short_code = ?")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn click_events(pool: &SqlitePool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM clicks WHERE short_code = ?")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}
