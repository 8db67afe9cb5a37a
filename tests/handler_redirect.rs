mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use serde_json::Value;
use shortlink::api::handlers::redirect_handler;
use shortlink::domain::repositories::ClickRepository;
use shortlink::infrastructure::persistence::SqliteClickRepository;
use sqlx::SqlitePool;
use std::sync::Arc;

fn test_server(pool: SqlitePool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/{short_code}", get(redirect_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_redirect_success(pool: SqlitePool) {
    common::create_test_link(&pool, "redirect1", "https://example.com/target").await;
    let server = test_server(pool.clone());

    let response = server
        .get("/redirect1")
        .add_header("X-Forwarded-For", "203.0.113.7, 10.0.0.1")
        .add_header("User-Agent", "TestBot/1.0")
        .add_header("Referer", "https://ref.example.com")
        .await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/target");

    assert_eq!(common::link_clicks(&pool, "redirect1").await, 1);

    let clicks = SqliteClickRepository::new(Arc::new(pool));
    let events = clicks.events_for_code("redirect1").await.unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].ip_address, "203.0.113.7");
    assert_eq!(events[0].user_agent, "TestBot/1.0");
    assert_eq!(events[0].referrer, "https://ref.example.com");
}

#[sqlx::test]
async fn test_redirect_without_metadata_records_empty_fields(pool: SqlitePool) {
    common::create_test_link(&pool, "bare", "https://example.com").await;
    let server = test_server(pool.clone());

    let response = server.get("/bare").await;
    assert_eq!(response.status_code(), 302);

    let clicks = SqliteClickRepository::new(Arc::new(pool));
    let events = clicks.events_for_code("bare").await.unwrap();
    assert_eq!(events.len(), 1);
    assert!(events[0].referrer.is_empty());
}

#[sqlx::test]
async fn test_redirect_not_found(pool: SqlitePool) {
    let server = test_server(pool);

    let response = server.get("/nonexistent").await;

    response.assert_status_not_found();
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "not_found");
}

#[sqlx::test]
async fn test_redirect_inactive_link(pool: SqlitePool) {
    common::create_inactive_link(&pool, "gone", "https://example.com").await;
    let server = test_server(pool.clone());

    let response = server.get("/gone").await;

    response.assert_status_not_found();
    assert_eq!(common::click_events(&pool, "gone").await, 0);
}

#[sqlx::test]
async fn test_redirect_expired_link(pool: SqlitePool) {
    common::create_expired_link(&pool, "expired", "https://example.com").await;
    let server = test_server(pool.clone());

    let response = server.get("/expired").await;

    assert_eq!(response.status_code(), 410);
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "expired");

    assert_eq!(common::link_clicks(&pool, "expired").await, 0);
    assert_eq!(common::click_events(&pool, "expired").await, 0);
}

#[sqlx::test]
async fn test_redirect_failed_counter_update_leaves_no_click(pool: SqlitePool) {
    common::create_test_link(&pool, "abc123", "https://example.com").await;
    sqlx::query(
        r#"
        CREATE TRIGGER block_click_counter BEFORE UPDATE OF clicks ON links
        BEGIN
            SELECT RAISE(ABORT, 'counter update blocked');
        END
        "#,
    )
    .execute(&pool)
    .await
    .unwrap();
    let server = test_server(pool.clone());

    let response = server.get("/abc123").await;

    assert_eq!(response.status_code(), 500);
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "storage_error");

    assert_eq!(common::link_clicks(&pool, "abc123").await, 0);
    assert_eq!(common::click_events(&pool, "abc123").await, 0);
}
