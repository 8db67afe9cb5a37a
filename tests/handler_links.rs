mod common;

use axum::{
    Router,
    routing::{delete, get},
};
use axum_test::TestServer;
use chrono::{Duration, Utc};
use serde_json::Value;
use shortlink::api::handlers::{
    delete_link_handler, link_analytics_handler, list_links_handler, redirect_handler,
};
use sqlx::SqlitePool;

fn make_server(pool: SqlitePool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/{short_code}", get(redirect_handler))
        .route("/api/links", get(list_links_handler))
        .route("/api/links/{short_code}", delete(delete_link_handler))
        .route("/api/analytics/{short_code}", get(link_analytics_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

// ─── GET ─────────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_list_links_active_newest_first(pool: SqlitePool) {
    let now = Utc::now();
    common::create_link_created_at(&pool, "older", "https://a.example.com", now - Duration::hours(1))
        .await;
    common::create_link_created_at(&pool, "newer", "https://b.example.com", now).await;
    common::create_inactive_link(&pool, "hidden", "https://c.example.com").await;

    let server = make_server(pool);
    let response = server.get("/api/links").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    let links = json["links"].as_array().unwrap();
    assert_eq!(links.len(), 2);
    assert_eq!(links[0]["short_code"], "newer");
    assert_eq!(links[0]["short_url"], "http://localhost:5001/newer");
    assert_eq!(links[0]["original_url"], "https://b.example.com");
    assert_eq!(links[0]["clicks"], 0);
    assert_eq!(links[1]["short_code"], "older");
}

#[sqlx::test]
async fn test_list_links_empty(pool: SqlitePool) {
    let server = make_server(pool);

    let response = server.get("/api/links").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert!(json["links"].as_array().unwrap().is_empty());
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_delete_link_success(pool: SqlitePool) {
    common::create_test_link(&pool, "del001", "https://example.com").await;

    let server = make_server(pool);
    let response = server.delete("/api/links/del001").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["message"], "Link deactivated successfully");

    server.get("/del001").await.assert_status_not_found();

    let listed = server.get("/api/links").await.json::<Value>();
    assert!(listed["links"].as_array().unwrap().is_empty());
}

#[sqlx::test]
async fn test_delete_link_not_found(pool: SqlitePool) {
    let server = make_server(pool);

    let response = server.delete("/api/links/nonexistent").await;

    response.assert_status_not_found();
}

#[sqlx::test]
async fn test_deactivated_link_keeps_analytics(pool: SqlitePool) {
    common::create_test_link(&pool, "hist", "https://example.com").await;
    let server = make_server(pool);

    assert_eq!(server.get("/hist").await.status_code(), 302);
    assert_eq!(server.get("/hist").await.status_code(), 302);
    server.delete("/api/links/hist").await.assert_status_ok();

    let response = server.get("/api/analytics/hist").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["url_info"]["is_active"], false);
    assert_eq!(json["url_info"]["total_clicks"], 2);
    assert_eq!(json["clicks"].as_array().unwrap().len(), 2);
}
