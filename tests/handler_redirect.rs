mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::{Router, routing::get};
use axum_test::TestServer;
use shortyqr::api::handlers::redirect_handler;
use shortyqr::routes::app_router;
use sqlx::SqlitePool;
use tower::ServiceExt;

fn make_server(pool: SqlitePool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/r/{slug}", get(redirect_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_redirect_success() {
    let pool = common::memory_pool().await;
    common::create_test_link(&pool, "redirect1", "https://example.com/target").await;

    let server = make_server(pool);
    let response = server.get("/r/redirect1").await;

    assert_eq!(response.status_code(), 302);

    let location = response.header("location");
    assert_eq!(location, "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_counts_every_visit() {
    let pool = common::memory_pool().await;
    common::create_test_link(&pool, "counted", "https://example.com").await;

    let server = make_server(pool.clone());
    for _ in 0..3 {
        assert_eq!(server.get("/r/counted").await.status_code(), 302);
    }

    assert_eq!(common::clicks_of(&pool, "counted").await, 3);
}

#[tokio::test]
async fn test_redirect_not_found() {
    let server = make_server(common::memory_pool().await);

    let response = server.get("/r/nonexistent").await;

    response.assert_status_not_found();
    assert!(response.maybe_header("location").is_none());
}

#[tokio::test]
async fn test_redirect_slug_is_case_sensitive() {
    let pool = common::memory_pool().await;
    common::create_test_link(&pool, "AbC", "https://example.com").await;

    let server = make_server(pool);

    server.get("/r/abc").await.assert_status_not_found();
    assert_eq!(server.get("/r/AbC").await.status_code(), 302);
}

#[tokio::test]
async fn test_full_router_redirect_with_trailing_slash() {
    let pool = common::memory_pool().await;
    common::create_test_link(&pool, "slash", "https://example.com/s").await;

    let app = app_router(common::create_test_state(pool));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/r/slash/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "https://example.com/s"
    );
}
