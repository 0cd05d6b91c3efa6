#![allow(dead_code)]

use shortyqr::application::services::LinkService;
use shortyqr::config::Config;
use shortyqr::infrastructure::persistence::{SqliteLinkRepository, connect, run_migrations};
use shortyqr::infrastructure::qr::PngQrRenderer;
use shortyqr::state::{AppLinkService, AppState};
use shortyqr::utils::slug_generator::RandomSlugGenerator;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;
use tempfile::TempDir;

/// Single-connection in-memory database with migrations applied.
///
/// Every connection to `sqlite::memory:` gets its own database, so the pool
/// is pinned to one connection that is never recycled.
pub async fn memory_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    run_migrations(&pool).await.unwrap();
    pool
}

/// File-backed database opened the same way the server opens it, for tests
/// that need several connections writing at once.
///
/// Keep the returned [`TempDir`] alive for as long as the pool is used.
pub async fn file_pool() -> (SqlitePool, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("links.db");

    let config = Config {
        database_url: format!("sqlite://{}", path.display()),
        listen_addr: "127.0.0.1:0".to_string(),
        base_url: None,
        log_level: "info".to_string(),
        log_format: "text".to_string(),
        slug_length: 6,
        db_max_connections: 8,
        db_connect_timeout: 30,
        db_idle_timeout: 600,
        db_max_lifetime: 1800,
    };

    let pool = connect(&config).await.unwrap();
    run_migrations(&pool).await.unwrap();
    (pool, dir)
}

pub fn create_test_service(pool: SqlitePool) -> Arc<AppLinkService> {
    let link_repo = Arc::new(SqliteLinkRepository::new(Arc::new(pool)));

    Arc::new(LinkService::new(
        link_repo,
        Arc::new(RandomSlugGenerator),
        Arc::new(PngQrRenderer::new()),
    ))
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(create_test_service(pool), None)
}

pub fn create_test_state_with_base_url(pool: SqlitePool, base_url: &str) -> AppState {
    AppState::new(create_test_service(pool), Some(base_url.to_string()))
}

/// Inserts a link directly and returns its id.
pub async fn create_test_link(pool: &SqlitePool, slug: &str, url: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO links (slug, url, clicks, created_at) VALUES (?1, ?2, 0, ?3) RETURNING id",
    )
    .bind(slug)
    .bind(url)
    .bind(chrono::Utc::now())
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn clicks_of(pool: &SqlitePool, slug: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT clicks FROM links WHERE slug = ?1")
        .bind(slug)
        .fetch_one(pool)
        .await
        .unwrap()
}
