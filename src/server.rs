//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, service wiring, and Axum server lifecycle.

use crate::application::services::LinkService;
use crate::config::Config;
use crate::infrastructure::persistence::{SqliteLinkRepository, connect, run_migrations};
use crate::infrastructure::qr::PngQrRenderer;
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::slug_generator::RandomSlugGenerator;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool
/// - Apply migrations
/// - Link service with random slug generation and PNG QR rendering
/// - Axum HTTP server
///
/// The server stops accepting connections on Ctrl+C / SIGTERM and drains
/// in-flight requests before returning.
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect(&config).await?;
    tracing::info!("Connected to database");

    run_migrations(&pool)
        .await
        .context("Failed to apply database migrations")?;

    let link_repository = Arc::new(SqliteLinkRepository::new(Arc::new(pool.clone())));
    let link_service = LinkService::new(
        link_repository,
        Arc::new(RandomSlugGenerator),
        Arc::new(PngQrRenderer::new()),
    )
    .with_slug_length(config.slug_length);

    let state = AppState::new(Arc::new(link_service), config.base_url.clone());

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

/// Resolves when the process receives Ctrl+C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
