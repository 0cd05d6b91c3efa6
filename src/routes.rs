//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /r/{slug}`    - Short link redirect
//! - `GET  /healthz`     - Health check
//! - `/api/*`            - Link management API
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Permissive cross-origin policy
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/r/{slug}", get(redirect_handler))
        .route("/healthz", get(health_handler))
        .nest("/api", api::routes::link_routes())
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
