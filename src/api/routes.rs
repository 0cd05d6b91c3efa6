//! API route configuration.

use crate::api::handlers::{
    create_link_handler, delete_link_handler, get_link_handler, list_links_handler, qr_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Link management routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `POST   /links`              - Create a short link (optionally with a custom slug)
/// - `GET    /links`              - List links, newest first (paginated)
/// - `GET    /links/{slug}`       - Link details by slug
/// - `DELETE /links/{id}`         - Permanently delete a link by id
/// - `GET    /links/{slug}/qr`    - PNG QR code of the short URL
///
/// `GET` and `DELETE` share one path segment, so both handlers take it as a
/// string and interpret it themselves.
pub fn link_routes() -> Router<AppState> {
    Router::new()
        .route("/links", get(list_links_handler).post(create_link_handler))
        .route(
            "/links/{key}",
            get(get_link_handler).delete(delete_link_handler),
        )
        .route("/links/{key}/qr", get(qr_handler))
}
