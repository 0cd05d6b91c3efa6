//! Handler for short link resolution.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a slug to its target URL and counts the visit.
///
/// # Endpoint
///
/// `GET /r/{slug}`
///
/// # Request Flow
///
/// 1. Atomically increment the link's click counter
/// 2. Return `302 Found` with `Location` set to the stored URL
///
/// # Errors
///
/// Returns 404 Not Found if the slug doesn't exist; no redirect is issued.
pub async fn redirect_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let link = state.link_service.resolve(&slug).await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, link.url)]))
}
