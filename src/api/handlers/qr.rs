//! Handler for QR images of short links.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::extract_base_url::extract_base_url;

/// Returns a PNG QR code encoding the absolute short URL.
///
/// # Endpoint
///
/// `GET /api/links/{slug}/qr`
///
/// # Base URL
///
/// Uses the configured `BASE_URL` if set, otherwise the scheme and host the
/// client used for this request (honouring `X-Forwarded-*`). The slug is not
/// looked up; the image only encodes `{base}/r/{slug}`.
///
/// # Errors
///
/// Returns 400 Bad Request if the host cannot be determined.
pub async fn qr_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let base_url = match &state.base_url {
        Some(base_url) => base_url.clone(),
        None => extract_base_url(&headers)?,
    };

    let short_url = state.link_service.short_url(&base_url, &slug);
    let png = state.link_service.render_qr(&short_url)?;

    Ok(([(header::CONTENT_TYPE, "image/png")], png))
}
