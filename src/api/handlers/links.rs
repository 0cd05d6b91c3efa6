//! Handlers for link management endpoints (create, list, get, delete).

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::link::{CreateLinkRequest, CreateLinkResponse, LinkListResponse, LinkResponse};
use crate::api::dto::pagination::ListParams;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com",
///   "customSlug": "promo2025"   // optional
/// }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "id": 1,
///   "slug": "promo2025",
///   "url": "https://example.com",
///   "clicks": 0,
///   "createdAt": "2026-01-01T00:00:00Z",
///   "qrImage": "data:image/png;base64,..."
/// }
/// ```
///
/// # Errors
///
/// - 422 if the URL or custom slug is malformed
/// - 409 if the custom slug is taken
/// - 500 if no free slug was found or the store failed
pub async fn create_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<CreateLinkResponse>), AppError> {
    let payload = payload.normalized();
    payload.validate()?;

    let created = state
        .link_service
        .create_link(payload.url, payload.custom_slug)
        .await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// Lists links, newest first.
///
/// # Endpoint
///
/// `GET /api/links?limit=50&offset=0`
///
/// # Response
///
/// ```json
/// { "items": [ ... ], "total": 3 }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if pagination parameters are invalid.
pub async fn list_links_handler(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<LinkListResponse>, AppError> {
    let (limit, offset) = params
        .validate_and_get_limit_offset()
        .map_err(|e| AppError::bad_request(e, json!({})))?;

    let page = state.link_service.list_links(limit, offset).await?;

    Ok(Json(page.into()))
}

/// Returns a link by slug without counting a visit.
///
/// # Endpoint
///
/// `GET /api/links/{slug}`
///
/// # Errors
///
/// Returns 404 Not Found if the slug is unknown.
pub async fn get_link_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.link_service.get_link(&slug).await?;
    Ok(Json(link.into()))
}

/// Permanently deletes a link by id.
///
/// # Endpoint
///
/// `DELETE /api/links/{id}`
///
/// # Behavior
///
/// The record is removed; there is no tombstone. Redirects for its slug return
/// 404 afterwards and the slug may be reused by a new link.
///
/// # Errors
///
/// Returns 404 Not Found if no link has this id.
/// Returns 400 Bad Request if the id is not an integer.
pub async fn delete_link_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let id: i64 = id
        .parse()
        .map_err(|_| AppError::bad_request("Link id must be an integer", json!({ "id": id })))?;

    state.link_service.delete_link(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
