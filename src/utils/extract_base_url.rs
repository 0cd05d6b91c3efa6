//! Public base URL extraction from HTTP request headers.

use crate::AppError;
use axum::http::{HeaderMap, header};
use serde_json::json;

const X_FORWARDED_PROTO: &str = "x-forwarded-proto";
const X_FORWARDED_HOST: &str = "x-forwarded-host";

/// Builds `scheme://host[:port]` for the request as the client saw it.
///
/// The scheme comes from `X-Forwarded-Proto` (first value) and defaults to
/// `http`. The host comes from `X-Forwarded-Host`, falling back to `Host`;
/// any port is kept.
///
/// # Errors
///
/// Returns [`AppError::BadRequest`] if no host header is present or the value
/// is not valid UTF-8.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "localhost:8080".parse().unwrap());
///
/// assert_eq!(extract_base_url(&headers).unwrap(), "http://localhost:8080");
/// ```
pub fn extract_base_url(headers: &HeaderMap) -> Result<String, AppError> {
    let scheme = headers
        .get(X_FORWARDED_PROTO)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| matches!(*v, "http" | "https"))
        .unwrap_or("http");

    let host = headers
        .get(X_FORWARDED_HOST)
        .or_else(|| headers.get(header::HOST))
        .ok_or_else(|| AppError::bad_request("Missing Host header", json!({})))?
        .to_str()
        .map_err(|_| AppError::bad_request("Invalid Host header", json!({})))?;

    let host = host.split(',').next().unwrap_or(host).trim();
    if host.is_empty() {
        return Err(AppError::bad_request("Missing Host header", json!({})));
    }

    Ok(format!("{scheme}://{host}"))
}
