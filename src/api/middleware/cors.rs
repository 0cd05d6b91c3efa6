//! Cross-origin policy for the JSON API.

use tower_http::cors::CorsLayer;

/// Allows any origin, method and header.
///
/// The service has no cookies or credentials, so a permissive policy lets
/// browser front-ends on other origins call `/api/*` directly.
pub fn layer() -> CorsLayer {
    CorsLayer::permissive()
}
