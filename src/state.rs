//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::persistence::SqliteLinkRepository;
use crate::utils::slug_generator::RandomSlugGenerator;

/// Link service as wired for production: SQLite store, random slugs.
pub type AppLinkService = LinkService<SqliteLinkRepository, RandomSlugGenerator>;

/// Handles shared by every request.
///
/// Cloning is cheap; the service sits behind an `Arc` and owns the pool.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<AppLinkService>,
    /// Public origin for absolute short URLs; `None` derives it per request.
    pub base_url: Option<String>,
}

impl AppState {
    pub fn new(link_service: Arc<AppLinkService>, base_url: Option<String>) -> Self {
        Self {
            link_service,
            base_url,
        }
    }
}
