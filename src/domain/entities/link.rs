//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A persisted short link.
///
/// `id`, `slug`, `url` and `created_at` never change after creation; `clicks`
/// only grows, and only through resolution.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub id: i64,
    pub slug: String,
    pub url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        slug: String,
        url: String,
        clicks: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            slug,
            url,
            clicks,
            created_at,
        }
    }

    /// Relative path that resolves this link, e.g. `/r/abc123`.
    pub fn resolution_path(&self) -> String {
        resolution_path(&self.slug)
    }
}

/// Relative resolution path for a slug.
pub fn resolution_path(slug: &str) -> String {
    format!("/r/{slug}")
}

/// Input data for creating a new link.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLink {
    pub slug: String,
    pub url: String,
}

/// A page of links, newest first, with the total number of stored links.
#[derive(Debug, Clone, Default)]
pub struct LinkPage {
    pub items: Vec<Link>,
    pub total: i64,
}
