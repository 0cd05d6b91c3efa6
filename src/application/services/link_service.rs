//! Slug allocation and link resolution service.

use std::sync::Arc;

use crate::domain::entities::link::resolution_path;
use crate::domain::entities::{Link, LinkPage, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::infrastructure::qr::QrRenderer;
use crate::utils::slug_generator::{
    DEFAULT_SLUG_LENGTH, SlugGenerator, validate_custom_slug,
};
use crate::utils::url_validator::validate_target_url;
use serde_json::json;
use tracing::{debug, info};

/// Extra attempts after the first random candidate collides.
pub const MAX_EXTRA_ATTEMPTS: usize = 5;

/// A freshly created link and the QR image of its relative resolution path.
#[derive(Debug, Clone)]
pub struct CreatedLink {
    pub link: Link,
    pub qr_png: Vec<u8>,
}

/// Allocates slugs for new links and resolves slugs back to their targets.
///
/// Uniqueness is delegated to the store: a candidate is inserted directly and
/// a [`AppError::Conflict`] from the store means the slug is taken.
pub struct LinkService<R: LinkRepository, G: SlugGenerator> {
    link_repository: Arc<R>,
    generator: Arc<G>,
    renderer: Arc<dyn QrRenderer>,
    slug_length: usize,
}

impl<R: LinkRepository, G: SlugGenerator> LinkService<R, G> {
    /// Creates a new link service generating slugs of the default length.
    pub fn new(link_repository: Arc<R>, generator: Arc<G>, renderer: Arc<dyn QrRenderer>) -> Self {
        Self {
            link_repository,
            generator,
            renderer,
            slug_length: DEFAULT_SLUG_LENGTH,
        }
    }

    /// Overrides the length of generated slugs.
    pub fn with_slug_length(mut self, slug_length: usize) -> Self {
        self.slug_length = slug_length;
        self
    }

    /// Creates a short link.
    ///
    /// # Allocation
    ///
    /// - With `custom_slug`, that slug is the only candidate; if it is taken
    ///   the call fails with a conflict and nothing is renamed.
    /// - Otherwise random candidates are inserted until one sticks, giving up
    ///   after `1 + MAX_EXTRA_ATTEMPTS` collisions.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if the URL or custom slug is malformed
    /// - [`AppError::Conflict`] if the custom slug is taken
    /// - [`AppError::AllocationExhausted`] if every random candidate collided
    /// - [`AppError::StoreUnavailable`] on any other store failure
    pub async fn create_link(
        &self,
        url: String,
        custom_slug: Option<String>,
    ) -> Result<CreatedLink, AppError> {
        let url = validate_target_url(&url).map_err(|e| {
            AppError::validation("Invalid URL", json!({ "reason": e.to_string() }))
        })?;

        let link = match custom_slug {
            Some(slug) => self.insert_custom(url, slug).await?,
            None => self.insert_generated(url).await?,
        };

        metrics::counter!("shortyqr_links_created_total").increment(1);
        info!(id = link.id, slug = %link.slug, "Link created");

        let qr_png = self.render_qr(&link.resolution_path())?;

        Ok(CreatedLink { link, qr_png })
    }

    async fn insert_custom(&self, url: String, slug: String) -> Result<Link, AppError> {
        validate_custom_slug(&slug)?;

        let new_link = NewLink {
            slug: slug.clone(),
            url,
        };

        match self.link_repository.insert(new_link).await {
            Err(AppError::Conflict { .. }) => Err(AppError::conflict(
                "Slug already exists",
                json!({ "slug": slug }),
            )),
            other => other,
        }
    }

    async fn insert_generated(&self, url: String) -> Result<Link, AppError> {
        for attempt in 0..=MAX_EXTRA_ATTEMPTS {
            let new_link = NewLink {
                slug: self.generator.generate(self.slug_length),
                url: url.clone(),
            };

            match self.link_repository.insert(new_link).await {
                Err(AppError::Conflict { .. }) => {
                    metrics::counter!("shortyqr_slug_collisions_total").increment(1);
                    debug!(attempt, "Generated slug collided, retrying");
                }
                other => return other,
            }
        }

        Err(AppError::allocation_exhausted(
            "Could not generate unique slug",
            json!({ "attempts": MAX_EXTRA_ATTEMPTS + 1 }),
        ))
    }

    /// Records a visit and returns the link to redirect to.
    ///
    /// The lookup and the counter increment are one atomic store operation.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this slug.
    /// Returns [`AppError::StoreUnavailable`] on store failures.
    pub async fn resolve(&self, slug: &str) -> Result<Link, AppError> {
        let link = self
            .link_repository
            .increment_clicks(slug)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "slug": slug })))?;

        metrics::counter!("shortyqr_redirects_total").increment(1);
        debug!(slug, clicks = link.clicks, "Link resolved");

        Ok(link)
    }

    /// Retrieves a link by slug without counting a visit.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this slug.
    pub async fn get_link(&self, slug: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "slug": slug })))
    }

    /// Retrieves a link by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this id.
    pub async fn get_link_by_id(&self, id: i64) -> Result<Link, AppError> {
        self.link_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Link not found", json!({ "id": id })))
    }

    /// Lists links newest first.
    pub async fn list_links(&self, limit: i64, offset: i64) -> Result<LinkPage, AppError> {
        self.link_repository.list(limit, offset).await
    }

    /// Counts all stored links.
    pub async fn count_links(&self) -> Result<i64, AppError> {
        self.link_repository.count().await
    }

    /// Permanently deletes a link. Its slug becomes free for future links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this id.
    pub async fn delete_link(&self, id: i64) -> Result<(), AppError> {
        if !self.link_repository.delete_by_id(id).await? {
            return Err(AppError::not_found("Link not found", json!({ "id": id })));
        }

        metrics::counter!("shortyqr_links_deleted_total").increment(1);
        info!(id, "Link deleted");

        Ok(())
    }

    /// Builds the absolute resolution URL for a slug under `base_url`.
    pub fn short_url(&self, base_url: &str, slug: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), resolution_path(slug))
    }

    /// Renders `data` as a PNG QR image.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the renderer fails.
    pub fn render_qr(&self, data: &str) -> Result<Vec<u8>, AppError> {
        self.renderer
            .render_png(data)
            .map_err(|e| AppError::internal("Failed to render QR code", json!({ "reason": e.to_string() })))
    }
}
