//! Repository trait for short link data access.

use crate::domain::entities::{Link, LinkPage, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Durable store of links.
///
/// Slug uniqueness is enforced by the store itself, so callers never need a
/// separate existence check before [`LinkRepository::insert`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteLinkRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Persists a new link with `clicks = 0`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the slug is already taken.
    /// Returns [`AppError::StoreUnavailable`] on any other store failure.
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its slug.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Link>, AppError>;

    /// Finds a link by its surrogate id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Link>, AppError>;

    /// Lists links newest first, together with the total number of links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    async fn list(&self, limit: i64, offset: i64) -> Result<LinkPage, AppError>;

    /// Counts all stored links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Permanently removes a link.
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` if the id is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError>;

    /// Atomically increments the click counter and returns the updated link.
    ///
    /// Concurrent calls on the same slug are each counted exactly once.
    /// Returns `Ok(None)` if the slug does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    async fn increment_clicks(&self, slug: &str) -> Result<Option<Link>, AppError>;
}
