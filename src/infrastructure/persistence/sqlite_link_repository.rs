//! SQLite implementation of the link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{Link, LinkPage, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Row shape shared by every query returning a link.
#[derive(Debug, sqlx::FromRow)]
struct LinkRow {
    id: i64,
    slug: String,
    url: String,
    clicks: i64,
    created_at: DateTime<Utc>,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link::new(row.id, row.slug, row.url, row.clicks, row.created_at)
    }
}

/// SQLite repository for link storage and retrieval.
///
/// Uniqueness comes from the `links_slug_key` index and counter updates are a
/// single `UPDATE ... RETURNING`, so no application-level lock is held.
pub struct SqliteLinkRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for SqliteLinkRepository {
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            INSERT INTO links (slug, url, clicks, created_at)
            VALUES (?1, ?2, 0, ?3)
            RETURNING id, slug, url, clicks, created_at
            "#,
        )
        .bind(&new_link.slug)
        .bind(&new_link.url)
        .bind(Utc::now())
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            "SELECT id, slug, url, clicks, created_at FROM links WHERE slug = ?1",
        )
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            "SELECT id, slug, url, clicks, created_at FROM links WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<LinkPage, AppError> {
        let (rows, total) = tokio::try_join!(
            sqlx::query_as::<_, LinkRow>(
                r#"
                SELECT id, slug, url, clicks, created_at
                FROM links
                ORDER BY id DESC
                LIMIT ?1 OFFSET ?2
                "#,
            )
            .bind(limit)
            .bind(offset)
            .fetch_all(self.pool.as_ref()),
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM links")
                .fetch_one(self.pool.as_ref())
        )?;

        Ok(LinkPage {
            items: rows.into_iter().map(Link::from).collect(),
            total,
        })
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM links")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM links WHERE id = ?1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn increment_clicks(&self, slug: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            UPDATE links
            SET clicks = clicks + 1
            WHERE slug = ?1
            RETURNING id, slug, url, clicks, created_at
            "#,
        )
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }
}
