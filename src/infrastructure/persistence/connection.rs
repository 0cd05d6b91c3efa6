//! SQLite pool construction and schema migrations.

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::config::Config;

/// How long a connection waits on a locked database before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens the SQLite pool described by `config`.
///
/// Creates the database file (and its parent directory) if missing, and
/// switches the database to WAL so readers do not block the single writer.
///
/// # Errors
///
/// Returns an error if the URL is malformed, the directory cannot be created,
/// or the first connection fails.
pub async fn connect(config: &Config) -> Result<SqlitePool> {
    if let Some(path) = database_file_path(&config.database_url)
        && let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create database directory {}", parent.display()))?;
    }

    let options = SqliteConnectOptions::from_str(&config.database_url)
        .context("Invalid SQLite database URL")?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(BUSY_TIMEOUT);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Some(Duration::from_secs(config.db_idle_timeout)))
        .max_lifetime(Some(Duration::from_secs(config.db_max_lifetime)))
        .connect_with(options)
        .await
        .context("Failed to connect to SQLite database")?;

    Ok(pool)
}

/// Applies the migrations in `./migrations`.
///
/// # Errors
///
/// Returns an error if a migration fails or the recorded history diverges.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("Database migrations applied");
    Ok(())
}

/// Extracts the file path from a `sqlite:` URL.
///
/// Returns `None` for in-memory databases.
fn database_file_path(database_url: &str) -> Option<PathBuf> {
    let rest = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))?;

    let path = rest.split('?').next().unwrap_or(rest);

    if path.is_empty() || path == ":memory:" {
        return None;
    }

    Some(PathBuf::from(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_file_path_relative() {
        assert_eq!(
            database_file_path("sqlite://data/shorty.db"),
            Some(PathBuf::from("data/shorty.db"))
        );
    }

    #[test]
    fn test_database_file_path_absolute_with_query() {
        assert_eq!(
            database_file_path("sqlite:///var/lib/shorty/links.db?mode=rwc"),
            Some(PathBuf::from("/var/lib/shorty/links.db"))
        );
    }

    #[test]
    fn test_database_file_path_short_form() {
        assert_eq!(
            database_file_path("sqlite:links.db"),
            Some(PathBuf::from("links.db"))
        );
    }

    #[test]
    fn test_database_file_path_memory() {
        assert_eq!(database_file_path("sqlite::memory:"), None);
        assert_eq!(database_file_path("postgres://localhost/db"), None);
    }
}
