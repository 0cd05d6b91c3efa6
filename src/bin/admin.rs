//! CLI administration tool for shortyqr.
//!
//! Provides commands for managing links, viewing statistics,
//! and performing database operations without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # List the newest links
//! cargo run --bin admin -- link list --limit 20
//!
//! # Create a link with a custom slug
//! cargo run --bin admin -- link create https://example.com --slug promo2025
//!
//! # Delete a link by id
//! cargo run --bin admin -- link delete 42
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Uses the same `DATABASE_URL` / `DB_PATH` settings as the server.

use shortyqr::application::services::LinkService;
use shortyqr::config::{self, Config};
use shortyqr::infrastructure::persistence::{SqliteLinkRepository, connect, run_migrations};
use shortyqr::infrastructure::qr::PngQrRenderer;
use shortyqr::state::AppLinkService;
use shortyqr::utils::slug_generator::RandomSlugGenerator;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::SqlitePool;
use std::sync::Arc;

/// CLI tool for managing shortyqr.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage short links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// List links, newest first
    List {
        /// Maximum number of links to show
        #[arg(short, long, default_value_t = 50)]
        limit: i64,

        /// Number of links to skip
        #[arg(short, long, default_value_t = 0)]
        offset: i64,
    },

    /// Create a short link
    Create {
        /// Target URL (http or https)
        url: String,

        /// Custom slug (letters and digits only)
        #[arg(short, long)]
        slug: Option<String>,
    },

    /// Permanently delete a link
    Delete {
        /// Link id
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let pool = connect(&config).await?;
    run_migrations(&pool).await?;

    match cli.command {
        Commands::Link { action } => handle_link_action(action, &pool, &config).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool, &config).await?,
    }

    Ok(())
}

/// Builds the same link service the server uses.
fn link_service(pool: &SqlitePool, config: &Config) -> AppLinkService {
    LinkService::new(
        Arc::new(SqliteLinkRepository::new(Arc::new(pool.clone()))),
        Arc::new(RandomSlugGenerator),
        Arc::new(PngQrRenderer::new()),
    )
    .with_slug_length(config.slug_length)
}

/// Dispatches link management commands.
async fn handle_link_action(action: LinkAction, pool: &SqlitePool, config: &Config) -> Result<()> {
    let service = link_service(pool, config);

    match action {
        LinkAction::List { limit, offset } => list_links(&service, limit, offset).await?,
        LinkAction::Create { url, slug } => create_link(&service, config, url, slug).await?,
        LinkAction::Delete { id, yes } => delete_link(&service, id, yes).await?,
    }

    Ok(())
}

/// Lists links as a table.
///
/// # Output Format
///
/// ```text
/// 📋 Links
///
///   ID    Slug             Clicks   Created            URL
///   ───────────────────────────────────────────────────────────────────────
///   3     promo2025        12       2026-01-15 10:30   https://example.com/sale
/// ```
async fn list_links(service: &AppLinkService, limit: i64, offset: i64) -> Result<()> {
    println!("{}", "📋 Links".bright_blue().bold());
    println!();

    if limit < 1 {
        anyhow::bail!("--limit must be at least 1");
    }

    let page = service
        .list_links(limit, offset.max(0))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if page.items.is_empty() {
        println!("{}", "  No links found".yellow());
        println!();
        println!(
            "  Create one with: {} admin link create <url>",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<5} {:<16} {:<8} {:<18} {}",
        "ID".bright_white().bold(),
        "Slug".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Created".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in &page.items {
        println!(
            "  {:<5} {:<16} {:<8} {:<18} {}",
            link.id.to_string().bright_black(),
            link.slug.cyan(),
            link.clicks.to_string().green(),
            link.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            link.url
        );
    }

    println!();
    println!(
        "  Showing {} of {}",
        page.items.len().to_string().bright_white().bold(),
        page.total.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Creates a link through the same allocation path as the API.
async fn create_link(
    service: &AppLinkService,
    config: &Config,
    url: String,
    slug: Option<String>,
) -> Result<()> {
    println!("{}", "🔗 Create Link".bright_blue().bold());
    println!();

    let created = service
        .create_link(url, slug)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create link: {}", e))?;
    let link = created.link;

    println!("{}", "✅ Link created successfully!".green().bold());
    println!();
    println!("  ID:   {}", link.id.to_string().bright_black());
    println!("  Slug: {}", link.slug.cyan());
    println!("  URL:  {}", link.url);

    let short = match config.base_url {
        Some(ref base_url) => service.short_url(base_url, &link.slug),
        None => link.resolution_path(),
    };
    println!("  Short: {}", short.bright_yellow().bold());
    println!();

    Ok(())
}

/// Deletes a link by id with confirmation prompt.
///
/// # Safety
///
/// - Requires confirmation (default: No) unless `--yes` is passed
/// - Deletion is permanent; the slug becomes available again
async fn delete_link(service: &AppLinkService, id: i64, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑️  Delete Link".bright_blue().bold());
    println!();

    let link = service
        .get_link_by_id(id)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    println!("  Slug:   {}", link.slug.cyan());
    println!("  URL:    {}", link.url);
    println!("  Clicks: {}", link.clicks.to_string().bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this link permanently?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete_link(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete link: {}", e))?;

    println!();
    println!("{}", "✅ Link deleted".green().bold());
    println!();

    Ok(())
}

/// Displays system statistics.
///
/// Shows:
/// - Total number of links
/// - Total number of clicks
async fn handle_stats(pool: &SqlitePool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let links_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
        .fetch_one(pool)
        .await?;

    let clicks_count: i64 = sqlx::query_scalar("SELECT COALESCE(SUM(clicks), 0) FROM links")
        .fetch_one(pool)
        .await?;

    println!(
        "  Links:  {}",
        links_count.to_string().bright_green().bold()
    );
    println!(
        "  Clicks: {}",
        clicks_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool, config: &Config) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(pool)
                .await?;

            println!("  SQLite:   {}", version.bright_white());
            println!("  Database: {}", config.database_url.bright_white());
            println!();
        }
    }

    Ok(())
}
