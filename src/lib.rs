//! # ShortyQR
//!
//! A short-link redirection service with QR codes, built with Axum and SQLite.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Link entity and repository trait
//! - **Application Layer** ([`application`]) - Slug allocation and resolution
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite storage and QR rendering
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Random or custom slugs, unique across the store
//! - `302` redirects with atomic click counting
//! - PNG QR codes for every short link
//! - Paginated listing and permanent deletion
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional: defaults to sqlite://data/shorty.db
//! export DATABASE_URL="sqlite://data/shorty.db"
//! export BASE_URL="https://s.example.com"
//!
//! # Start the service (migrations run on startup)
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{CreatedLink, LinkService};
    pub use crate::domain::entities::{Link, LinkPage, NewLink};
    pub use crate::error::AppError;
    pub use crate::state::{AppLinkService, AppState};
}
