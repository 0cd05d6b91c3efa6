//! SQLite persistence.
//!
//! Concrete implementation of the domain repository trait using SQLx runtime
//! queries, plus pool construction and migrations.
//!
//! # Modules
//!
//! - [`connection`] - Pool setup and migrations
//! - [`SqliteLinkRepository`] - Link storage, lookup, and click counting

pub mod connection;
pub mod sqlite_link_repository;

pub use connection::{connect, run_migrations};
pub use sqlite_link_repository::SqliteLinkRepository;
