//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer and wraps the
//! collaborators the service depends on.
//!
//! # Modules
//!
//! - [`persistence`] - SQLite repository implementation
//! - [`qr`] - QR image rendering

pub mod persistence;
pub mod qr;
