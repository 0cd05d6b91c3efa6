//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`Link`] - A persisted slug to URL mapping with its visit counter
//! - [`NewLink`] - Input for creating a link
//! - [`LinkPage`] - One page of links plus the total count

pub mod link;

pub use link::{Link, LinkPage, NewLink};
