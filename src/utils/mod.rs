//! Utility functions for slug generation, URL validation, and request handling.
//!
//! - [`slug_generator`] - Random slug generation and custom slug validation
//! - [`url_validator`] - Redirect target validation
//! - [`extract_base_url`] - Public base URL from HTTP headers

pub mod extract_base_url;
pub mod slug_generator;
pub mod url_validator;
