//! Redirect target validation.
//!
//! Targets are stored exactly as submitted (after trimming whitespace), so a
//! resolved redirect points to the same string the caller sent.

use url::Url;

/// Longest redirect target the store accepts.
pub const MAX_URL_LENGTH: usize = 2048;

/// Reasons a redirect target is rejected.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum UrlValidationError {
    #[error("URL must not be empty")]
    Empty,

    #[error("URL must be at most {MAX_URL_LENGTH} characters")]
    TooLong,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must include a host")]
    MissingHost,
}

/// Checks that `input` is an absolute `http`/`https` URL with a host.
///
/// Returns the trimmed input on success.
///
/// # Errors
///
/// Returns a [`UrlValidationError`] describing the first rule violated.
pub fn validate_target_url(input: &str) -> Result<String, UrlValidationError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    if trimmed.chars().count() > MAX_URL_LENGTH {
        return Err(UrlValidationError::TooLong);
    }

    let url = Url::parse(trimmed).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::MissingHost);
    }

    Ok(trimmed.to_string())
}
