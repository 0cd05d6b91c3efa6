//! Slug generation and validation utilities.
//!
//! Random slugs are drawn from the 62-symbol alphanumeric alphabet. Generation
//! makes no uniqueness promise; the link store rejects duplicates.

use crate::error::AppError;
use rand::Rng;
use serde_json::json;

/// Alphabet slugs are drawn from: `a-z`, `A-Z`, `0-9`.
pub const SLUG_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of generated slugs unless configured otherwise.
pub const DEFAULT_SLUG_LENGTH: usize = 6;

/// Longest slug the store accepts.
pub const MAX_SLUG_LENGTH: usize = 64;

/// Source of candidate slugs.
///
/// Injected into [`crate::application::services::LinkService`] so tests can
/// replay a fixed sequence of candidates.
#[cfg_attr(test, mockall::automock)]
pub trait SlugGenerator: Send + Sync {
    /// Returns a candidate of exactly `length` characters.
    fn generate(&self, length: usize) -> String;
}

/// Generator backed by the thread-local CSPRNG from `rand`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSlugGenerator;

impl SlugGenerator for RandomSlugGenerator {
    fn generate(&self, length: usize) -> String {
        let mut rng = rand::rng();

        (0..length)
            .map(|_| {
                let idx = rng.random_range(0..SLUG_ALPHABET.len());
                SLUG_ALPHABET[idx] as char
            })
            .collect()
    }
}

/// Validates a caller-supplied slug.
///
/// # Rules
///
/// - Length: 1-64 characters
/// - Allowed characters: ASCII letters and digits
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_custom_slug(slug: &str) -> Result<(), AppError> {
    if slug.is_empty() || slug.len() > MAX_SLUG_LENGTH {
        return Err(AppError::validation(
            "Custom slug must be 1-64 characters",
            json!({ "provided_length": slug.len() }),
        ));
    }

    if !slug.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(AppError::validation(
            "Custom slug can only contain letters and digits",
            json!({ "slug": slug }),
        ));
    }

    Ok(())
}
