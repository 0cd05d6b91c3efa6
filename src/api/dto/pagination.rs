//! Pagination query parameters.

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};

/// Default page size for `GET /api/links`.
pub const DEFAULT_LIMIT: u32 = 50;

/// Largest page size a client may request.
pub const MAX_LIMIT: u32 = 1000;

/// `limit`/`offset` query parameters.
///
/// Uses `serde_with` to parse numbers from query strings.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub limit: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub offset: Option<u32>,
}

impl ListParams {
    /// Validates the parameters and returns `(limit, offset)` for SQL queries.
    ///
    /// # Defaults
    ///
    /// - `limit`: 50
    /// - `offset`: 0
    ///
    /// # Validation
    ///
    /// - Limit must be between 1 and 1000
    pub fn validate_and_get_limit_offset(&self) -> Result<(i64, i64), String> {
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT);
        let offset = self.offset.unwrap_or(0);

        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(format!("Limit must be between 1 and {MAX_LIMIT}"));
        }

        Ok((i64::from(limit), i64::from(offset)))
    }
}
