//! Shared query parameter types for API handlers.

use serde::{Deserialize, Deserializer};

/// Pagination parameter (`?page=N`, 1-based).
///
/// Absent or non-numeric values fall back to page 1 rather than
/// rejecting the request, matching the UI pager's expectations.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    #[serde(default, deserialize_with = "lenient_u32")]
    pub page: Option<u32>,
}

impl PageParams {
    /// The effective page number, defaulting to 1.
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1)
    }
}

/// Parse a query value as `u32`, treating garbage as absent.
fn lenient_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.parse().ok())
}
