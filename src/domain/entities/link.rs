//! Shortened link entity.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A link produced by the shortening flow.
///
/// Entries are immutable once created. `clicks` starts at zero and nothing in
/// this service ever increments it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortenedLink {
    /// The synthesized short code.
    pub id: String,
    /// The submitted URL, exactly as entered.
    pub original_url: String,
    /// Display URL: base plus code.
    pub short_url: String,
    pub clicks: u64,
    pub created_at: DateTime<Utc>,
}

impl ShortenedLink {
    /// Creates a link with zero clicks, stamped with the current time.
    pub fn new(id: String, original_url: String, short_url: String) -> Self {
        Self::with_timestamp(id, original_url, short_url, Utc::now())
    }

    /// Creates a link with an explicit creation time.
    pub fn with_timestamp(
        id: String,
        original_url: String,
        short_url: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            original_url,
            short_url,
            clicks: 0,
            created_at,
        }
    }

    /// Creation date as shown in link lists, e.g. `3/7/2025`.
    pub fn created_on(&self) -> String {
        self.created_at.format("%-m/%-d/%Y").to_string()
    }
}
