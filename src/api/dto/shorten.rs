//! DTOs for the link shortening endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Notice, ShortenedLink};

/// Request to shorten a single URL.
///
/// A missing `url` field is treated as empty input.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    #[serde(default)]
    pub url: String,
}

/// Successful shortening result.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub link: ShortenedLink,
    pub notice: Notice,
}
