//! DTOs for the session link list endpoint.

use serde::Serialize;

use crate::domain::entities::ShortenedLink;

/// Links created in the caller's session, newest first.
#[derive(Debug, Serialize)]
pub struct LinksResponse {
    pub total: usize,
    pub items: Vec<ShortenedLink>,
}

impl From<Vec<ShortenedLink>> for LinksResponse {
    fn from(items: Vec<ShortenedLink>) -> Self {
        Self {
            total: items.len(),
            items,
        }
    }
}
