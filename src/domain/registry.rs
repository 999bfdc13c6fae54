//! Per-session ordered list of shortened links.

use crate::domain::entities::ShortenedLink;

/// In-memory, newest-first list of the links created in one session.
///
/// The only mutation is [`SessionRegistry::insert`], which prepends. Entries
/// with the same URL or the same code are kept side by side.
#[derive(Debug, Clone, Default)]
pub struct SessionRegistry {
    // Stored oldest-first so inserts are amortized O(1); reads reverse.
    links: Vec<ShortenedLink>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a link at the front of the list.
    pub fn insert(&mut self, link: ShortenedLink) {
        self.links.push(link);
    }

    /// Links in newest-first order.
    pub fn links(&self) -> impl ExactSizeIterator<Item = &ShortenedLink> + DoubleEndedIterator {
        self.links.iter().rev()
    }

    /// Owned newest-first copy of the list, for rendering outside a lock.
    pub fn snapshot(&self) -> Vec<ShortenedLink> {
        self.links().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}
