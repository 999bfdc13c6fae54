//! In-memory session store.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::time::Instant;
use tracing::debug;

use crate::domain::SessionRegistry;
use crate::domain::entities::ShortenedLink;
use crate::utils::session_id::SessionId;

struct SessionEntry {
    registry: SessionRegistry,
    last_seen: Instant,
}

impl SessionEntry {
    fn new(now: Instant) -> Self {
        Self {
            registry: SessionRegistry::new(),
            last_seen: now,
        }
    }
}

struct Sessions {
    entries: HashMap<SessionId, SessionEntry>,
    last_sweep: Instant,
}

/// Holds one [`SessionRegistry`] per visitor session.
///
/// A session only takes up room once its first link is stored; until then
/// the identifier handed to the client is just a name. Idle sessions older
/// than the TTL are treated as gone and are swept when a new session is
/// stored, at most once per TTL unless the store is full. When the store is
/// still full after a sweep, the least recently used session is evicted.
/// Nothing is persisted.
///
/// The lock is never held across an `.await`.
pub struct SessionStore {
    inner: Mutex<Sessions>,
    ttl: Duration,
    max_sessions: usize,
}

impl SessionStore {
    /// Creates an empty store.
    ///
    /// `max_sessions` is clamped to at least 1.
    pub fn new(ttl: Duration, max_sessions: usize) -> Self {
        Self {
            inner: Mutex::new(Sessions {
                entries: HashMap::new(),
                last_sweep: Instant::now(),
            }),
            ttl,
            max_sessions: max_sessions.max(1),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Sessions> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn is_live(&self, entry: &SessionEntry, now: Instant) -> bool {
        now.duration_since(entry.last_seen) <= self.ttl
    }

    /// Returns the live session for `candidate`, or a fresh identifier.
    ///
    /// The boolean is `true` when a fresh identifier was issued, in which
    /// case the caller must hand it to the client. Fresh identifiers are not
    /// stored until [`SessionStore::insert`]. Unknown or expired identifiers
    /// are never adopted.
    pub fn resolve(&self, candidate: Option<SessionId>) -> (SessionId, bool) {
        let now = Instant::now();

        if let Some(id) = candidate {
            let mut sessions = self.lock();
            match sessions.entries.get_mut(&id) {
                Some(entry) if self.is_live(entry, now) => {
                    entry.last_seen = now;
                    return (id, false);
                }
                Some(_) => {
                    sessions.entries.remove(&id);
                    debug!("Dropped expired session");
                }
                None => {}
            }
        }

        (SessionId::generate(), true)
    }

    /// Prepends a link to the session's registry, storing the session if it
    /// is not stored yet.
    ///
    /// A session that expired or was evicted while the submission was in
    /// flight is recreated, so the link is not lost.
    pub fn insert(&self, id: &SessionId, link: ShortenedLink) {
        let now = Instant::now();
        let mut sessions = self.lock();

        if !sessions.entries.contains_key(id) {
            self.make_room(&mut sessions, now);
            debug!(active = sessions.entries.len() + 1, "Started session");
        }

        let entry = sessions
            .entries
            .entry(id.clone())
            .or_insert_with(|| SessionEntry::new(now));
        entry.last_seen = now;
        entry.registry.insert(link);
    }

    /// Newest-first copy of the session's links; empty for unknown or
    /// expired sessions.
    pub fn links(&self, id: &SessionId) -> Vec<ShortenedLink> {
        let now = Instant::now();
        self.lock()
            .entries
            .get(id)
            .filter(|entry| self.is_live(entry, now))
            .map(|entry| entry.registry.snapshot())
            .unwrap_or_default()
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.lock()
            .entries
            .values()
            .filter(|entry| self.is_live(entry, now))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn max_sessions(&self) -> usize {
        self.max_sessions
    }

    fn make_room(&self, sessions: &mut Sessions, now: Instant) {
        let full = sessions.entries.len() >= self.max_sessions;
        if full || now.duration_since(sessions.last_sweep) >= self.ttl {
            let before = sessions.entries.len();
            sessions
                .entries
                .retain(|_, entry| now.duration_since(entry.last_seen) <= self.ttl);
            sessions.last_sweep = now;

            let expired = before - sessions.entries.len();
            if expired > 0 {
                debug!(expired, "Expired idle sessions");
            }
        }

        while sessions.entries.len() >= self.max_sessions {
            let oldest = sessions
                .entries
                .iter()
                .min_by_key(|(_, entry)| entry.last_seen)
                .map(|(id, _)| id.clone());

            match oldest {
                Some(id) => {
                    sessions.entries.remove(&id);
                    debug!("Evicted least recently used session");
                }
                None => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(code: &str) -> ShortenedLink {
        ShortenedLink::new(
            code.to_string(),
            "https://example.com".to_string(),
            format!("https://short.ly/{code}"),
        )
    }

    fn store() -> SessionStore {
        SessionStore::new(Duration::from_secs(60), 100)
    }

    /// Issues an identifier and stores it with one link.
    fn stored_session(store: &SessionStore, code: &str) -> SessionId {
        let (id, _) = store.resolve(None);
        store.insert(&id, link(code));
        id
    }

    #[tokio::test]
    async fn test_resolve_without_cookie_issues_identifier() {
        let store = store();
        let (_, created) = store.resolve(None);

        assert!(created);
    }

    #[tokio::test]
    async fn test_cookieless_requests_take_no_room() {
        let store = SessionStore::new(Duration::from_secs(60), 2);
        let visitor = stored_session(&store, "aaaaaa");

        for _ in 0..50 {
            store.resolve(None);
        }

        assert_eq!(store.len(), 1);
        let (again, created) = store.resolve(Some(visitor.clone()));
        assert!(!created);
        assert_eq!(again, visitor);
    }

    #[tokio::test]
    async fn test_resolve_known_session() {
        let store = store();
        let id = stored_session(&store, "aaaaaa");
        let (again, created) = store.resolve(Some(id.clone()));

        assert!(!created);
        assert_eq!(again, id);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_identifier_is_not_adopted() {
        let store = store();
        let foreign = SessionId::generate();
        let (id, created) = store.resolve(Some(foreign.clone()));

        assert!(created);
        assert_ne!(id, foreign);
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let store = store();
        let alice = stored_session(&store, "aaaaaa");
        let (bob, _) = store.resolve(None);

        assert_eq!(store.links(&alice).len(), 1);
        assert!(store.links(&bob).is_empty());
    }

    #[tokio::test]
    async fn test_insert_keeps_newest_first() {
        let store = store();
        let id = stored_session(&store, "aaaaaa");

        store.insert(&id, link("bbbbbb"));

        let codes: Vec<String> = store.links(&id).into_iter().map(|l| l.id).collect();
        assert_eq!(codes, ["bbbbbb", "aaaaaa"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_idle_sessions_expire() {
        let store = SessionStore::new(Duration::from_secs(30), 100);
        let id = stored_session(&store, "aaaaaa");

        tokio::time::advance(Duration::from_secs(31)).await;

        assert!(store.links(&id).is_empty());
        assert!(store.is_empty());

        let (fresh, created) = store.resolve(Some(id.clone()));
        assert!(created);
        assert_ne!(fresh, id);
    }

    #[tokio::test(start_paused = true)]
    async fn test_activity_keeps_session_alive() {
        let store = SessionStore::new(Duration::from_secs(30), 100);
        let id = stored_session(&store, "aaaaaa");

        tokio::time::advance(Duration::from_secs(20)).await;
        store.resolve(Some(id.clone()));
        tokio::time::advance(Duration::from_secs(20)).await;

        let (again, created) = store.resolve(Some(id.clone()));
        assert!(!created);
        assert_eq!(again, id);
    }

    #[tokio::test(start_paused = true)]
    async fn test_expired_sessions_are_swept_before_eviction() {
        let store = SessionStore::new(Duration::from_secs(30), 2);
        let stale = stored_session(&store, "aaaaaa");
        tokio::time::advance(Duration::from_secs(20)).await;
        let recent = stored_session(&store, "bbbbbb");
        tokio::time::advance(Duration::from_secs(15)).await;

        stored_session(&store, "cccccc");

        assert_eq!(store.len(), 2);
        assert!(store.links(&stale).is_empty());
        assert_eq!(store.links(&recent).len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_full_store_evicts_least_recently_used() {
        let store = SessionStore::new(Duration::from_secs(600), 2);
        let first = stored_session(&store, "aaaaaa");
        tokio::time::advance(Duration::from_millis(10)).await;
        let second = stored_session(&store, "bbbbbb");
        tokio::time::advance(Duration::from_millis(10)).await;

        store.resolve(Some(first.clone()));
        tokio::time::advance(Duration::from_millis(10)).await;
        stored_session(&store, "cccccc");

        assert_eq!(store.len(), 2);
        let (_, first_recreated) = store.resolve(Some(first.clone()));
        assert!(!first_recreated);
        let (_, second_recreated) = store.resolve(Some(second));
        assert!(second_recreated);
    }

    #[tokio::test]
    async fn test_insert_recreates_evicted_session() {
        let store = store();
        let orphan = SessionId::generate();

        store.insert(&orphan, link("aaaaaa"));

        assert_eq!(store.links(&orphan).len(), 1);
    }

    #[test]
    fn test_max_sessions_clamped() {
        let store = SessionStore::new(Duration::from_secs(1), 0);
        assert_eq!(store.max_sessions(), 1);
    }
}
