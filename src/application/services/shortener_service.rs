//! URL shortening flow.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use crate::domain::SessionRegistry;
use crate::domain::entities::ShortenedLink;
use crate::infrastructure::latency::LatencySimulator;
use crate::infrastructure::session::SessionStore;
use crate::utils::code_generator::{generate_code, short_url};
use crate::utils::session_id::SessionId;
use crate::utils::url_validator::{UrlValidationError, validate_url};

/// Turns submitted URLs into [`ShortenedLink`]s.
///
/// Every accepted submission goes through the same steps: validate, await
/// the injected latency simulator, synthesize a code, build the link. Once
/// validation passes the flow cannot fail.
///
/// Codes are not checked against existing links; collisions are possible.
pub struct ShortenerService {
    base_url: String,
    latency: Arc<dyn LatencySimulator>,
}

impl ShortenerService {
    /// Creates a service that builds short URLs under `base_url`.
    pub fn new(base_url: impl Into<String>, latency: Arc<dyn LatencySimulator>) -> Self {
        Self {
            base_url: base_url.into(),
            latency,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Simulated latency applied to each accepted submission.
    pub fn latency(&self) -> Duration {
        self.latency.delay()
    }

    /// Validates `raw` and, after the simulated latency, creates a link.
    ///
    /// Invalid input returns immediately without waiting.
    ///
    /// # Errors
    ///
    /// Returns [`UrlValidationError`] when `raw` is empty or does not start
    /// with `http://` / `https://`.
    pub async fn create_link(&self, raw: &str) -> Result<ShortenedLink, UrlValidationError> {
        check(raw)?;
        self.latency.wait().await;
        Ok(build_link(&self.base_url, raw.to_string()))
    }

    /// Creates a link and prepends it to an owned registry.
    ///
    /// On error the registry is left untouched.
    pub async fn shorten(
        &self,
        registry: &mut SessionRegistry,
        raw: &str,
    ) -> Result<ShortenedLink, UrlValidationError> {
        let link = self.create_link(raw).await?;
        registry.insert(link.clone());
        Ok(link)
    }

    /// Creates a link and prepends it to a stored session's registry.
    ///
    /// Once `raw` passes validation the rest of the flow runs on its own task,
    /// so the link is stored even if the caller is dropped mid-delay (for
    /// example when the client disconnects). The store is only locked after
    /// the simulated latency has elapsed.
    ///
    /// # Errors
    ///
    /// Same as [`ShortenerService::create_link`]. Nothing is spawned for
    /// rejected input.
    pub async fn shorten_for_session(
        &self,
        sessions: &Arc<SessionStore>,
        session: &SessionId,
        raw: &str,
    ) -> Result<ShortenedLink, UrlValidationError> {
        check(raw)?;

        let latency = Arc::clone(&self.latency);
        let base_url = self.base_url.clone();
        let sessions = Arc::clone(sessions);
        let session = session.clone();
        let original_url = raw.to_string();

        let task = tokio::spawn(async move {
            latency.wait().await;
            let link = build_link(&base_url, original_url);
            sessions.insert(&session, link.clone());
            debug!(session = %session, code = %link.id, "Stored link in session");
            link
        });

        // The handle is never aborted, so a join error is a panic in the task.
        match task.await {
            Ok(link) => Ok(link),
            Err(err) => std::panic::resume_unwind(err.into_panic()),
        }
    }
}

fn check(raw: &str) -> Result<(), UrlValidationError> {
    validate_url(raw).inspect_err(|err| debug!(reason = err.code(), "Rejected URL submission"))
}

fn build_link(base_url: &str, original_url: String) -> ShortenedLink {
    let code = generate_code();
    let short_url = short_url(base_url, &code);
    info!(code = %code, "Shortened URL");

    ShortenedLink::new(code, original_url, short_url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::latency::{FixedDelay, MockLatencySimulator, NoDelay};
    use regex::Regex;

    fn service_with(mock: MockLatencySimulator) -> ShortenerService {
        ShortenerService::new("https://short.ly", Arc::new(mock))
    }

    fn waiting_once() -> MockLatencySimulator {
        let mut mock = MockLatencySimulator::new();
        mock.expect_wait().times(1).returning(|| ());
        mock
    }

    fn never_waiting() -> MockLatencySimulator {
        let mut mock = MockLatencySimulator::new();
        mock.expect_wait().times(0);
        mock
    }

    #[tokio::test]
    async fn test_shorten_success() {
        let service = service_with(waiting_once());
        let mut registry = SessionRegistry::new();

        let link = service
            .shorten(&mut registry, "https://example.com/page")
            .await
            .unwrap();

        assert_eq!(link.original_url, "https://example.com/page");
        assert_eq!(link.clicks, 0);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.links().next(), Some(&link));

        let pattern = Regex::new(r"^https://short\.ly/[0-9a-z]{6}$").unwrap();
        assert!(pattern.is_match(&link.short_url), "{}", link.short_url);
        assert_eq!(link.short_url, format!("https://short.ly/{}", link.id));
    }

    #[tokio::test]
    async fn test_empty_input_skips_delay() {
        let service = service_with(never_waiting());
        let mut registry = SessionRegistry::new();

        let result = service.shorten(&mut registry, "").await;

        assert_eq!(result, Err(UrlValidationError::EmptyInput));
        assert!(registry.is_empty());
    }

    #[tokio::test]
    async fn test_whitespace_input_is_empty() {
        let service = service_with(never_waiting());
        let mut registry = SessionRegistry::new();

        let result = service.shorten(&mut registry, "   ").await;

        assert_eq!(result, Err(UrlValidationError::EmptyInput));
    }

    #[tokio::test]
    async fn test_invalid_format_leaves_registry_unchanged() {
        let service = service_with(never_waiting());
        let mut registry = SessionRegistry::new();

        let result = service.shorten(&mut registry, "not-a-url").await;

        assert_eq!(result, Err(UrlValidationError::InvalidFormat));
        assert!(registry.is_empty());
    }

    #[tokio::test]
    async fn test_original_url_is_not_normalized() {
        let service = ShortenerService::new("https://short.ly", Arc::new(NoDelay));
        let mut registry = SessionRegistry::new();

        let link = service
            .shorten(&mut registry, "https://EXAMPLE.com/Path/?q=1#frag")
            .await
            .unwrap();

        assert_eq!(link.original_url, "https://EXAMPLE.com/Path/?q=1#frag");
    }

    #[tokio::test]
    async fn test_same_url_twice_creates_two_entries() {
        let service = ShortenerService::new("https://short.ly", Arc::new(NoDelay));
        let mut registry = SessionRegistry::new();

        let first = service
            .shorten(&mut registry, "https://example.com")
            .await
            .unwrap();
        let second = service
            .shorten(&mut registry, "https://example.com")
            .await
            .unwrap();

        let ids: Vec<&str> = registry.links().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, [second.id.as_str(), first.id.as_str()]);
    }

    #[tokio::test]
    async fn test_base_url_trailing_slash() {
        let service = ShortenerService::new("https://sho.rt/", Arc::new(NoDelay));

        let link = service.create_link("http://example.com").await.unwrap();

        assert_eq!(link.short_url, format!("https://sho.rt/{}", link.id));
    }

    #[tokio::test]
    async fn test_shorten_for_session() {
        let service = service_with(waiting_once());
        let sessions = Arc::new(SessionStore::new(Duration::from_secs(60), 10));
        let (session, _) = sessions.resolve(None);

        let link = service
            .shorten_for_session(&sessions, &session, "https://example.com")
            .await
            .unwrap();

        assert_eq!(sessions.links(&session), vec![link]);
    }

    #[tokio::test]
    async fn test_shorten_for_session_rejects_invalid() {
        let service = service_with(never_waiting());
        let sessions = Arc::new(SessionStore::new(Duration::from_secs(60), 10));
        let (session, _) = sessions.resolve(None);

        let result = service
            .shorten_for_session(&sessions, &session, "ftp://example.com")
            .await;

        assert_eq!(result, Err(UrlValidationError::InvalidFormat));
        assert!(sessions.links(&session).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_session_link_survives_dropped_caller() {
        let service = ShortenerService::new("https://short.ly", Arc::new(FixedDelay::default()));
        let sessions = Arc::new(SessionStore::new(Duration::from_secs(60), 10));
        let (session, _) = sessions.resolve(None);

        let request = service.shorten_for_session(&sessions, &session, "https://example.com/page");
        let timed_out = tokio::time::timeout(Duration::from_millis(100), request)
            .await
            .is_err();

        assert!(timed_out);
        assert!(sessions.links(&session).is_empty());

        tokio::time::sleep(Duration::from_secs(5)).await;

        let links = sessions.links(&session);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].original_url, "https://example.com/page");
    }

    #[test]
    fn test_latency_reports_simulator_delay() {
        let mut mock = MockLatencySimulator::new();
        mock.expect_delay()
            .return_const(Duration::from_millis(250));
        let service = service_with(mock);

        assert_eq!(service.latency(), Duration::from_millis(250));
    }
}
