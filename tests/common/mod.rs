#![allow(dead_code)]

use async_trait::async_trait;
use axum::{Router, middleware};
use regex::Regex;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use shortlink::api::middleware::session;
use shortlink::application::services::{AnalyticsService, ShortenerService};
use shortlink::infrastructure::latency::{LatencySimulator, NoDelay};
use shortlink::infrastructure::session::SessionStore;
use shortlink::state::AppState;

pub const BASE_URL: &str = "https://short.ly";

/// Latency simulator that records how often it was awaited.
#[derive(Default)]
pub struct CountingDelay {
    calls: AtomicUsize,
}

impl CountingDelay {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LatencySimulator for CountingDelay {
    async fn wait(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    fn delay(&self) -> Duration {
        Duration::ZERO
    }
}

pub fn create_test_state() -> AppState {
    create_test_state_with(Arc::new(NoDelay))
}

pub fn create_test_state_with(latency: Arc<dyn LatencySimulator>) -> AppState {
    AppState::new(
        Arc::new(ShortenerService::new(BASE_URL, latency)),
        Arc::new(AnalyticsService::new()),
        Arc::new(SessionStore::new(Duration::from_secs(600), 100)),
    )
}

/// Applies the session middleware to `routes` and binds the state.
pub fn with_sessions(routes: Router<AppState>, state: AppState) -> Router {
    routes
        .route_layer(middleware::from_fn_with_state(state.clone(), session::layer))
        .with_state(state)
}

pub fn short_url_pattern() -> Regex {
    Regex::new(r"^https://short\.ly/[0-9a-z]{6}$").unwrap()
}
