//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{AnalyticsService, ShortenerService};
use crate::infrastructure::session::SessionStore;

#[derive(Clone)]
pub struct AppState {
    pub shortener_service: Arc<ShortenerService>,
    pub analytics_service: Arc<AnalyticsService>,
    pub sessions: Arc<SessionStore>,
}

impl AppState {
    pub fn new(
        shortener_service: Arc<ShortenerService>,
        analytics_service: Arc<AnalyticsService>,
        sessions: Arc<SessionStore>,
    ) -> Self {
        Self {
            shortener_service,
            analytics_service,
            sessions,
        }
    }
}
