//! Analytics dashboard page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};

use crate::domain::entities::{StatCard, TopUrl};
use crate::state::AppState;
use crate::web::views::{BarView, Tab, daily_bars, location_bars};

/// Template for the analytics dashboard.
///
/// Renders `templates/analytics.html` with:
/// - Stat cards
/// - Clicks over time (bar chart)
/// - Geographic distribution (bar chart)
/// - Top performing URLs
#[derive(Template, WebTemplate)]
#[template(path = "analytics.html")]
pub struct AnalyticsTemplate {
    pub tab: Tab,
    pub stats: Vec<StatCard>,
    pub days: Vec<BarView>,
    pub locations: Vec<BarView>,
    pub top_urls: Vec<TopUrl>,
}

/// Renders the analytics dashboard.
///
/// # Endpoint
///
/// `GET /analytics`
pub async fn analytics_page_handler(State(state): State<AppState>) -> impl IntoResponse {
    let snapshot = state.analytics_service.snapshot();

    AnalyticsTemplate {
        tab: Tab::Analytics,
        days: daily_bars(&snapshot),
        locations: location_bars(&snapshot),
        stats: snapshot.stats,
        top_urls: snapshot.top_urls,
    }
}
