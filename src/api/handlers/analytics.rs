//! Handler for the analytics figures.

use axum::{Json, extract::State};

use crate::domain::entities::AnalyticsSnapshot;
use crate::state::AppState;

/// Returns the dashboard figures as JSON.
///
/// # Endpoint
///
/// `GET /api/analytics`
///
/// The figures are fixed sample values, identical for every caller.
pub async fn analytics_handler(State(state): State<AppState>) -> Json<AnalyticsSnapshot> {
    Json(state.analytics_service.snapshot())
}
