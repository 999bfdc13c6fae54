//! API route configuration.

use crate::api::handlers::{analytics_handler, links_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes that create links. Rate limited by the top-level router.
///
/// # Endpoints
///
/// - `POST /shorten` - Shorten a URL into the caller's session
pub fn shorten_routes() -> Router<AppState> {
    Router::new().route("/shorten", post(shorten_handler))
}

/// Read-only routes scoped to the caller's session.
///
/// # Endpoints
///
/// - `GET /links` - Session link list, newest first
pub fn session_routes() -> Router<AppState> {
    Router::new().route("/links", get(links_handler))
}

/// Routes that do not depend on a session.
///
/// # Endpoints
///
/// - `GET /analytics` - Dashboard figures
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/analytics", get(analytics_handler))
}
