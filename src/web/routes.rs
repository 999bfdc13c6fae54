//! Page route configuration.

use crate::state::AppState;
use crate::web::handlers::{analytics_page_handler, home_handler, shorten_form_handler};
use axum::{
    Router,
    routing::{get, post},
};

/// Form submission route. Rate limited by the top-level router.
///
/// # Endpoints
///
/// - `POST /shorten` - Shortener form submission
pub fn shorten_routes() -> Router<AppState> {
    Router::new().route("/shorten", post(shorten_form_handler))
}

/// Pages that show the caller's session.
///
/// # Endpoints
///
/// - `GET /` - Shortener page
pub fn session_routes() -> Router<AppState> {
    Router::new().route("/", get(home_handler))
}

/// Pages that do not depend on a session.
///
/// # Endpoints
///
/// - `GET /analytics` - Analytics dashboard
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/analytics", get(analytics_page_handler))
}
