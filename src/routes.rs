//! Top-level router configuration combining page and API routes.
//!
//! # Route Structure
//!
//! - `GET  /`              - Shortener page (session)
//! - `POST /shorten`       - Shortener form submission (session, rate limited)
//! - `GET  /analytics`     - Analytics dashboard page
//! - `POST /api/shorten`   - JSON shortening (session, rate limited)
//! - `GET  /api/links`     - JSON session link list (session)
//! - `GET  /api/analytics` - JSON dashboard figures
//! - `GET  /health`        - Health check
//! - `/static/*`           - Static assets
//!
//! Anything else answers with a JSON 404; short URLs are never resolved.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Session** - Cookie-keyed session resolution on session routes
//! - **Rate limiting** - Per-IP token bucket on link creation
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, not_found_handler};
use crate::api::middleware::{rate_limit, session, tracing};
use crate::state::AppState;
use crate::web;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Directory served under `/static`, relative to the working directory.
pub const STATIC_DIR: &str = "static";

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let session_layer = middleware::from_fn_with_state(state.clone(), session::layer);

    let api_router = Router::new()
        .merge(api::routes::shorten_routes().layer(rate_limit::shorten_layer()))
        .merge(api::routes::session_routes())
        .route_layer(session_layer.clone())
        .merge(api::routes::public_routes());

    let web_router = Router::new()
        .merge(web::routes::shorten_routes().layer(rate_limit::shorten_layer()))
        .merge(web::routes::session_routes())
        .route_layer(session_layer)
        .merge(web::routes::public_routes());

    let router = Router::new()
        .merge(web_router)
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .fallback(not_found_handler)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
