//! HTTP server initialization and runtime setup.
//!
//! Builds the shared state from configuration and runs the Axum server until
//! Ctrl+C.

use crate::application::services::{AnalyticsService, ShortenerService};
use crate::config::Config;
use crate::infrastructure::latency;
use crate::infrastructure::session::SessionStore;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds application state from configuration.
///
/// A zero simulated latency selects [`latency::NoDelay`].
pub fn build_state(config: &Config) -> AppState {
    let latency = latency::from_duration(config.simulated_latency());

    let shortener_service = Arc::new(ShortenerService::new(
        config.short_base_url.clone(),
        latency,
    ));
    let analytics_service = Arc::new(AnalyticsService::new());
    let sessions = Arc::new(SessionStore::new(
        config.session_ttl(),
        config.max_sessions,
    ));

    AppState::new(shortener_service, analytics_service, sessions)
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config);
    let app = app_router(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen_addr))?;
    let addr = listener.local_addr()?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => {
            tracing::warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
