//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Components Checked
///
/// 1. **Sessions**: Live session count against the configured maximum
/// 2. **Latency**: Configured simulated delay
///
/// Both components are in-process, so the service always reports healthy
/// while it can answer.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "sessions": { "status": "ok", "message": "Active: 3 (max 10000)" },
///     "latency": { "status": "ok", "message": "Simulated delay: 1000ms" }
///   }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            sessions: check_sessions(&state),
            latency: check_latency(&state),
        },
    })
}

fn check_sessions(state: &AppState) -> CheckStatus {
    CheckStatus {
        status: "ok".to_string(),
        message: Some(format!(
            "Active: {} (max {})",
            state.sessions.len(),
            state.sessions.max_sessions()
        )),
    }
}

fn check_latency(state: &AppState) -> CheckStatus {
    let delay = state.shortener_service.latency();
    let message = if delay.is_zero() {
        "Simulated delay: disabled".to_string()
    } else {
        format!("Simulated delay: {}ms", delay.as_millis())
    };

    CheckStatus {
        status: "ok".to_string(),
        message: Some(message),
    }
}
