//! Handler for link shortening endpoint.

use axum::{Extension, Json, extract::State, http::StatusCode};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::domain::entities::Notice;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::session_id::SessionId;

/// Shortens a URL and records it in the caller's session.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/page" }
/// ```
///
/// # Response
///
/// `201 Created`, returned after the simulated latency:
///
/// ```json
/// {
///   "link": {
///     "id": "k3x9qa",
///     "original_url": "https://example.com/page",
///     "short_url": "https://short.ly/k3x9qa",
///     "clicks": 0,
///     "created_at": "2025-03-07T15:04:05Z"
///   },
///   "notice": {
///     "title": "URL shortened successfully!",
///     "description": "Your shortened URL is ready to use.",
///     "variant": "default"
///   }
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request with code `empty_input` or `invalid_format`.
/// Rejected input is answered immediately, without the simulated latency.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let link = state
        .shortener_service
        .shorten_for_session(&state.sessions, &session, &payload.url)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            link,
            notice: Notice::shortened(),
        }),
    ))
}
