//! Handler for the session link list.

use axum::{Extension, Json, extract::State};

use crate::api::dto::links::LinksResponse;
use crate::state::AppState;
use crate::utils::session_id::SessionId;

/// Lists the links created in the caller's session, newest first.
///
/// # Endpoint
///
/// `GET /api/links`
pub async fn links_handler(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
) -> Json<LinksResponse> {
    Json(state.sessions.links(&session).into())
}
