//! Shortener form submission handler.

use axum::{
    Extension, Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::domain::entities::Notice;
use crate::state::AppState;
use crate::utils::session_id::SessionId;
use crate::web::handlers::home::IndexTemplate;

/// Form body of the shortener page.
#[derive(Debug, Deserialize)]
pub struct ShortenForm {
    #[serde(default)]
    pub url: String,
}

/// Handles a form submission and re-renders the shortener page.
///
/// # Endpoint
///
/// `POST /shorten` (`application/x-www-form-urlencoded`, field `url`)
///
/// # Responses
///
/// - **200 OK**: link created; input cleared, success notice shown
/// - **422 Unprocessable Entity**: validation failed; input kept, notice
///   names the failure (empty vs. malformed)
pub async fn shorten_form_handler(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Form(form): Form<ShortenForm>,
) -> Response {
    let result = state
        .shortener_service
        .shorten_for_session(&state.sessions, &session, &form.url)
        .await;

    let links = state.sessions.links(&session);

    match result {
        Ok(_) => IndexTemplate::new(String::new(), Some(Notice::shortened()), links).into_response(),
        Err(err) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            IndexTemplate::new(form.url, Some(Notice::from(&err)), links),
        )
            .into_response(),
    }
}
