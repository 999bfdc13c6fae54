//! Shortener page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Extension, extract::State, response::IntoResponse};

use crate::domain::entities::{Notice, ShortenedLink};
use crate::state::AppState;
use crate::utils::session_id::SessionId;
use crate::web::views::Tab;

/// Template for the shortener page.
///
/// Renders `templates/index.html` with:
/// - Hero copy and the URL form
/// - Feature cards
/// - The session's shortened URLs (only when there are any)
/// - An optional notice from the last submission
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub tab: Tab,
    /// Value kept in the URL input.
    pub url: String,
    pub notice: Option<Notice>,
    pub copied: Notice,
    pub links: Vec<ShortenedLink>,
}

impl IndexTemplate {
    pub fn new(url: String, notice: Option<Notice>, links: Vec<ShortenedLink>) -> Self {
        Self {
            tab: Tab::Shortener,
            url,
            notice,
            copied: Notice::copied(),
            links,
        }
    }
}

/// Renders the shortener page.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
) -> impl IntoResponse {
    IndexTemplate::new(String::new(), None, state.sessions.links(&session))
}
