//! Session cookie middleware.

use axum::{
    extract::{Request, State},
    http::{HeaderValue, header::SET_COOKIE},
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::state::AppState;
use crate::utils::session_id;

/// Attaches the visitor's [`session_id::SessionId`] to the request.
///
/// # Cookie Format
///
/// ```text
/// Cookie: sl_session=<32 alphanumeric characters>
/// ```
///
/// # Flow
///
/// 1. Read `sl_session` from the `Cookie` header
/// 2. Resolve it in [`crate::infrastructure::session::SessionStore`]; unknown,
///    expired or missing identifiers get a fresh one, which is stored only
///    once a link is created under it
/// 3. Insert the identifier into request extensions for handlers
/// 4. For fresh identifiers, append `Set-Cookie` to the response
///
/// Handlers read the session with `Extension<SessionId>`.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/api/links", get(links_handler))
///     .layer(middleware::from_fn_with_state(state.clone(), session::layer))
///     .with_state(state);
/// ```
pub async fn layer(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let candidate = session_id::from_headers(req.headers());
    let (session, created) = state.sessions.resolve(candidate);

    req.extensions_mut().insert(session.clone());

    let mut response = next.run(req).await;

    if created {
        match HeaderValue::from_str(&session.to_cookie()) {
            Ok(cookie) => {
                response.headers_mut().append(SET_COOKIE, cookie);
            }
            Err(e) => warn!("Failed to encode session cookie: {}", e),
        }
    }

    response
}
