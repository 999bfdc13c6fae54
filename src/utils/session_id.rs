//! Session identifiers and the cookie that carries them.

use axum::http::HeaderMap;
use axum::http::header::COOKIE;
use rand::Rng;
use std::fmt;

/// Name of the cookie holding the session identifier.
pub const SESSION_COOKIE: &str = "sl_session";

const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const SESSION_ID_LEN: usize = 32;

/// Opaque identifier of a visitor session.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    /// Generates a fresh random identifier (32 alphanumeric characters).
    pub fn generate() -> Self {
        let mut rng = rand::rng();

        let id = (0..SESSION_ID_LEN)
            .map(|_| {
                let idx = rng.random_range(0..CHARSET.len());
                CHARSET[idx] as char
            })
            .collect();

        Self(id)
    }

    /// Accepts a client-supplied identifier if it has the expected shape.
    pub fn parse(value: &str) -> Option<Self> {
        let well_formed =
            value.len() == SESSION_ID_LEN && value.bytes().all(|b| b.is_ascii_alphanumeric());

        well_formed.then(|| Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `Set-Cookie` header value for this session.
    pub fn to_cookie(&self) -> String {
        format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax",
            SESSION_COOKIE, self.0
        )
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extracts the session identifier from a request's `Cookie` headers.
///
/// Handles several cookies per header, separated by semicolons. Values that
/// are not well-formed session identifiers are ignored.
pub fn from_headers(headers: &HeaderMap) -> Option<SessionId> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|header| header.to_str().ok())
        .flat_map(|cookie_str| cookie_str.split(';'))
        .find_map(|cookie| {
            let mut parts = cookie.trim().splitn(2, '=');
            match (parts.next(), parts.next()) {
                (Some(SESSION_COOKIE), Some(value)) => SessionId::parse(value),
                _ => None,
            }
        })
}
