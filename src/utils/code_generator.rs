//! Short code synthesis.
//!
//! Codes are 6 characters sampled from the base-36 alphabet `[0-9a-z]`.
//! Generation does not consult any registry, so two calls may return the
//! same code.

use rand::Rng;

/// Number of characters in a synthesized short code.
pub const CODE_LENGTH: usize = 6;

/// Base-36 alphabet used for short codes.
const CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generates a random short code using the thread-local generator.
///
/// # Examples
///
/// ```
/// use shortlink::utils::code_generator::{generate_code, CODE_LENGTH};
///
/// let code = generate_code();
/// assert_eq!(code.len(), CODE_LENGTH);
/// assert!(code.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
/// ```
pub fn generate_code() -> String {
    generate_code_with(&mut rand::rng())
}

/// Generates a short code from the given random source.
///
/// Seeded generators make the output reproducible in tests.
pub fn generate_code_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..CODE_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// Builds the display URL for a code under a fixed base.
///
/// A trailing slash on `base_url` is ignored.
///
/// ```
/// use shortlink::utils::code_generator::short_url;
///
/// assert_eq!(short_url("https://short.ly", "abc123"), "https://short.ly/abc123");
/// assert_eq!(short_url("https://short.ly/", "abc123"), "https://short.ly/abc123");
/// ```
pub fn short_url(base_url: &str, code: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), code)
}
