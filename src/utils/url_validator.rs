//! Submitted URL validation.
//!
//! Only a minimal shape check is performed: the input must be non-blank and
//! start with `http://` or `https://` followed by at least one character.
//! The URL is never parsed, normalized or rewritten.

use regex::Regex;
use std::sync::LazyLock;

/// Compiled pattern for accepted URLs.
///
/// The first character after the scheme must not be a line terminator
/// (`\n`, `\r`, U+2028, U+2029), so `"https://\nexample.com"` is rejected.
/// Later characters are unrestricted.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://[^\n\r\x{2028}\x{2029}]").expect("URL pattern is valid")
});

/// Reasons a submitted URL is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL must not be empty")]
    EmptyInput,

    #[error("URL must start with http:// or https://")]
    InvalidFormat,
}

impl UrlValidationError {
    /// Stable machine-readable code used in API error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyInput => "empty_input",
            Self::InvalidFormat => "invalid_format",
        }
    }
}

/// Validates a raw URL submission.
///
/// The emptiness check runs on the trimmed input; the format check runs on the
/// input exactly as submitted, so leading whitespace makes a URL invalid.
///
/// # Errors
///
/// - [`UrlValidationError::EmptyInput`] for empty or whitespace-only input
/// - [`UrlValidationError::InvalidFormat`] when the input is not `http://` or
///   `https://` followed by a character other than a line terminator
///
/// # Examples
///
/// ```
/// use shortlink::utils::url_validator::{validate_url, UrlValidationError};
///
/// assert!(validate_url("https://example.com/page").is_ok());
/// assert_eq!(validate_url("   "), Err(UrlValidationError::EmptyInput));
/// assert_eq!(validate_url("not-a-url"), Err(UrlValidationError::InvalidFormat));
/// ```
pub fn validate_url(raw: &str) -> Result<(), UrlValidationError> {
    if raw.trim().is_empty() {
        return Err(UrlValidationError::EmptyInput);
    }

    if !URL_PATTERN.is_match(raw) {
        return Err(UrlValidationError::InvalidFormat);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_https() {
        assert!(validate_url("https://example.com/page").is_ok());
    }

    #[test]
    fn test_accepts_http() {
        assert!(validate_url("http://example.com").is_ok());
    }

    #[test]
    fn test_accepts_anything_after_scheme() {
        // No host or encoding checks beyond the prefix.
        assert!(validate_url("https://x").is_ok());
        assert!(validate_url("http://not a host/with spaces").is_ok());
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(validate_url(""), Err(UrlValidationError::EmptyInput));
    }

    #[test]
    fn test_whitespace_only() {
        assert_eq!(validate_url("   \t\n"), Err(UrlValidationError::EmptyInput));
    }

    #[test]
    fn test_not_a_url() {
        assert_eq!(
            validate_url("not-a-url"),
            Err(UrlValidationError::InvalidFormat)
        );
    }

    #[test]
    fn test_scheme_without_rest() {
        assert_eq!(
            validate_url("https://"),
            Err(UrlValidationError::InvalidFormat)
        );
    }

    #[test]
    fn test_other_schemes_rejected() {
        for input in [
            "ftp://example.com",
            "javascript:alert(1)",
            "example.com",
            "www.example.com",
            "mailto:someone@example.com",
        ] {
            assert_eq!(
                validate_url(input),
                Err(UrlValidationError::InvalidFormat),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn test_scheme_is_case_sensitive() {
        assert_eq!(
            validate_url("HTTPS://example.com"),
            Err(UrlValidationError::InvalidFormat)
        );
    }

    #[test]
    fn test_leading_whitespace_is_invalid_format() {
        assert_eq!(
            validate_url("  https://example.com"),
            Err(UrlValidationError::InvalidFormat)
        );
    }

    #[test]
    fn test_newline_after_scheme_rejected() {
        assert_eq!(
            validate_url("https://\nexample.com"),
            Err(UrlValidationError::InvalidFormat)
        );
    }

    #[test]
    fn test_line_terminators_after_scheme_rejected() {
        for raw in ["https://\r", "https://\rexample.com", "http://\u{2028}x", "http://\u{2029}"] {
            assert_eq!(
                validate_url(raw),
                Err(UrlValidationError::InvalidFormat),
                "{raw:?}"
            );
        }
    }

    #[test]
    fn test_line_break_later_in_url_accepted() {
        assert!(validate_url("https://example.com\r\n").is_ok());
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(UrlValidationError::EmptyInput.code(), "empty_input");
        assert_eq!(UrlValidationError::InvalidFormat.code(), "invalid_format");
    }
}
