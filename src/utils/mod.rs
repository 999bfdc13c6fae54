//! Utility functions for URL validation and short code synthesis.
//!
//! - [`url_validator`] - Shape check for submitted URLs
//! - [`code_generator`] - Random base-36 short codes and display URLs
//! - [`session_id`] - Opaque session identifiers and cookie parsing

pub mod code_generator;
pub mod session_id;
pub mod url_validator;
