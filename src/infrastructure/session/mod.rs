//! Visitor sessions.
//!
//! A session is identified by the `sl_session` cookie and owns one
//! [`crate::domain::SessionRegistry`]. Sessions live in memory only.

mod store;

pub use store::SessionStore;
