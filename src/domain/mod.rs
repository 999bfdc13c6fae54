//! Domain layer: entities and the per-session link registry.
//!
//! - [`entities`] - Plain data structures shown to users
//! - [`registry`] - Newest-first list of links owned by one session
//!
//! Nothing in this layer performs I/O. The registry is an owned value that
//! callers pass around explicitly; sharing across requests is handled by
//! [`crate::infrastructure::session::SessionStore`].

pub mod entities;
pub mod registry;

pub use registry::SessionRegistry;
