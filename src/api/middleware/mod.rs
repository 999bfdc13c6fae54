//! HTTP middleware for request processing and protection.
//!
//! Provides session resolution, rate limiting, and observability middleware.

pub mod rate_limit;
pub mod session;
pub mod tracing;
