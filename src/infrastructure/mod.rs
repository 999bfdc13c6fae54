//! Infrastructure layer: runtime-backed implementations.
//!
//! - [`latency`] - Simulated request latency
//! - [`session`] - In-memory, cookie-keyed session store

pub mod latency;
pub mod session;
