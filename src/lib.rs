//! # ShortLink
//!
//! Demo site for a URL-shortening product, built with Axum and Askama.
//!
//! Visitors paste a URL, wait through a simulated network delay, and get a
//! random 6-character short code under a fixed display base
//! (`https://short.ly/<code>` by default). Links live only in the visitor's
//! in-memory session; nothing is persisted and short URLs are never resolved.
//! The analytics dashboard shows fixed sample figures.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities and the per-session registry
//! - **Application Layer** ([`application`]) - Shortening flow and dashboard figures
//! - **Infrastructure Layer** ([`infrastructure`]) - Latency simulation and session storage
//! - **API Layer** ([`api`]) - JSON handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - Server-rendered pages
//!
//! ## Quick Start
//!
//! ```bash
//! export SHORT_BASE_URL="https://short.ly"   # Optional
//! export SIMULATED_LATENCY_MS=1000           # Optional, 0 disables
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AnalyticsService, ShortenerService};
    pub use crate::domain::SessionRegistry;
    pub use crate::domain::entities::{Notice, ShortenedLink};
    pub use crate::error::AppError;
    pub use crate::infrastructure::latency::{FixedDelay, LatencySimulator, NoDelay};
    pub use crate::infrastructure::session::SessionStore;
    pub use crate::state::AppState;
    pub use crate::utils::url_validator::UrlValidationError;
}
