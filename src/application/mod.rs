//! Application layer services.
//!
//! Services coordinate validation, simulated latency, code synthesis and
//! session storage, and give HTTP handlers and the CLI a single entry point.
//!
//! # Available Services
//!
//! - [`services::shortener_service::ShortenerService`] - Validate, delay, synthesize, register
//! - [`services::analytics_service::AnalyticsService`] - Fixed dashboard figures

pub mod services;
