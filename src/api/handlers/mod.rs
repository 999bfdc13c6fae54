//! HTTP request handlers for API endpoints.

pub mod analytics;
pub mod fallback;
pub mod health;
pub mod links;
pub mod shorten;

pub use analytics::analytics_handler;
pub use fallback::not_found_handler;
pub use health::health_handler;
pub use links::links_handler;
pub use shorten::shorten_handler;
