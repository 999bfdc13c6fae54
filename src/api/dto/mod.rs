//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization. The analytics
//! endpoint serializes [`crate::domain::entities::AnalyticsSnapshot`] directly.

pub mod health;
pub mod links;
pub mod shorten;
