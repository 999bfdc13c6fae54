//! Core domain entities.
//!
//! - [`ShortenedLink`] - A link produced by the shortening flow
//! - [`Notice`] - Title/description shown after a user action
//! - [`AnalyticsSnapshot`] - The figures rendered on the analytics dashboard

pub mod analytics;
pub mod link;
pub mod notice;

pub use analytics::{AnalyticsSnapshot, CountryClicks, DailyClicks, StatCard, TopUrl};
pub use link::ShortenedLink;
pub use notice::{Notice, NoticeVariant};
