//! HTML template rendering handlers.

mod analytics;
mod home;
mod shorten;

pub use analytics::{AnalyticsTemplate, analytics_page_handler};
pub use home::{IndexTemplate, home_handler};
pub use shorten::{ShortenForm, shorten_form_handler};
