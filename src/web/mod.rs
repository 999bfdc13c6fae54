//! Server-rendered pages.
//!
//! Uses Askama templates from `templates/`. Static assets (stylesheet and the
//! copy-to-clipboard script) are served from `static/`.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration
//! - [`views`] - Chart and tab view models

pub mod handlers;
pub mod routes;
pub mod views;
