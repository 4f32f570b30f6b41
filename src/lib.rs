//! Excelsior - marketing site for an AI consulting business.
//!
//! Serves a single landing page and accepts contact form submissions
//! over a small JSON API.

pub mod client;
pub mod config;
pub mod contact;
pub mod error;
pub mod logging;
pub mod site;
pub mod ui;
pub mod web;

pub use config::Config;
pub use error::{Result, SiteError};
