//! HTTP handlers.

pub mod contact;
pub mod page;

pub use contact::*;
pub use page::*;

use std::sync::Arc;

use crate::config::SiteConfig;
use crate::contact::{SubmissionSink, TracingSink};
use crate::site::PageRenderer;
use crate::Result;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Receiver of accepted contact submissions.
    pub sink: Arc<dyn SubmissionSink>,
    /// Landing page renderer.
    pub pages: Arc<PageRenderer>,
}

impl AppState {
    /// Create the state for a site, logging submissions through `tracing`.
    pub fn new(site: &SiteConfig) -> Result<Self> {
        Ok(Self {
            sink: Arc::new(TracingSink),
            pages: Arc::new(PageRenderer::new(site)?),
        })
    }

    /// Replace the submission sink.
    pub fn with_sink(mut self, sink: Arc<dyn SubmissionSink>) -> Self {
        self.sink = sink;
        self
    }
}
