//! Landing page content and rendering.

mod content;
mod render;

pub use content::{Service, SiteContent};
pub use render::PageRenderer;
