//! Server-side page rendering.

use minijinja::{context, Environment};

use super::SiteContent;
use crate::config::SiteConfig;
use crate::ui::Theme;
use crate::Result;

const INDEX_TEMPLATE: &str = "index.html";

/// Renders the landing page.
///
/// The template name ends in `.html`, so minijinja escapes every value.
pub struct PageRenderer {
    env: Environment<'static>,
    content: SiteContent,
}

impl PageRenderer {
    /// Compile the page template for the given site.
    pub fn new(site: &SiteConfig) -> Result<Self> {
        let mut env = Environment::new();
        env.add_template(INDEX_TEMPLATE, include_str!("../../templates/index.html"))?;

        Ok(Self {
            env,
            content: SiteContent::from_config(site),
        })
    }

    /// Render the full page for a visitor with the given theme.
    pub fn render_index(&self, theme: Theme) -> Result<String> {
        let template = self.env.get_template(INDEX_TEMPLATE)?;
        let html = template.render(context! {
            site => &self.content,
            brand => self.content.short_name(),
            dark => theme.is_dark(),
            theme => theme.as_str(),
        })?;
        Ok(html)
    }
}
