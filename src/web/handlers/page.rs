//! Landing page handler.

use axum::{extract::State, response::Html};
use axum_extra::extract::cookie::CookieJar;
use std::sync::Arc;

use super::AppState;
use crate::ui::{Theme, THEME_KEY};
use crate::web::error::ApiError;

/// GET / - Render the landing page.
///
/// Dark mode is taken from the `theme` cookie set by the page script.
pub async fn index(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> Result<Html<String>, ApiError> {
    let theme = Theme::from_stored(jar.get(THEME_KEY).map(|c| c.value()));
    let html = state.pages.render_index(theme)?;
    Ok(Html(html))
}

/// Fallback for unknown routes.
pub async fn not_found() -> ApiError {
    ApiError::not_found("Not found")
}
