//! Page navigation state.
//!
//! Mirrors what the landing page script tracks: which section is under the
//! navigation bar, the colour theme and whether the mobile menu is open.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Distance from the viewport top, in pixels, at which a section counts as active.
pub const ACTIVE_LINE_PX: f64 = 100.0;

/// Name of the cookie / storage key holding the theme.
pub const THEME_KEY: &str = "theme";

/// Page sections in document order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Home,
    Services,
    About,
    Contact,
}

impl Section {
    /// All sections, top to bottom.
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::Services,
        Section::About,
        Section::Contact,
    ];

    /// Element id / navigation label.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Services => "services",
            Section::About => "about",
            Section::Contact => "contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| format!("unknown section: {s}"))
    }
}

/// Viewport-relative vertical extent of a rendered section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub section: Section,
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    fn spans_active_line(&self) -> bool {
        self.top <= ACTIVE_LINE_PX && self.bottom >= ACTIVE_LINE_PX
    }
}

/// Colour theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Read a stored theme value; only `"dark"` selects dark mode.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    /// Value to store.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// The other theme.
    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Navigation state of one page view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavState {
    active_section: Section,
    mobile_menu_open: bool,
    theme: Theme,
    scroll_target: Option<Section>,
}

impl NavState {
    /// Fresh state with the given stored theme.
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    pub fn active_section(&self) -> Section {
        self.active_section
    }

    pub fn is_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Last section requested with [`NavState::scroll_to`].
    pub fn scroll_target(&self) -> Option<Section> {
        self.scroll_target
    }

    /// Recompute the active section after a scroll.
    ///
    /// The first section in page order that spans the active line wins. When
    /// none does, the previous section stays active.
    pub fn update_active(&mut self, bounds: &[SectionBounds]) -> Section {
        let current = Section::ALL.into_iter().find(|section| {
            bounds
                .iter()
                .any(|b| b.section == *section && b.spans_active_line())
        });
        if let Some(section) = current {
            self.active_section = section;
        }
        self.active_section
    }

    /// Request a scroll to `section`. Closes the mobile menu.
    pub fn scroll_to(&mut self, section: Section) {
        self.scroll_target = Some(section);
        self.mobile_menu_open = false;
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.mobile_menu_open = !self.mobile_menu_open;
        self.mobile_menu_open
    }

    /// Flip the theme and return the value to persist.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }
}
