//! Theme preference: stored choice, system fallback, toggle.
//!
//! The document root carries a `data-theme` attribute that the stylesheet
//! keys off. An explicit choice is persisted under one storage key; without
//! one, the theme follows the `prefers-color-scheme` media query, including
//! live changes to it.
//!
//! TRADE-OFFS
//! ==========
//! Only explicit choices (toggle, `set_theme`) are persisted. Persisting the
//! system-derived value at startup would make every later system change look
//! like an explicit choice and stop the page from following the OS setting.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;

/// Color scheme applied to the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    /// Parse a stored value. Anything other than `"dark"` / `"light"` is `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Theme implied by the system color-scheme query.
    #[must_use]
    pub fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// DOM/storage work requested by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    /// Set the theme attribute on the document root.
    Apply(Theme),
    /// Write the theme to the preference slot.
    Persist(Theme),
}

/// Owns the stored preference and the theme currently applied to the page.
#[derive(Debug, Clone, Default)]
pub struct ThemeController {
    stored: Option<Theme>,
    applied: Option<Theme>,
}

impl ThemeController {
    /// Build from the raw contents of the preference slot.
    #[must_use]
    pub fn new(stored: Option<&str>) -> Self {
        Self { stored: parse_stored(stored), applied: None }
    }

    /// The explicit choice, if one is stored.
    #[must_use]
    pub fn stored(&self) -> Option<Theme> {
        self.stored
    }

    /// The theme last applied to the document, if any.
    #[must_use]
    pub fn applied(&self) -> Option<Theme> {
        self.applied
    }

    /// Stored preference, or the system-derived theme when nothing is stored.
    #[must_use]
    pub fn preference(&self, system_dark: bool) -> Theme {
        self.stored.unwrap_or_else(|| Theme::from_system(system_dark))
    }

    /// Apply the preference once at page load.
    pub fn start(&mut self, system_dark: bool) -> Vec<ThemeAction> {
        let theme = self.preference(system_dark);
        log::debug!("theme: start with {theme} (stored={:?})", self.stored);
        vec![self.apply(theme)]
    }

    /// Apply and persist an explicit choice.
    pub fn set_theme(&mut self, theme: Theme) -> Vec<ThemeAction> {
        self.stored = Some(theme);
        vec![self.apply(theme), ThemeAction::Persist(theme)]
    }

    /// Flip the applied theme. An unset theme counts as light, so the first
    /// toggle on an unthemed page goes dark.
    pub fn toggle(&mut self) -> Vec<ThemeAction> {
        let next = self.applied.unwrap_or(Theme::Light).opposite();
        log::debug!("theme: toggle to {next}");
        self.set_theme(next)
    }

    /// React to a `prefers-color-scheme` change.
    ///
    /// `stored` is the slot re-read at event time, since another tab may have
    /// written it. A stored choice wins over the system.
    /// The system-derived theme is applied, never persisted.
    pub fn on_system_change(&mut self, stored: Option<&str>, system_dark: bool) -> Vec<ThemeAction> {
        self.stored = parse_stored(stored);
        if self.stored.is_some() {
            return Vec::new();
        }
        vec![self.apply(Theme::from_system(system_dark))]
    }

    fn apply(&mut self, theme: Theme) -> ThemeAction {
        self.applied = Some(theme);
        ThemeAction::Apply(theme)
    }
}

fn parse_stored(raw: Option<&str>) -> Option<Theme> {
    let raw = raw?;
    let theme = Theme::parse(raw);
    if theme.is_none() {
        log::debug!("theme: ignoring unrecognized stored value {raw:?}");
    }
    theme
}
