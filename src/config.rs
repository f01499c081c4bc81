//! Page-level configuration.
//!
//! Defaults describe the report markup this crate ships with. A page can
//! override any subset by embedding JSON:
//!
//! ```html
//! <script type="application/json" id="report-config">
//!   { "toc": { "wide_layout_min_px": 1024 }, "log_level": "debug" }
//! </script>
//! ```
//!
//! Missing fields keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::*;
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub attribute: String,
    pub dark_scheme_query: String,
    pub toggle_id: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: THEME_STORAGE_KEY.to_owned(),
            attribute: THEME_ATTRIBUTE.to_owned(),
            dark_scheme_query: DARK_SCHEME_QUERY.to_owned(),
            toggle_id: THEME_TOGGLE_ID.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TocConfig {
    pub panel_id: String,
    pub section_selector: String,
    pub link_selector: String,
    pub active_class: String,
    pub root_margin: String,
    pub wide_layout_min_px: f64,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            panel_id: TOC_ID.to_owned(),
            section_selector: SECTION_SELECTOR.to_owned(),
            link_selector: TOC_LINK_SELECTOR.to_owned(),
            active_class: ACTIVE_CLASS.to_owned(),
            root_margin: TOC_ROOT_MARGIN.to_owned(),
            wide_layout_min_px: WIDE_LAYOUT_MIN_PX,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DrawerConfig {
    pub drawer_id: String,
    pub open_id: String,
    pub close_id: String,
    pub overlay_id: String,
    pub open_class: String,
    pub overlay_visible_class: String,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            drawer_id: TOC_ID.to_owned(),
            open_id: TOC_TOGGLE_ID.to_owned(),
            close_id: TOC_CLOSE_ID.to_owned(),
            overlay_id: TOC_OVERLAY_ID.to_owned(),
            open_class: DRAWER_OPEN_CLASS.to_owned(),
            overlay_visible_class: OVERLAY_VISIBLE_CLASS.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    pub anchor_selector: String,
    pub hash_delay_ms: u32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self { anchor_selector: IN_PAGE_ANCHOR_SELECTOR.to_owned(), hash_delay_ms: HASH_SCROLL_DELAY_MS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LinksConfig {
    pub selector: String,
    pub icon_class: String,
    pub icon_text: String,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            selector: EXTERNAL_LINK_SELECTOR.to_owned(),
            icon_class: EXTERNAL_ICON_CLASS.to_owned(),
            icon_text: EXTERNAL_ICON_TEXT.to_owned(),
        }
    }
}

/// Everything the browser binding reads from the page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub theme: ThemeConfig,
    pub toc: TocConfig,
    pub drawer: DrawerConfig,
    pub scroll: ScrollConfig,
    pub links: LinksConfig,
    /// One of `error`, `warn`, `info`, `debug`, `trace` (case-insensitive).
    pub log_level: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            theme: ThemeConfig::default(),
            toc: TocConfig::default(),
            drawer: DrawerConfig::default(),
            scroll: ScrollConfig::default(),
            links: LinksConfig::default(),
            log_level: "info".to_owned(),
        }
    }
}

impl ReportConfig {
    /// Parse a JSON override block and validate the result.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the binding cannot use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("theme.storage_key", &self.theme.storage_key),
            ("theme.attribute", &self.theme.attribute),
            ("theme.dark_scheme_query", &self.theme.dark_scheme_query),
            ("theme.toggle_id", &self.theme.toggle_id),
            ("toc.panel_id", &self.toc.panel_id),
            ("toc.section_selector", &self.toc.section_selector),
            ("toc.link_selector", &self.toc.link_selector),
            ("toc.active_class", &self.toc.active_class),
            ("drawer.drawer_id", &self.drawer.drawer_id),
            ("drawer.open_id", &self.drawer.open_id),
            ("drawer.close_id", &self.drawer.close_id),
            ("drawer.overlay_id", &self.drawer.overlay_id),
            ("drawer.open_class", &self.drawer.open_class),
            ("drawer.overlay_visible_class", &self.drawer.overlay_visible_class),
            ("scroll.anchor_selector", &self.scroll.anchor_selector),
            ("links.selector", &self.links.selector),
            ("links.icon_class", &self.links.icon_class),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ConfigError::Empty { field: *field });
        }

        let width = self.toc.wide_layout_min_px;
        if !width.is_finite() || width < 0.0 {
            return Err(ConfigError::OutOfRange { field: "toc.wide_layout_min_px", value: width });
        }

        self.log_level()?;
        Ok(())
    }

    /// The configured log level as a `log` filter.
    pub fn log_level(&self) -> Result<log::Level, ConfigError> {
        self.log_level
            .parse::<log::Level>()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }
}
