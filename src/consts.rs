//! Default DOM contract values for the report markup.

// ── Theme ───────────────────────────────────────────────────────

/// `localStorage` key holding the explicit theme choice.
pub const THEME_STORAGE_KEY: &str = "theme-preference";

/// Attribute on `<html>` that the stylesheet keys off.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Media query for the system dark color scheme.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

pub const THEME_TOGGLE_ID: &str = "themeToggle";

// ── Table of contents ───────────────────────────────────────────

pub const TOC_ID: &str = "toc";

pub const SECTION_SELECTOR: &str = ".report__section, .report__subsection, .report__subsubsection";

pub const TOC_LINK_SELECTOR: &str = ".toc__link";

pub const ACTIVE_CLASS: &str = "active";

/// Observer margin: the band between 10% and 20% from the top of the viewport.
pub const TOC_ROOT_MARGIN: &str = "-10% 0px -80% 0px";

/// Minimum viewport width, in CSS pixels, at which the TOC is a sidebar.
pub const WIDE_LAYOUT_MIN_PX: f64 = 1200.0;

// ── Drawer ──────────────────────────────────────────────────────

pub const TOC_TOGGLE_ID: &str = "tocToggle";

pub const TOC_CLOSE_ID: &str = "tocClose";

pub const TOC_OVERLAY_ID: &str = "tocOverlay";

pub const DRAWER_OPEN_CLASS: &str = "toc--open";

pub const OVERLAY_VISIBLE_CLASS: &str = "toc-overlay--visible";

// ── Scrolling ───────────────────────────────────────────────────

pub const IN_PAGE_ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Delay before scrolling to the URL hash on load, letting styles settle.
pub const HASH_SCROLL_DELAY_MS: u32 = 100;

// ── External links ──────────────────────────────────────────────

pub const EXTERNAL_LINK_SELECTOR: &str = "a[target=\"_blank\"]";

pub const EXTERNAL_ICON_CLASS: &str = "external-icon";

pub const EXTERNAL_ICON_TEXT: &str = " \u{2197}";

// ── Config ──────────────────────────────────────────────────────

/// Id of the optional `<script type="application/json">` config block.
pub const CONFIG_ELEMENT_ID: &str = "report-config";
