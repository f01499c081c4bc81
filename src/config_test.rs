#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn defaults_match_report_markup() {
    let c = ReportConfig::default();
    assert_eq!(c.theme.storage_key, "theme-preference");
    assert_eq!(c.theme.attribute, "data-theme");
    assert_eq!(c.theme.toggle_id, "themeToggle");
    assert_eq!(c.toc.panel_id, "toc");
    assert_eq!(c.toc.link_selector, ".toc__link");
    assert_eq!(c.toc.root_margin, "-10% 0px -80% 0px");
    assert_eq!(c.toc.wide_layout_min_px, 1200.0);
    assert_eq!(c.drawer.open_id, "tocToggle");
    assert_eq!(c.drawer.close_id, "tocClose");
    assert_eq!(c.drawer.overlay_id, "tocOverlay");
    assert_eq!(c.drawer.open_class, "toc--open");
    assert_eq!(c.drawer.overlay_visible_class, "toc-overlay--visible");
    assert_eq!(c.scroll.hash_delay_ms, 100);
    assert_eq!(c.links.selector, "a[target=\"_blank\"]");
    assert_eq!(c.links.icon_class, "external-icon");
}

#[test]
fn defaults_are_valid() {
    assert!(ReportConfig::default().validate().is_ok());
    assert_eq!(ReportConfig::default().log_level().unwrap(), log::Level::Info);
}

// =============================================================
// JSON overrides
// =============================================================

#[test]
fn empty_object_gives_defaults() {
    assert_eq!(ReportConfig::from_json("{}").unwrap(), ReportConfig::default());
}

#[test]
fn partial_override_merges_over_defaults() {
    let c = ReportConfig::from_json(r#"{ "toc": { "wide_layout_min_px": 1024 }, "scroll": { "hash_delay_ms": 0 } }"#)
        .unwrap();
    assert_eq!(c.toc.wide_layout_min_px, 1024.0);
    assert_eq!(c.toc.link_selector, ".toc__link");
    assert_eq!(c.scroll.hash_delay_ms, 0);
    assert_eq!(c.scroll.anchor_selector, "a[href^=\"#\"]");
    assert_eq!(c.theme, ThemeConfig::default());
}

#[test]
fn log_level_parses_case_insensitively() {
    let c = ReportConfig::from_json(r#"{ "log_level": "DEBUG" }"#).unwrap();
    assert_eq!(c.log_level().unwrap(), log::Level::Debug);
}

#[test]
fn unknown_fields_are_ignored() {
    assert!(ReportConfig::from_json(r#"{ "analytics": true }"#).is_ok());
}

// =============================================================
// Rejections
// =============================================================

#[test]
fn malformed_json_is_rejected() {
    assert!(matches!(ReportConfig::from_json("{ toc: }"), Err(ConfigError::Json(_))));
}

#[test]
fn wrong_type_is_rejected() {
    assert!(matches!(
        ReportConfig::from_json(r#"{ "scroll": { "hash_delay_ms": "soon" } }"#),
        Err(ConfigError::Json(_))
    ));
}

#[test]
fn empty_storage_key_is_rejected() {
    let err = ReportConfig::from_json(r#"{ "theme": { "storage_key": "  " } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Empty { field: "theme.storage_key" }));
}

#[test]
fn empty_drawer_id_is_rejected() {
    let err = ReportConfig::from_json(r#"{ "drawer": { "open_id": "" } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Empty { field: "drawer.open_id" }));
    let err = ReportConfig::from_json(r#"{ "drawer": { "drawer_id": " " } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Empty { field: "drawer.drawer_id" }));
}

#[test]
fn every_element_id_must_be_non_empty() {
    let cases = [
        (r#"{ "theme": { "toggle_id": "" } }"#, "theme.toggle_id"),
        (r#"{ "toc": { "panel_id": "" } }"#, "toc.panel_id"),
        (r#"{ "drawer": { "close_id": "" } }"#, "drawer.close_id"),
        (r#"{ "drawer": { "overlay_id": "" } }"#, "drawer.overlay_id"),
    ];
    for (raw, expected) in cases {
        match ReportConfig::from_json(raw) {
            Err(ConfigError::Empty { field }) => assert_eq!(field, expected),
            other => panic!("{raw}: expected empty-field error, got {other:?}"),
        }
    }
}

#[test]
fn negative_breakpoint_is_rejected() {
    let err = ReportConfig::from_json(r#"{ "toc": { "wide_layout_min_px": -5 } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::OutOfRange { field: "toc.wide_layout_min_px", .. }));
}

#[test]
fn unknown_log_level_is_rejected() {
    let err = ReportConfig::from_json(r#"{ "log_level": "loud" }"#).unwrap_err();
    assert!(matches!(err, ConfigError::LogLevel(level) if level == "loud"));
}
