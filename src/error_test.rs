use super::*;

#[test]
fn dom_error_display_names_the_operation() {
    let err = DomError::js("localStorage.setItem", "QuotaExceededError");
    assert_eq!(err.to_string(), "localStorage.setItem failed: QuotaExceededError");
}

#[test]
fn dom_error_display_for_missing_global() {
    assert_eq!(DomError::Unavailable("document").to_string(), "browser global unavailable: document");
}

#[test]
fn config_error_wraps_json_errors() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = ConfigError::from(json_err);
    assert!(err.to_string().starts_with("invalid config json:"));
}

#[test]
fn config_error_out_of_range_shows_value() {
    let err = ConfigError::OutOfRange { field: "toc.wide_layout_min_px", value: -1.0 };
    assert_eq!(err.to_string(), "config field `toc.wide_layout_min_px` is out of range: -1");
}
