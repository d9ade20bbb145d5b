#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_config_is_valid() {
    let cfg = MotionConfig::default();
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.markers.watch, "animate-on-scroll");
    assert_eq!(cfg.reveal.threshold, 0.10);
    assert_eq!(cfg.reveal.early_trigger_px, 60.0);
    assert_eq!(cfg.nav.reveal_threshold_px, 120.0);
    assert_eq!(cfg.nav.hysteresis_px, 5.0);
}

#[test]
fn selectors_prefix_class_names() {
    let markers = MarkerConfig::default();
    assert_eq!(markers.watch_selector(), ".animate-on-scroll");
    assert_eq!(markers.stagger_selector(), ".stagger-child");
    assert_eq!(markers.progress_selector(), ".scroll-progress");
    assert_eq!(markers.nav_selector(), ".nav");
}

#[test]
fn root_margin_uses_negative_bottom_inset() {
    assert_eq!(RevealOptions::default().root_margin(), "0px 0px -60px 0px");
    assert_eq!(RevealOptions::compact().root_margin(), "0px 0px -40px 0px");
    let flush = RevealOptions { early_trigger_px: 0.0, ..RevealOptions::default() };
    assert_eq!(flush.root_margin(), "0px");
}

#[test]
fn compact_keeps_stagger_timing() {
    let compact = RevealOptions::compact();
    assert_eq!(compact.threshold, 0.08);
    assert_eq!(compact.stagger_step_ms, 80);
    assert_eq!(compact.stagger_base_ms, 100);
}

#[test]
fn from_json_merges_partial_overrides() {
    let cfg = MotionConfig::from_json(r#"{ "reveal": { "threshold": 0.08 }, "markers": { "nav": "site-nav" } }"#)
        .expect("config should parse");
    assert_eq!(cfg.reveal.threshold, 0.08);
    assert_eq!(cfg.reveal.early_trigger_px, 60.0);
    assert_eq!(cfg.markers.nav, "site-nav");
    assert_eq!(cfg.markers.watch, "animate-on-scroll");
}

#[test]
fn from_json_empty_object_is_default() {
    let cfg = MotionConfig::from_json("{}").expect("empty object should parse");
    assert_eq!(cfg, MotionConfig::default());
}

#[test]
fn from_json_rejects_malformed_input() {
    let err = MotionConfig::from_json("{ not json").expect_err("should fail");
    assert!(matches!(err, ClayError::ConfigParse(_)));
}

#[test]
fn validate_rejects_out_of_range_threshold() {
    for threshold in [0.0, -0.5, 1.5, f64::NAN] {
        let cfg = MotionConfig {
            reveal: RevealOptions { threshold, ..RevealOptions::default() },
            ..MotionConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(ClayError::Config(_))), "threshold {threshold} should fail");
    }
}

#[test]
fn validate_accepts_full_visibility_threshold() {
    let cfg = MotionConfig {
        reveal: RevealOptions { threshold: 1.0, ..RevealOptions::default() },
        ..MotionConfig::default()
    };
    assert!(cfg.validate().is_ok());
}

#[test]
fn validate_rejects_negative_margin() {
    let err = MotionConfig::from_json(r#"{ "reveal": { "earlyTriggerPx": -4 } }"#).expect_err("should fail");
    assert!(err.to_string().contains("earlyTriggerPx"));
}

#[test]
fn validate_rejects_empty_or_dotted_marker() {
    let err = MotionConfig::from_json(r#"{ "markers": { "watch": "  " } }"#).expect_err("should fail");
    assert!(err.to_string().contains("watch"));

    let err = MotionConfig::from_json(r#"{ "markers": { "nav": ".nav" } }"#).expect_err("should fail");
    assert!(err.to_string().contains("bare class name"));
}

#[test]
fn validate_rejects_negative_nav_hysteresis() {
    let err = MotionConfig::from_json(r#"{ "nav": { "hysteresisPx": -1 } }"#).expect_err("should fail");
    assert!(err.to_string().contains("hysteresisPx"));
}

#[test]
fn validate_rejects_zero_counter_duration() {
    let err = MotionConfig::from_json(r#"{ "counter": { "durationMs": 0 } }"#).expect_err("should fail");
    assert!(err.to_string().contains("durationMs"));
}
