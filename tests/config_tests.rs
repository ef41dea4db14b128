// Host-side tests for site configuration defaults and overrides.

#![allow(dead_code)]
mod config {
    include!("../src/core/config.rs");
}

use config::*;

#[test]
fn defaults() {
    let c = SiteConfig::default();
    assert_eq!(c.splash_delay_ms, 2400);
    assert_eq!(c.header_threshold, 100.0);
    assert_eq!(c.header_hidden_top, "-100px");
    assert_eq!(c.reveal_threshold, 0.1);
    assert_eq!(c.theme_key, "theme");
    assert_eq!(c.particles_container, "particles-js");
    assert!(c.hoverable_selector.contains(".project-card"));
}

#[test]
fn header_threshold_override() {
    let mut c = SiteConfig::default();
    assert!(c.override_header_threshold(" 0 "));
    assert_eq!(c.header_threshold, 0.0);
    assert!(c.override_header_threshold("64.5"));
    assert_eq!(c.header_threshold, 64.5);
}

#[test]
fn invalid_override_keeps_previous_value() {
    let mut c = SiteConfig::default();
    for raw in ["", "abc", "-10", "inf", "NaN"] {
        assert!(!c.override_header_threshold(raw), "{raw:?} accepted");
        assert_eq!(c.header_threshold, 100.0);
    }
}
