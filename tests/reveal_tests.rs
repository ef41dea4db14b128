// Host-side tests for one-shot section reveal.

#![allow(dead_code)]
mod reveal {
    include!("../src/core/reveal.rs");
}

use reveal::*;

fn active(n: usize) -> RevealTracker {
    let mut t = RevealTracker::new(n, 0.1);
    assert!(t.activate());
    t
}

#[test]
fn inert_until_activated() {
    let mut t = RevealTracker::new(3, 0.1);
    assert!(!t.observe(1, true, 0.5));
    assert!(!t.is_visible(1));
}

#[test]
fn requires_threshold_ratio() {
    let mut t = active(1);
    assert!(!t.observe(0, true, 0.05));
    assert!(!t.observe(0, false, 0.5));
    assert!(t.observe(0, true, 0.1));
}

#[test]
fn reveal_is_monotonic() {
    let mut t = active(2);
    assert!(t.observe(0, true, 0.4));
    // Scrolling away and back never clears or re-fires.
    assert!(!t.observe(0, false, 0.0));
    assert!(!t.observe(0, true, 1.0));
    assert!(t.is_visible(0));
    assert!(!t.is_visible(1));
    assert!(t.observe(1, true, 0.2));
    assert!(t.is_visible(0) && t.is_visible(1));
}

#[test]
fn out_of_range_index_ignored() {
    let mut t = active(1);
    assert!(!t.observe(5, true, 1.0));
    assert!(!t.is_visible(5));
    assert!(!t.is_visible(0));
}

#[test]
fn threshold_is_clamped() {
    assert_eq!(RevealTracker::new(0, -1.0).threshold(), 0.0);
    assert_eq!(RevealTracker::new(0, 3.0).threshold(), 1.0);
}
