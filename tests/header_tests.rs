// Host-side tests for the scroll-aware header.

#![allow(dead_code)]
mod header {
    include!("../src/core/header.rs");
}

use header::*;
use HeaderVisibility::{Hidden, Shown};

fn run(threshold: f64, offsets: &[f64]) -> Vec<HeaderVisibility> {
    let mut tracker = HeaderTracker::new(threshold);
    offsets.iter().map(|o| tracker.on_scroll(*o)).collect()
}

#[test]
fn thresholded_scenario() {
    assert_eq!(
        run(100.0, &[0.0, 50.0, 150.0, 120.0]),
        vec![Shown, Shown, Hidden, Shown]
    );
}

#[test]
fn stays_shown_near_top_while_scrolling_down() {
    assert_eq!(run(100.0, &[10.0, 40.0, 80.0, 100.0]), vec![Shown; 4]);
}

#[test]
fn keeps_hidden_while_scrolling_down_past_threshold() {
    assert_eq!(
        run(100.0, &[120.0, 200.0, 300.0]),
        vec![Hidden, Hidden, Hidden]
    );
}

#[test]
fn equal_offset_shows_header() {
    assert_eq!(run(100.0, &[200.0, 200.0]), vec![Hidden, Shown]);
}

#[test]
fn baseline_updates_regardless_of_direction() {
    let mut tracker = HeaderTracker::new(100.0);
    assert_eq!(tracker.on_scroll(500.0), Hidden);
    assert_eq!(tracker.on_scroll(300.0), Shown);
    // Compared against 300, not the earlier 500.
    assert_eq!(tracker.on_scroll(310.0), Hidden);
}

#[test]
fn negative_and_non_finite_offsets_clamp_to_zero() {
    let mut tracker = HeaderTracker::new(100.0);
    tracker.on_scroll(250.0);
    assert_eq!(tracker.on_scroll(-40.0), Shown);
    assert_eq!(tracker.on_scroll(f64::NAN), Shown);
    // Baseline is back at 0, so any offset past the threshold hides again.
    assert_eq!(tracker.on_scroll(101.0), Hidden);
}

#[test]
fn zero_threshold_tracks_direction_only() {
    assert_eq!(
        run(0.0, &[0.0, 50.0, 150.0, 120.0]),
        vec![Shown, Hidden, Hidden, Shown]
    );
}
