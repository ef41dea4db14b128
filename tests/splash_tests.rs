// Host-side tests for splash sequencing.

#![allow(dead_code)]
mod splash {
    include!("../src/core/splash.rs");
}
mod reveal {
    include!("../src/core/reveal.rs");
}

use reveal::RevealTracker;
use splash::*;

const DELAY: u32 = 2400;

#[test]
fn splash_arms_timer_for_full_delay() {
    let c = SplashController::new(true, DELAY);
    assert_eq!(c.initial_delay(), Some(DELAY));
    assert_eq!(c.phase(), SplashPhase::Loading);
}

#[test]
fn missing_splash_reveals_synchronously() {
    let mut c = SplashController::new(false, DELAY);
    assert_eq!(c.initial_delay(), None);
    assert!(c.reveal());
    assert_eq!(c.phase(), SplashPhase::Revealed);
}

#[test]
fn reveal_transitions_once() {
    let mut c = SplashController::new(true, DELAY);
    assert!(c.reveal());
    assert_eq!(c.phase(), SplashPhase::Revealed);
    assert!(!c.reveal());
    assert_eq!(c.phase(), SplashPhase::Revealed);
}

// Drives the controller the way the page does: the loading mark is held
// until the armed timer fires, and only then is the section observer armed.
#[test]
fn timer_expiry_clears_loading_and_arms_reveal_once() {
    let mut splash = SplashController::new(true, DELAY);
    let mut sections = RevealTracker::new(2, 0.1);
    let mut loading = true;
    let fire_at = splash.initial_delay().expect("splash present");

    for now in [0, 1, DELAY - 1, DELAY, DELAY + 1] {
        if now >= fire_at && splash.reveal() {
            loading = false;
            assert!(sections.activate());
        }
        assert_eq!(loading, now < DELAY, "loading mark at {now} ms");
        assert_eq!(sections.observe(0, true, 1.0), now == DELAY);
    }

    assert!(sections.is_visible(0));
    assert!(!splash.reveal());
    assert!(!sections.activate());
}
