// Host-side tests for the particles.js configuration.

#![allow(dead_code)]
mod particles {
    include!("../src/core/particles.rs");
}

use particles::*;
use serde_json::Value;

fn json(accent: &str) -> Value {
    let raw = ParticlesConfig::with_accent(accent).to_json().unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn accent_tints_particles_and_links() {
    let v = json("#ff0066");
    assert_eq!(v["particles"]["color"]["value"], "#ff0066");
    assert_eq!(v["particles"]["line_linked"]["color"], "#ff0066");
}

#[test]
fn uses_library_field_names() {
    let v = json("#00aaff");
    let p = &v["particles"];
    assert_eq!(p["number"]["value"], 80);
    assert_eq!(p["number"]["density"]["value_area"], 800);
    assert_eq!(p["shape"]["type"], "circle");
    assert_eq!(p["size"]["random"], true);
    assert_eq!(p["opacity"]["random"], false);
    assert_eq!(p["line_linked"]["distance"], 150.0);
    assert_eq!(p["move"]["direction"], "none");
    assert_eq!(p["move"]["out_mode"], "out");
    assert_eq!(p["move"]["speed"], 6.0);
    assert_eq!(v["retina_detect"], true);
}

#[test]
fn interaction_modes() {
    let v = json("#00aaff");
    let i = &v["interactivity"];
    assert_eq!(i["detect_on"], "canvas");
    assert_eq!(i["events"]["onhover"]["mode"], "repulse");
    assert_eq!(i["events"]["onclick"]["mode"], "push");
    assert_eq!(i["events"]["resize"], true);
    assert_eq!(i["modes"]["repulse"]["distance"], 100.0);
    assert_eq!(i["modes"]["push"]["particles_nb"], 4);
}

#[test]
fn fresh_config_per_call() {
    let a = ParticlesConfig::with_accent("#111111");
    let b = ParticlesConfig::with_accent("#222222");
    assert_ne!(a, b);
    assert_eq!(a.accent(), "#111111");
    assert_eq!(b.accent(), "#222222");
}
