// Configuration handed to `particles.js`.
//
// Field names follow the library's JSON schema, so the structs serialize
// straight into the object `particlesJS(tagId, params)` expects. A fresh
// config is built on every (re)initialization; the library owns all
// animation state afterwards.

use serde::Serialize;

pub const PARTICLE_COUNT: u32 = 80;
pub const PARTICLE_DENSITY_AREA: u32 = 800;
pub const PARTICLE_OPACITY: f64 = 0.5;
pub const PARTICLE_SIZE: f64 = 3.0;
pub const LINK_DISTANCE: f64 = 150.0;
pub const LINK_OPACITY: f64 = 0.4;
pub const LINK_WIDTH: f64 = 1.0;
pub const MOVE_SPEED: f64 = 6.0;
pub const REPULSE_DISTANCE: f64 = 100.0;
pub const REPULSE_DURATION: f64 = 0.4;
pub const PUSH_PARTICLES: u32 = 4;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ParticlesConfig {
    pub particles: Particles,
    pub interactivity: Interactivity,
    pub retina_detect: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Particles {
    pub number: Number,
    pub color: Color,
    pub shape: Shape,
    pub opacity: Opacity,
    pub size: Size,
    pub line_linked: LineLinked,
    #[serde(rename = "move")]
    pub motion: Motion,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Number {
    pub value: u32,
    pub density: Density,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Density {
    pub enable: bool,
    pub value_area: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Color {
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Shape {
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Opacity {
    pub value: f64,
    pub random: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Size {
    pub value: f64,
    pub random: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LineLinked {
    pub enable: bool,
    pub distance: f64,
    pub color: String,
    pub opacity: f64,
    pub width: f64,
}

/// `direction: "none"` is omnidirectional drift; `out_mode: "out"` lets
/// particles leave the canvas and respawn at the opposite edge.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Motion {
    pub enable: bool,
    pub speed: f64,
    pub direction: String,
    pub random: bool,
    pub straight: bool,
    pub out_mode: String,
    pub bounce: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Interactivity {
    pub detect_on: String,
    pub events: Events,
    pub modes: Modes,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Events {
    pub onhover: ModeToggle,
    pub onclick: ModeToggle,
    pub resize: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ModeToggle {
    pub enable: bool,
    pub mode: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Modes {
    pub repulse: Repulse,
    pub push: Push,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Repulse {
    pub distance: f64,
    pub duration: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Push {
    pub particles_nb: u32,
}

impl ParticlesConfig {
    /// Default scene tinted with `accent` for both particles and links.
    pub fn with_accent(accent: &str) -> Self {
        Self {
            particles: Particles {
                number: Number {
                    value: PARTICLE_COUNT,
                    density: Density {
                        enable: true,
                        value_area: PARTICLE_DENSITY_AREA,
                    },
                },
                color: Color {
                    value: accent.to_string(),
                },
                shape: Shape {
                    kind: "circle".to_string(),
                },
                opacity: Opacity {
                    value: PARTICLE_OPACITY,
                    random: false,
                },
                size: Size {
                    value: PARTICLE_SIZE,
                    random: true,
                },
                line_linked: LineLinked {
                    enable: true,
                    distance: LINK_DISTANCE,
                    color: accent.to_string(),
                    opacity: LINK_OPACITY,
                    width: LINK_WIDTH,
                },
                motion: Motion {
                    enable: true,
                    speed: MOVE_SPEED,
                    direction: "none".to_string(),
                    random: false,
                    straight: false,
                    out_mode: "out".to_string(),
                    bounce: false,
                },
            },
            interactivity: Interactivity {
                detect_on: "canvas".to_string(),
                events: Events {
                    onhover: ModeToggle {
                        enable: true,
                        mode: "repulse".to_string(),
                    },
                    onclick: ModeToggle {
                        enable: true,
                        mode: "push".to_string(),
                    },
                    resize: true,
                },
                modes: Modes {
                    repulse: Repulse {
                        distance: REPULSE_DISTANCE,
                        duration: REPULSE_DURATION,
                    },
                    push: Push {
                        particles_nb: PUSH_PARTICLES,
                    },
                },
            },
            retina_detect: true,
        }
    }

    #[inline]
    pub fn accent(&self) -> &str {
        &self.particles.color.value
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
