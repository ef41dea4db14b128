// Site-wide tunables with their defaults.

// Three-word staggered title animation at 800 ms per word.
pub const SPLASH_WORDS: u32 = 3;
pub const SPLASH_MS_PER_WORD: u32 = 800;

#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub splash_delay_ms: u32,
    pub header_threshold: f64,
    /// `style.top` applied to the header while hidden.
    pub header_hidden_top: String,
    pub reveal_threshold: f64,
    /// Elements that put the cursor follower into its hover state.
    pub hoverable_selector: String,
    pub theme_key: String,
    pub particles_container: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            splash_delay_ms: SPLASH_WORDS * SPLASH_MS_PER_WORD,
            header_threshold: 100.0,
            header_hidden_top: "-100px".to_string(),
            reveal_threshold: 0.1,
            hoverable_selector: "a, button, .skill-card, .project-card".to_string(),
            theme_key: "theme".to_string(),
            particles_container: "particles-js".to_string(),
        }
    }
}

impl SiteConfig {
    /// Apply a `data-header-threshold` override. Returns `false` and leaves
    /// the threshold untouched when `raw` is not a finite, non-negative number.
    pub fn override_header_threshold(&mut self, raw: &str) -> bool {
        match raw.trim().parse::<f64>() {
            Ok(v) if v.is_finite() && v >= 0.0 => {
                self.header_threshold = v;
                true
            }
            _ => false,
        }
    }
}
