//! DOM hooks the page markup is expected to provide.
//!
//! Every element here is optional; a missing one only disables the feature
//! that hangs off it.

pub const CURSOR_SELECTOR: &str = ".cursor";
pub const HAMBURGER_SELECTOR: &str = ".hamburger";
pub const HAMBURGER_ICON_SELECTOR: &str = "i";
pub const NAV_SELECTOR: &str = "nav";
pub const NAV_LINK_SELECTOR: &str = "a";
pub const HEADER_SELECTOR: &str = "header";
pub const SECTION_SELECTOR: &str = ".content-section";

pub const SPLASH_ID: &str = "splash-screen";
pub const THEME_SWITCHER_ID: &str = "theme-switcher";

// Marker classes
pub const LOADING_CLASS: &str = "loading";
pub const HIDDEN_CLASS: &str = "hidden";
pub const HOVER_CLASS: &str = "hover";
pub const NAV_OPEN_CLASS: &str = "active";
pub const VISIBLE_CLASS: &str = "visible";

/// CSS custom property holding the active theme's accent colour.
pub const ACCENT_PROPERTY: &str = "--accent-color";
/// Optional `<body>` attribute overriding the header hide threshold.
pub const HEADER_THRESHOLD_ATTR: &str = "data-header-threshold";

pub const PARTICLES_GLOBAL: &str = "particlesJS";
/// Global array where particles.js keeps every live instance.
pub const PARTICLES_INSTANCES_GLOBAL: &str = "pJSDom";
