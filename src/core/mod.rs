pub mod config;
pub mod cursor;
pub mod header;
pub mod nav;
pub mod particles;
pub mod reveal;
pub mod splash;
pub mod theme;

pub use config::SiteConfig;
pub use theme::{PreferenceStore, Theme, ThemeManager, ThemeSurface};
