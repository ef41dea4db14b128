use crate::constants::{ACCENT_PROPERTY, THEME_SWITCHER_ID};
use crate::core::{PreferenceStore, SiteConfig, Theme, ThemeManager, ThemeSurface};
use crate::{dom, particles};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub type PageThemeManager = ThemeManager<LocalStore, BodySurface>;

/// `localStorage` backed preferences. Missing storage (privacy mode,
/// sandboxed frames) reads as empty and drops writes.
pub struct LocalStore {
    storage: Option<web::Storage>,
}

impl LocalStore {
    pub fn new(window: &web::Window) -> Self {
        Self {
            storage: window.local_storage().ok().flatten(),
        }
    }
}

impl PreferenceStore for LocalStore {
    fn load(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn save(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if storage.set_item(key, value).is_err() {
                log::debug!("[theme] could not persist {key}={value}");
            }
        }
    }
}

pub struct BodySurface {
    body: web::HtmlElement,
}

impl BodySurface {
    pub fn new(body: web::HtmlElement) -> Self {
        Self { body }
    }
}

impl ThemeSurface for BodySurface {
    fn apply_class(&mut self, theme: Theme) {
        dom::swap_class(&self.body, theme.toggled().class_name(), theme.class_name());
    }
}

/// Accent colour exposed by the stylesheet for the active theme, or the
/// built-in fallback when the custom property is unset.
pub fn accent_color(theme: Theme) -> String {
    let computed = web::window().and_then(|w| {
        let body = w.document()?.body()?;
        let style = w.get_computed_style(&body).ok().flatten()?;
        style.get_property_value(ACCENT_PROPERTY).ok()
    });
    theme.resolve_accent(computed.as_deref())
}

/// Apply the stored theme, hook particle reinitialization to theme changes
/// and wire the switcher button if present. Returns the applied theme.
pub fn wire_theme(
    window: &web::Window,
    document: &web::Document,
    config: &SiteConfig,
) -> Theme {
    let Some(body) = document.body() else {
        log::warn!("[theme] no <body>; theme disabled");
        return Theme::default();
    };
    let mut manager = ThemeManager::new(
        LocalStore::new(window),
        BodySurface::new(body),
        &config.theme_key,
    );
    let initial = manager.init();
    log::info!("[theme] initial theme {}", initial.class_name());

    let container = config.particles_container.clone();
    manager.on_change(move |theme| {
        log::debug!("[theme] switched to {}", theme.class_name());
        particles::init(&container, theme);
    });

    match document.get_element_by_id(THEME_SWITCHER_ID) {
        Some(switcher) => {
            let manager: Rc<RefCell<PageThemeManager>> = Rc::new(RefCell::new(manager));
            dom::add_click_listener(&switcher, move || {
                manager.borrow_mut().toggle_theme();
            });
        }
        None => log::warn!("[theme] #{THEME_SWITCHER_ID} missing; switcher disabled"),
    }
    initial
}
