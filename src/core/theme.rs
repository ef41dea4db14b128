// Light/dark theme preference and its application to the page.
//
// The manager owns the active theme and talks to two collaborators: a
// key-value store holding the persisted class name and a surface that
// carries the styling class. Both are traits so the browser bindings
// (`localStorage`, `<body>` class list) can be swapped for in-memory
// versions on the host.

const DARK_ACCENT: &str = "#00aaff";
const LIGHT_ACCENT: &str = "#0077cc";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    #[inline]
    pub fn class_name(self) -> &'static str {
        match self {
            Theme::Light => "light-mode",
            Theme::Dark => "dark-mode",
        }
    }

    #[inline]
    pub fn from_class_name(value: &str) -> Option<Theme> {
        match value.trim() {
            "light-mode" => Some(Theme::Light),
            "dark-mode" => Some(Theme::Dark),
            _ => None,
        }
    }

    #[inline]
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Accent used when the stylesheet does not expose one.
    #[inline]
    pub fn default_accent(self) -> &'static str {
        match self {
            Theme::Light => LIGHT_ACCENT,
            Theme::Dark => DARK_ACCENT,
        }
    }

    /// Accent from the stylesheet's computed value, trimmed, falling back to
    /// [`Theme::default_accent`] when unset or blank.
    pub fn resolve_accent(self, computed: Option<&str>) -> String {
        match computed.map(str::trim) {
            Some(value) if !value.is_empty() => value.to_string(),
            _ => self.default_accent().to_string(),
        }
    }
}

/// Per-origin key-value persistence. Writes are best-effort.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: &str);
}

/// Element whose class list carries the active theme. Implementations must
/// leave exactly one of the theme classes set after `apply_class`.
pub trait ThemeSurface {
    fn apply_class(&mut self, theme: Theme);
}

pub struct ThemeManager<S: PreferenceStore, D: ThemeSurface> {
    store: S,
    surface: D,
    key: String,
    current: Theme,
    listener: Option<Box<dyn FnMut(Theme)>>,
}

impl<S: PreferenceStore, D: ThemeSurface> ThemeManager<S, D> {
    pub fn new(store: S, surface: D, key: &str) -> Self {
        Self {
            store,
            surface,
            key: key.to_string(),
            current: Theme::default(),
            listener: None,
        }
    }

    /// Persisted preference; anything missing or unrecognised reads as dark.
    pub fn get_theme(&self) -> Theme {
        self.store
            .load(&self.key)
            .as_deref()
            .and_then(Theme::from_class_name)
            .unwrap_or_default()
    }

    /// Apply the persisted theme without notifying the change listener.
    pub fn init(&mut self) -> Theme {
        let theme = self.get_theme();
        self.apply_theme(theme);
        theme
    }

    pub fn apply_theme(&mut self, theme: Theme) {
        self.surface.apply_class(theme);
        self.store.save(&self.key, theme.class_name());
        self.current = theme;
    }

    pub fn toggle_theme(&mut self) -> Theme {
        let next = self.current.toggled();
        self.apply_theme(next);
        if let Some(listener) = self.listener.as_mut() {
            listener(next);
        }
        next
    }

    /// Register the single change listener, replacing any previous one.
    pub fn on_change(&mut self, listener: impl FnMut(Theme) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    #[inline]
    pub fn current(&self) -> Theme {
        self.current
    }
}
