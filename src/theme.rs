//! Light/dark theme preference.
//!
//! The preference lives under one `localStorage` key and is mirrored to the
//! `data-theme` attribute on `<html>`. With nothing stored, the system color
//! scheme decides.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// `localStorage` key holding the preference.
pub const STORAGE_KEY: &str = "doss-theme";

/// Attribute on the document element that stylesheets key off.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Transform applied to a toggle button while it spins.
pub const TOGGLE_SPIN_TRANSFORM: &str = "rotate(180deg) scale(0.8)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Unknown strings are treated as absent.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Where the preference is read from and written to.
pub trait ThemeBackend {
    /// Raw stored value, if any.
    fn load(&self) -> Option<String>;
    fn save(&self, value: &str);
    /// Whether the system prefers a dark color scheme.
    fn prefers_dark(&self) -> bool;
    /// Mirror the theme onto the document.
    fn apply(&self, theme: Theme);
}

/// Theme store over a backend. Owns the current theme.
pub struct ThemeStore<B: ThemeBackend> {
    backend: B,
    current: Theme,
}

impl<B: ThemeBackend> ThemeStore<B> {
    /// Resolve the preferred theme, then apply and persist it.
    ///
    /// Persisting on first load pins the system preference seen at that
    /// moment, so a later OS scheme change does not flip the site.
    pub fn init(backend: B) -> Self {
        let current = preferred(backend.load().as_deref(), backend.prefers_dark());
        let mut store = Self { backend, current };
        store.set(current);
        store
    }

    #[must_use]
    pub fn get(&self) -> Theme {
        self.current
    }

    /// Apply and persist `theme`.
    pub fn set(&mut self, theme: Theme) {
        self.backend.apply(theme);
        self.backend.save(theme.as_str());
        self.current = theme;
    }

    /// Flip the theme and return the new one.
    pub fn toggle(&mut self) -> Theme {
        let next = self.current.toggled();
        self.set(next);
        next
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

/// Stored value first, then system preference.
#[must_use]
pub fn preferred(stored: Option<&str>, prefers_dark: bool) -> Theme {
    if let Some(theme) = stored.and_then(Theme::parse) {
        return theme;
    }
    if prefers_dark { Theme::Dark } else { Theme::Light }
}
