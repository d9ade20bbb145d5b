use std::cell::RefCell;

use super::*;

#[derive(Default)]
struct MemoryBackend {
    stored: RefCell<Option<String>>,
    dark_system: bool,
    applied: RefCell<Vec<Theme>>,
}

impl ThemeBackend for MemoryBackend {
    fn load(&self) -> Option<String> {
        self.stored.borrow().clone()
    }

    fn save(&self, value: &str) {
        *self.stored.borrow_mut() = Some(value.to_owned());
    }

    fn prefers_dark(&self) -> bool {
        self.dark_system
    }

    fn apply(&self, theme: Theme) {
        self.applied.borrow_mut().push(theme);
    }
}

#[test]
fn parse_accepts_known_values_only() {
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse(" light "), Some(Theme::Light));
    assert_eq!(Theme::parse("sepia"), None);
    assert_eq!(Theme::parse(""), None);
}

#[test]
fn toggled_flips() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[test]
fn stored_value_wins_over_system() {
    assert_eq!(preferred(Some("light"), true), Theme::Light);
    assert_eq!(preferred(Some("dark"), false), Theme::Dark);
}

#[test]
fn system_preference_used_when_nothing_valid_stored() {
    assert_eq!(preferred(None, true), Theme::Dark);
    assert_eq!(preferred(None, false), Theme::Light);
    assert_eq!(preferred(Some("garbage"), true), Theme::Dark);
}

#[test]
fn init_applies_and_pins_system_preference() {
    let store = ThemeStore::init(MemoryBackend { dark_system: true, ..Default::default() });
    assert_eq!(store.get(), Theme::Dark);
    assert_eq!(*store.backend().applied.borrow(), vec![Theme::Dark]);
    assert_eq!(store.backend().stored.borrow().as_deref(), Some("dark"));
}

#[test]
fn init_keeps_stored_choice() {
    let backend = MemoryBackend { dark_system: true, ..Default::default() };
    *backend.stored.borrow_mut() = Some("light".to_owned());
    let store = ThemeStore::init(backend);
    assert_eq!(store.get(), Theme::Light);
}

#[test]
fn toggle_applies_and_persists() {
    let mut store = ThemeStore::init(MemoryBackend::default());
    assert_eq!(store.get(), Theme::Light);

    assert_eq!(store.toggle(), Theme::Dark);
    assert_eq!(store.backend().stored.borrow().as_deref(), Some("dark"));
    assert_eq!(store.toggle(), Theme::Light);
    assert_eq!(store.backend().stored.borrow().as_deref(), Some("light"));
    assert_eq!(*store.backend().applied.borrow(), vec![Theme::Light, Theme::Dark, Theme::Light]);
}

#[test]
fn set_overrides_current() {
    let mut store = ThemeStore::init(MemoryBackend::default());
    store.set(Theme::Dark);
    assert_eq!(store.get(), Theme::Dark);
    assert_eq!(store.backend().stored.borrow().as_deref(), Some("dark"));
}
