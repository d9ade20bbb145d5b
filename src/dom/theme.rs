//! Theme persistence over `localStorage`, `matchMedia` and the root
//! element's `data-theme` attribute, plus the toggle buttons.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{Storage, Window};

use super::listener::{Listener, keep};
use super::{clear_style, media_matches, select_all_in, set_style, warn_on_err};
use crate::consts::THEME_TOGGLE_SPIN_MS;
use crate::error::ClayError;
use crate::theme::{STORAGE_KEY, THEME_ATTRIBUTE, TOGGLE_SPIN_TRANSFORM, Theme, ThemeBackend, ThemeStore};

const TOGGLE_SELECTOR: &str = ".theme-toggle";
const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

pub type DomThemeStore = ThemeStore<DomThemeBackend>;

pub struct DomThemeBackend {
    window: Window,
}

impl DomThemeBackend {
    pub fn new() -> Result<Self, ClayError> {
        Ok(Self { window: super::window()? })
    }

    fn storage(&self) -> Option<Storage> {
        match self.window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::warn!("localStorage unavailable: {err:?}");
                None
            }
        }
    }
}

impl ThemeBackend for DomThemeBackend {
    fn load(&self) -> Option<String> {
        match self.storage()?.get_item(STORAGE_KEY) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("theme read failed: {err:?}");
                None
            }
        }
    }

    fn save(&self, value: &str) {
        if let Some(storage) = self.storage() {
            warn_on_err(storage.set_item(STORAGE_KEY, value), "theme write");
        }
    }

    fn prefers_dark(&self) -> bool {
        media_matches(&self.window, PREFERS_DARK_QUERY)
    }

    fn apply(&self, theme: Theme) {
        let Some(root) = self.window.document().and_then(|doc| doc.document_element()) else {
            log::warn!("no root element to apply theme");
            return;
        };
        warn_on_err(root.set_attribute(THEME_ATTRIBUTE, theme.as_str()), "set data-theme");
    }
}

/// Resolve and apply the preferred theme. Runs before the DOM is ready so
/// the page never paints in the wrong theme.
pub fn init_theme() -> Result<Rc<RefCell<DomThemeStore>>, ClayError> {
    let store = ThemeStore::init(DomThemeBackend::new()?);
    log::debug!("theme: {}", store.get().as_str());
    Ok(Rc::new(RefCell::new(store)))
}

/// Wire every `.theme-toggle` button to `store`.
pub fn bind_toggles(store: &Rc<RefCell<DomThemeStore>>, listeners: &mut Vec<Listener>) -> Result<(), ClayError> {
    let document = super::document()?;
    for button in select_all_in(&document, TOGGLE_SELECTOR) {
        let store = Rc::clone(store);
        let target = button.clone();
        let listener = Listener::new(&button, "click", move |_| {
            let next = store.borrow_mut().toggle();
            log::debug!("theme toggled to {}", next.as_str());
            set_style(&target, "transform", TOGGLE_SPIN_TRANSFORM);
            let spun = target.clone();
            Timeout::new(THEME_TOGGLE_SPIN_MS, move || clear_style(&spun, "transform")).forget();
        });
        keep(listeners, listener, "theme toggle");
    }
    Ok(())
}
