//! Whole-page attach/detach.
//!
//! LIFECYCLE
//! =========
//! `hydrate()` applies the theme immediately, then calls [`attach_site`]
//! once the DOM is parsed. The returned [`SiteHandle`] owns every listener
//! and observer; dropping it (or calling [`SiteHandle::detach`]) removes
//! them all. Timers already in flight finish on their own.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::Document;

use super::effects::{bind_counters, bind_easter_eggs, double_marquees, write_greeting};
use super::host::DomHost;
use super::intersect::IntersectionWatch;
use super::listener::Listener;
use super::navigation::{bind_drawer, bind_transitions, play_entrance};
use super::scroll::ScrollBinding;
use super::theme::{DomThemeStore, bind_toggles};
use super::{pointer, select_in};
use crate::config::{CONFIG_ELEMENT_ID, MotionConfig};
use crate::error::ClayError;

/// Read the inline JSON config block, falling back to defaults if it is
/// absent or invalid.
pub fn load_config(document: &Document) -> MotionConfig {
    let Some(block) = select_in(document, &format!("#{CONFIG_ELEMENT_ID}")) else {
        return MotionConfig::default();
    };
    let raw = block.text_content().unwrap_or_default();
    match MotionConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            log::error!("ignoring #{CONFIG_ELEMENT_ID}: {err}");
            MotionConfig::default()
        }
    }
}

/// Everything attached to the page.
pub struct SiteHandle {
    _scroll: Option<ScrollBinding>,
    _counters: Option<IntersectionWatch>,
    listeners: Vec<Listener>,
}

impl SiteHandle {
    /// Remove every listener and observer.
    pub fn detach(self) {
        log::info!("site detached ({} listeners)", self.listeners.len());
        drop(self);
    }
}

/// Attach every page behavior. Pieces whose elements are missing are skipped.
pub fn attach_site(theme: &Rc<RefCell<DomThemeStore>>) -> Result<SiteHandle, ClayError> {
    let document = super::document()?;
    let body = super::body()?;
    let config = load_config(&document);
    let mut listeners = Vec::new();

    play_entrance(&body, &config.transition);
    bind_toggles(theme, &mut listeners)?;
    bind_drawer(&mut listeners)?;

    let scroll = match ScrollBinding::attach(Rc::new(DomHost::new()?), &config) {
        Ok(binding) => Some(binding),
        Err(err) => {
            log::error!("scroll animations disabled: {err}");
            None
        }
    };

    pointer::bind(&mut listeners)?;
    let counters = bind_counters(&document, &config.counter)?;
    bind_transitions(&config.transition, &mut listeners)?;
    double_marquees(&document);
    write_greeting(&document);
    bind_easter_eggs(&document, &mut listeners);

    log::info!("site attached ({} listeners)", listeners.len());
    Ok(SiteHandle { _scroll: scroll, _counters: counters, listeners })
}
