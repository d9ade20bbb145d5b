//! Owned DOM event listener.
//!
//! The closure lives as long as the [`Listener`]; dropping it removes the
//! listener from its target so no callback outlives the state it captured.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

use super::warn_on_err;
use crate::error::ClayError;

pub struct Listener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    /// Register `handler` for `event` on `target`.
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, ClayError>
    where
        F: FnMut(Event) + 'static,
    {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        Ok(Self { target: target.clone(), event, closure })
    }

    /// Like [`new`](Self::new) but registered as passive, for scroll and
    /// pointer streams that never call `preventDefault`.
    pub fn passive<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, ClayError>
    where
        F: FnMut(Event) + 'static,
    {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &options,
        )?;
        Ok(Self { target: target.clone(), event, closure })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        warn_on_err(
            self.target
                .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref()),
            "removeEventListener",
        );
    }
}

/// Register a listener that runs at most once and frees itself afterwards.
/// Used for transient elements that remove themselves when clicked.
pub(crate) fn once<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), ClayError>
where
    F: FnOnce(Event) + 'static,
{
    let callback = Closure::once_into_js(handler);
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        callback.unchecked_ref(),
        &options,
    )?;
    Ok(())
}

/// Collect listeners, logging the ones that failed to register.
pub(crate) fn keep(listeners: &mut Vec<Listener>, result: Result<Listener, ClayError>, what: &str) {
    match result {
        Ok(listener) => listeners.push(listener),
        Err(err) => log::warn!("{what} listener not attached: {err}"),
    }
}
