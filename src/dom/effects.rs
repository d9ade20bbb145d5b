//! Counters, marquee, greeting and the easter eggs.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, KeyboardEvent};

use super::intersect::IntersectionWatch;
use super::listener::{self, Listener, keep};
use super::raf::RafScheduler;
use super::{select_all_in, select_in, set_style, warn_on_err};
use crate::config::CounterOptions;
use crate::consts::{COUNTER_THRESHOLD, TOAST_FADE_MS, TOAST_VISIBLE_MS};
use crate::counter::{COUNT_ATTRIBUTE, COUNTER_SELECTOR, CounterAnimation, CounterSpec, PREFIX_ATTRIBUTE, SUFFIX_ATTRIBUTE};
use crate::easter::{
    ClickStreak, KonamiDetector, LOGO_SELECTOR, RETRO_OVERLAY_STYLE, RETRO_OVERLAY_TEXT, RETRO_PRE_STYLE,
    TOAST_HIDDEN_TRANSFORM, TOAST_SHOWN_TRANSFORM, TOAST_STYLE, pick_message,
};
use crate::error::ClayError;
use crate::greeting::{GREETING_SELECTOR, greeting_for_hour};
use crate::host::FrameScheduler;
use crate::marquee::{DOUBLED_ATTRIBUTE, MARQUEE_SELECTOR, doubled};

// ---- counters ----

fn counter_spec(element: &Element) -> Option<CounterSpec> {
    let count = element.get_attribute(COUNT_ATTRIBUTE)?;
    let prefix = element.get_attribute(PREFIX_ATTRIBUTE);
    let suffix = element.get_attribute(SUFFIX_ATTRIBUTE);
    CounterSpec::parse(&count, prefix.as_deref(), suffix.as_deref())
}

fn counter_step(element: Element, animation: Rc<RefCell<CounterAnimation>>) {
    let frame = animation.borrow_mut().frame(js_sys::Date::now());
    element.set_text_content(Some(&frame.text));
    if frame.done {
        return;
    }
    let (fallback, final_animation) = (element.clone(), Rc::clone(&animation));
    let next = move || counter_step(element, animation);
    if RafScheduler.request_frame(Box::new(next)).is_err() {
        fallback.set_text_content(Some(&final_animation.borrow().final_text()));
    }
}

fn start_counter(element: Element, options: &CounterOptions) {
    let Some(spec) = counter_spec(&element) else {
        return;
    };
    let animation = Rc::new(RefCell::new(CounterAnimation::new(spec, options.duration_ms)));
    let (fallback, final_animation) = (element.clone(), Rc::clone(&animation));
    let first = move || counter_step(element, animation);
    if RafScheduler.request_frame(Box::new(first)).is_err() {
        fallback.set_text_content(Some(&final_animation.borrow().final_text()));
    }
}

/// Observe `[data-count]` elements and count each up once it is half visible.
pub fn bind_counters(document: &Document, options: &CounterOptions) -> Result<Option<IntersectionWatch>, ClayError> {
    let counters: Vec<Element> = select_all_in(document, COUNTER_SELECTOR)
        .into_iter()
        .filter(|element| {
            let valid = counter_spec(element).is_some();
            if !valid {
                log::warn!("counter skipped: non-numeric {COUNT_ATTRIBUTE}");
            }
            valid
        })
        .collect();
    if counters.is_empty() {
        return Ok(None);
    }
    let options = *options;
    let watch = IntersectionWatch::new(COUNTER_THRESHOLD, "0px", &counters, move |batch, observer| {
        for entry in batch.into_iter().filter(|entry| entry.is_intersecting) {
            observer.unobserve(&entry.target);
            start_counter(entry.target, &options);
        }
    })?;
    Ok(Some(watch))
}

// ---- marquee and greeting ----

/// Duplicate each marquee's content once. Already-doubled marquees are left alone.
pub fn double_marquees(document: &Document) {
    for marquee in select_all_in(document, MARQUEE_SELECTOR) {
        if marquee.has_attribute(DOUBLED_ATTRIBUTE) {
            continue;
        }
        marquee.set_inner_html(&doubled(&marquee.inner_html()));
        warn_on_err(marquee.set_attribute(DOUBLED_ATTRIBUTE, ""), "marquee mark");
    }
}

pub fn write_greeting(document: &Document) {
    if let Some(element) = select_in(document, GREETING_SELECTOR) {
        let hour = js_sys::Date::new_0().get_hours();
        element.set_text_content(Some(greeting_for_hour(hour)));
    }
}

// ---- easter eggs ----

fn show_retro_overlay(document: &Document) -> Result<(), ClayError> {
    let body = super::body()?;
    let overlay = document.create_element("div")?;
    overlay.set_attribute("style", RETRO_OVERLAY_STYLE)?;
    let pre = document.create_element("pre")?;
    pre.set_attribute("style", RETRO_PRE_STYLE)?;
    pre.set_text_content(Some(RETRO_OVERLAY_TEXT));
    overlay.append_child(&pre)?;
    body.append_child(&overlay)?;

    let dismissed = overlay.clone();
    listener::once(&overlay, "click", move |_| dismissed.remove())?;
    log::info!("konami code accepted");
    Ok(())
}

fn show_toast(document: &Document) -> Result<(), ClayError> {
    let body = super::body()?;
    let toast = document.create_element("div")?;
    toast.set_attribute("style", TOAST_STYLE)?;
    toast.set_text_content(Some(pick_message(js_sys::Math::random())));
    body.append_child(&toast)?;

    let shown = toast.clone();
    let fade_in = move || {
        set_style(&shown, "opacity", "1");
        set_style(&shown, "transform", TOAST_SHOWN_TRANSFORM);
    };
    if let Err(fade_in) = RafScheduler.request_frame(Box::new(fade_in)) {
        fade_in();
    }

    Timeout::new(TOAST_VISIBLE_MS, move || {
        set_style(&toast, "opacity", "0");
        set_style(&toast, "transform", TOAST_HIDDEN_TRANSFORM);
        Timeout::new(TOAST_FADE_MS, move || toast.remove()).forget();
    })
    .forget();
    Ok(())
}

/// Konami code listener and the logo click streak.
pub fn bind_easter_eggs(document: &Document, listeners: &mut Vec<Listener>) {
    let konami = Rc::new(RefCell::new(KonamiDetector::default()));
    let doc = document.clone();
    let keys = Listener::new(document, "keydown", move |event| {
        let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
            return;
        };
        if konami.borrow_mut().on_key(&key) {
            if let Err(err) = show_retro_overlay(&doc) {
                log::warn!("retro overlay failed: {err}");
            }
        }
    });
    keep(listeners, keys, "konami");

    let Some(logo) = select_in(document, LOGO_SELECTOR) else {
        return;
    };
    let streak = Rc::new(RefCell::new(ClickStreak::default()));
    let doc = document.clone();
    let clicks = Listener::new(&logo, "click", move |event| {
        if !streak.borrow_mut().click() {
            return;
        }
        event.prevent_default();
        if let Err(err) = show_toast(&doc) {
            log::warn!("toast failed: {err}");
        }
    });
    keep(listeners, clicks, "logo streak");
}
