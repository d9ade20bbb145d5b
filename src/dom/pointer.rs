//! Cursor glow, magnetic buttons and tilt cards.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent};

use super::listener::{Listener, keep};
use super::{clear_style, media_matches, select_all_in, set_style, warn_on_err};
use crate::consts::{CURSOR_IDLE_MS, TILT_SETTLE_MS};
use crate::error::ClayError;
use crate::pointer::{
    COARSE_POINTER_QUERY, CURSOR_ACTIVE_CLASS, CURSOR_X_PROPERTY, CURSOR_Y_PROPERTY, CursorGlow, MAGNETIC_SELECTOR,
    Rect, TILT_SELECTOR, TILT_SETTLE_TRANSITION, magnetic_transform, px, tilt_transform,
};

fn client_point(event: &Event) -> Option<(f64, f64)> {
    let mouse = event.dyn_ref::<MouseEvent>()?;
    Some((f64::from(mouse.client_x()), f64::from(mouse.client_y())))
}

fn bounds(element: &Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect { left: rect.left(), top: rect.top(), width: rect.width(), height: rect.height() }
}

/// Wire all pointer effects. Does nothing on coarse pointers.
pub fn bind(listeners: &mut Vec<Listener>) -> Result<(), ClayError> {
    let window = super::window()?;
    if media_matches(&window, COARSE_POINTER_QUERY) {
        log::debug!("coarse pointer, pointer effects skipped");
        return Ok(());
    }
    let document = super::document()?;
    bind_cursor_glow(&document, listeners)?;
    bind_magnetic(&document, listeners);
    bind_tilt(&document, listeners);
    Ok(())
}

fn bind_cursor_glow(document: &web_sys::Document, listeners: &mut Vec<Listener>) -> Result<(), ClayError> {
    let body: Element = super::body()?.into();
    let glow = Rc::new(RefCell::new(CursorGlow::default()));
    let idle: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

    let listener = Listener::passive(document, "mousemove", move |event| {
        let Some((x, y)) = client_point(&event) else {
            return;
        };
        if glow.borrow_mut().on_move() {
            warn_on_err(body.class_list().add_1(CURSOR_ACTIVE_CLASS), "cursor glow on");
        }
        set_style(&body, CURSOR_X_PROPERTY, &px(x));
        set_style(&body, CURSOR_Y_PROPERTY, &px(y));

        let glow_for_idle = Rc::clone(&glow);
        let body_for_idle = body.clone();
        // Replacing the previous timeout cancels it.
        *idle.borrow_mut() = Some(Timeout::new(CURSOR_IDLE_MS, move || {
            if glow_for_idle.borrow_mut().on_idle() {
                warn_on_err(body_for_idle.class_list().remove_1(CURSOR_ACTIVE_CLASS), "cursor glow off");
            }
        }));
    });
    keep(listeners, listener, "cursor glow");
    Ok(())
}

fn bind_magnetic(document: &web_sys::Document, listeners: &mut Vec<Listener>) {
    for element in select_all_in(document, MAGNETIC_SELECTOR) {
        let target = element.clone();
        let moved = Listener::passive(&element, "mousemove", move |event| {
            if let Some((x, y)) = client_point(&event) {
                set_style(&target, "transform", &magnetic_transform(bounds(&target), x, y));
            }
        });
        keep(listeners, moved, "magnetic move");

        let target = element.clone();
        let left = Listener::new(&element, "mouseleave", move |_| clear_style(&target, "transform"));
        keep(listeners, left, "magnetic leave");
    }
}

fn bind_tilt(document: &web_sys::Document, listeners: &mut Vec<Listener>) {
    for card in select_all_in(document, TILT_SELECTOR) {
        let target = card.clone();
        let moved = Listener::passive(&card, "mousemove", move |event| {
            let Some((x, y)) = client_point(&event) else {
                return;
            };
            if let Some(transform) = tilt_transform(bounds(&target), x, y) {
                set_style(&target, "transform", &transform);
            }
        });
        keep(listeners, moved, "tilt move");

        let target = card.clone();
        let left = Listener::new(&card, "mouseleave", move |_| {
            clear_style(&target, "transform");
            set_style(&target, "transition", TILT_SETTLE_TRANSITION);
            let settled = target.clone();
            Timeout::new(TILT_SETTLE_MS, move || clear_style(&settled, "transition")).forget();
        });
        keep(listeners, left, "tilt leave");
    }
}
