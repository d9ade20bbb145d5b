//! Page entrance/exit animation, link interception and the mobile drawer.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlAnchorElement, HtmlElement};

use super::listener::{Listener, keep};
use super::raf::RafScheduler;
use super::{clear_style, select_all, select_all_in, select_in, set_style, warn_on_err};
use crate::config::TransitionOptions;
use crate::drawer::{ACTIVE_CLASS, Drawer, DrawerEffect, MENU_SELECTOR, OPEN_CLASS, TOGGLE_SELECTOR};
use crate::error::ClayError;
use crate::host::FrameScheduler;
use crate::transition::{ENTER_CLASS, EXIT_CLASS, LinkInfo, LinkRoute, OPT_OUT_ATTRIBUTE, route_link};

/// Add the entrance class to `body` and remove it once the animation ends.
pub fn play_entrance(body: &HtmlElement, options: &TransitionOptions) {
    warn_on_err(body.class_list().add_1(ENTER_CLASS), "page enter");
    let body = body.clone();
    Timeout::new(options.entrance_ms, move || {
        warn_on_err(body.class_list().remove_1(ENTER_CLASS), "page enter end");
    })
    .forget();
}

fn route_for(anchor: &HtmlAnchorElement, page_hostname: &str) -> LinkRoute {
    let href = anchor.get_attribute("href");
    let hostname = anchor.hostname();
    let link = LinkInfo {
        hostname: &hostname,
        href: href.as_deref(),
        opted_out: anchor.has_attribute(OPT_OUT_ATTRIBUTE),
    };
    route_link(&link, page_hostname)
}

/// Intercept same-site links so the exit animation plays before navigating.
pub fn bind_transitions(options: &TransitionOptions, listeners: &mut Vec<Listener>) -> Result<(), ClayError> {
    let window = super::window()?;
    let document = super::document()?;
    let body = super::body()?;
    let page_hostname = window.location().hostname()?;
    let exit_delay_ms = options.exit_delay_ms;

    let mut intercepted = 0_usize;
    for element in select_all_in(&document, "a") {
        let Ok(anchor) = element.dyn_into::<HtmlAnchorElement>() else {
            continue;
        };
        if route_for(&anchor, &page_hostname) == LinkRoute::Native {
            continue;
        }
        intercepted += 1;

        let link = anchor.clone();
        let page_hostname = page_hostname.clone();
        let body = body.clone();
        let window = window.clone();
        let listener = Listener::new(&anchor, "click", move |event| {
            let LinkRoute::Fade(href) = route_for(&link, &page_hostname) else {
                return;
            };
            event.prevent_default();
            warn_on_err(body.class_list().add_1(EXIT_CLASS), "page exit");
            let location = window.location();
            Timeout::new(exit_delay_ms, move || {
                warn_on_err(location.set_href(&href), "navigate");
            })
            .forget();
        });
        keep(listeners, listener, "page transition");
    }
    log::debug!("page transitions: {intercepted} links intercepted");
    Ok(())
}

fn apply_drawer(effect: DrawerEffect, toggle: &Element, menu: &Element, body: &Element) {
    match effect {
        DrawerEffect::Open => {
            warn_on_err(toggle.class_list().add_1(ACTIVE_CLASS), "drawer toggle on");
            set_style(menu, "display", "flex");
            let menu = menu.clone();
            let open = move || warn_on_err(menu.class_list().add_1(OPEN_CLASS), "drawer open");
            if let Err(open) = RafScheduler.request_frame(Box::new(open)) {
                open();
            }
            set_style(body, "overflow", "hidden");
        }
        DrawerEffect::Close => {
            warn_on_err(toggle.class_list().remove_1(ACTIVE_CLASS), "drawer toggle off");
            warn_on_err(menu.class_list().remove_1(OPEN_CLASS), "drawer close");
            clear_style(body, "overflow");
        }
    }
}

/// Wire the mobile drawer. Skipped if the toggle or menu is absent.
pub fn bind_drawer(listeners: &mut Vec<Listener>) -> Result<(), ClayError> {
    let document = super::document()?;
    let (Some(toggle), Some(menu)) = (select_in(&document, TOGGLE_SELECTOR), select_in(&document, MENU_SELECTOR))
    else {
        return Ok(());
    };
    let body: Element = super::body()?.into();
    let drawer = Rc::new(RefCell::new(Drawer::default()));

    {
        let drawer = Rc::clone(&drawer);
        let (toggle_el, menu_el, body_el) = (toggle.clone(), menu.clone(), body.clone());
        let listener = Listener::new(&toggle, "click", move |_| {
            let effect = drawer.borrow_mut().toggle();
            apply_drawer(effect, &toggle_el, &menu_el, &body_el);
        });
        keep(listeners, listener, "drawer toggle");
    }

    for link in select_all(&menu, "a") {
        let drawer = Rc::clone(&drawer);
        let (toggle_el, menu_el, body_el) = (toggle.clone(), menu.clone(), body.clone());
        let listener = Listener::new(&link, "click", move |_| {
            let effect = drawer.borrow_mut().link_followed();
            apply_drawer(effect, &toggle_el, &menu_el, &body_el);
        });
        keep(listeners, listener, "drawer link");
    }
    Ok(())
}
