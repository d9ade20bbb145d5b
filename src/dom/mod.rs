//! Browser bindings. Compiled only with the `hydrate` feature.
//!
//! SYSTEM CONTEXT
//! ==============
//! These modules translate DOM events into calls on the pure types elsewhere
//! in the crate and write the results back with `web-sys`. Failures from JS
//! calls are logged and dropped; nothing here panics.

pub mod effects;
pub mod host;
pub mod intersect;
pub mod listener;
pub mod navigation;
pub mod pointer;
pub mod raf;
pub mod scroll;
pub mod site;
pub mod theme;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

use crate::error::ClayError;

pub(crate) fn window() -> Result<Window, ClayError> {
    web_sys::window().ok_or(ClayError::MissingHost("window"))
}

pub(crate) fn document() -> Result<Document, ClayError> {
    window()?.document().ok_or(ClayError::MissingHost("document"))
}

pub(crate) fn body() -> Result<HtmlElement, ClayError> {
    document()?.body().ok_or(ClayError::MissingHost("body"))
}

/// Log a failed JS call that has no recovery path.
pub(crate) fn warn_on_err<T>(result: Result<T, JsValue>, context: &str) {
    if let Err(err) = result {
        log::warn!("{context}: {err:?}");
    }
}

/// Whether `query` currently matches. Unsupported queries count as no match.
pub(crate) fn media_matches(window: &Window, query: &str) -> bool {
    match window.match_media(query) {
        Ok(Some(list)) => list.matches(),
        Ok(None) => false,
        Err(err) => {
            log::warn!("matchMedia({query}) failed: {err:?}");
            false
        }
    }
}

/// All elements matching `selector` under `root`, in document order.
pub(crate) fn select_all(root: &Element, selector: &str) -> Vec<Element> {
    match root.query_selector_all(selector) {
        Ok(list) => node_list_elements(&list),
        Err(err) => {
            log::warn!("querySelectorAll({selector}) failed: {err:?}");
            Vec::new()
        }
    }
}

/// All elements matching `selector` in the document, in document order.
pub(crate) fn select_all_in(document: &Document, selector: &str) -> Vec<Element> {
    match document.query_selector_all(selector) {
        Ok(list) => node_list_elements(&list),
        Err(err) => {
            log::warn!("querySelectorAll({selector}) failed: {err:?}");
            Vec::new()
        }
    }
}

/// First element matching `selector` in the document.
pub(crate) fn select_in(document: &Document, selector: &str) -> Option<Element> {
    match document.query_selector(selector) {
        Ok(found) => found,
        Err(err) => {
            log::warn!("querySelector({selector}) failed: {err:?}");
            None
        }
    }
}

fn node_list_elements(list: &web_sys::NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().map_or(None, Some))
        .collect()
}

/// Set one inline style property on an element, if it is an HTML element.
pub(crate) fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        warn_on_err(html.style().set_property(property, value), "style.setProperty");
    }
}

/// Remove one inline style property.
pub(crate) fn clear_style(element: &Element, property: &str) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        warn_on_err(html.style().remove_property(property), "style.removeProperty");
    }
}
