//! [`Host`] backed by the live document.

use web_sys::{Document, Element, Window};

use super::{select_all, select_all_in, select_in, set_style, warn_on_err};
use crate::error::ClayError;
use crate::host::Host;
use crate::progress::ScrollSample;

pub struct DomHost {
    window: Window,
    document: Document,
}

impl DomHost {
    pub fn new() -> Result<Self, ClayError> {
        let window = super::window()?;
        let document = window.document().ok_or(ClayError::MissingHost("document"))?;
        Ok(Self { window, document })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }
}

impl Host for DomHost {
    type Node = Element;

    fn query_all(&self, selector: &str) -> Vec<Element> {
        select_all_in(&self.document, selector)
    }

    fn query(&self, selector: &str) -> Option<Element> {
        select_in(&self.document, selector)
    }

    fn query_within(&self, root: &Element, selector: &str) -> Vec<Element> {
        select_all(root, selector)
    }

    fn add_class(&self, node: &Element, class: &str) {
        warn_on_err(node.class_list().add_1(class), "classList.add");
    }

    fn remove_class(&self, node: &Element, class: &str) {
        warn_on_err(node.class_list().remove_1(class), "classList.remove");
    }

    fn set_style(&self, node: &Element, property: &str, value: &str) {
        set_style(node, property, value);
    }

    fn scroll_sample(&self) -> ScrollSample {
        let offset = self.window.scroll_y().unwrap_or_default();
        let document_extent = self
            .document
            .document_element()
            .map_or(0.0, |root| f64::from(root.scroll_height()));
        let viewport_extent = match self.window.inner_height() {
            Ok(value) => value.as_f64().unwrap_or_default(),
            Err(err) => {
                log::warn!("innerHeight unavailable: {err:?}");
                0.0
            }
        };
        ScrollSample { offset, document_extent, viewport_extent }
    }
}
