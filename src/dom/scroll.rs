//! Wires a [`Coordinator`] to the browser's intersection and scroll events.
//!
//! The intersection observer exists only if something is watched, and the
//! scroll listener only if a progress bar or nav bar was found.

use std::rc::Rc;

use web_sys::Element;

use super::host::DomHost;
use super::intersect::IntersectionWatch;
use super::listener::Listener;
use super::raf::RafScheduler;
use crate::config::MotionConfig;
use crate::coordinator::Coordinator;
use crate::error::ClayError;

pub type DomCoordinator = Coordinator<DomHost, RafScheduler>;

/// Live scroll/visibility wiring. Dropping it detaches everything.
pub struct ScrollBinding {
    coordinator: Rc<DomCoordinator>,
    _reveal: Option<IntersectionWatch>,
    _scroll: Option<Listener>,
}

impl ScrollBinding {
    pub fn attach(host: Rc<DomHost>, config: &MotionConfig) -> Result<Self, ClayError> {
        let window = host.window().clone();
        let coordinator = Rc::new(Coordinator::attach(host, Rc::new(RafScheduler), config)?);

        let watched: Vec<Element> = coordinator.watched();
        let reveal = if watched.is_empty() {
            None
        } else {
            let for_batch = Rc::clone(&coordinator);
            Some(IntersectionWatch::new(
                config.reveal.threshold,
                &config.reveal.root_margin(),
                &watched,
                move |batch, observer| {
                    for target in for_batch.on_intersections(batch) {
                        observer.unobserve(&target);
                    }
                },
            )?)
        };

        let scroll = if coordinator.has_progress() || coordinator.has_nav() {
            let for_scroll = Rc::clone(&coordinator);
            Some(Listener::passive(&window, "scroll", move |_| for_scroll.on_scroll())?)
        } else {
            None
        };

        Ok(Self { coordinator, _reveal: reveal, _scroll: scroll })
    }
}

impl Drop for ScrollBinding {
    fn drop(&mut self) {
        self.coordinator.detach();
    }
}
