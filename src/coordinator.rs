//! Scroll and visibility animation coordinator.
//!
//! ARCHITECTURE
//! ============
//! One coordinator owns three observers: the reveal observer fed by
//! intersection batches, and the progress and nav sinks fed by scroll events.
//! Scroll work goes through one [`FrameThrottle`] per sink and reads the
//! scroll position inside the frame callback, never from the event. Optional
//! sinks whose element is absent from the page are simply not created.
//!
//! Everything talks to the page through [`Host`], so the same code drives the
//! browser and the in-memory document used by tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::config::{MarkerConfig, MotionConfig};
use crate::error::ClayError;
use crate::host::{FrameScheduler, Host};
use crate::nav::{NavController, NavVisibility};
use crate::progress::width_style;
use crate::reveal::{Intersection, RevealObserver};
use crate::throttle::FrameThrottle;

#[cfg(test)]
#[path = "coordinator_test.rs"]
mod coordinator_test;

struct ProgressSink<N, S: FrameScheduler> {
    bar: N,
    throttle: FrameThrottle<S>,
}

struct NavSink<N, S: FrameScheduler> {
    element: N,
    controller: Rc<RefCell<NavController>>,
    throttle: FrameThrottle<S>,
}

/// Attached coordinator. Drop or [`detach`](Self::detach) to stop it.
pub struct Coordinator<H: Host, S: FrameScheduler> {
    host: Rc<H>,
    markers: MarkerConfig,
    reveal: RefCell<RevealObserver<H::Node>>,
    progress: Option<ProgressSink<H::Node, S>>,
    nav: Option<NavSink<H::Node, S>>,
    attached: Rc<Cell<bool>>,
}

impl<H, S> Coordinator<H, S>
where
    H: Host + 'static,
    H::Node: 'static,
    S: FrameScheduler,
{
    /// Validate `config`, resolve marker classes in `host`, and register
    /// every watched element.
    ///
    /// A page with no matching elements attaches fine and does nothing.
    pub fn attach(host: Rc<H>, frames: Rc<S>, config: &MotionConfig) -> Result<Self, ClayError> {
        config.validate()?;
        let markers = config.markers.clone();

        let mut reveal = RevealObserver::new(config.reveal);
        let stagger_selector = markers.stagger_selector();
        for node in host.query_all(&markers.watch_selector()) {
            let stagger = host.query_within(&node, &stagger_selector);
            reveal.register(node, stagger);
        }

        let progress = host
            .query(&markers.progress_selector())
            .map(|bar| ProgressSink { bar, throttle: FrameThrottle::new(Rc::clone(&frames)) });

        let nav = host.query(&markers.nav_selector()).map(|element| NavSink {
            element,
            controller: Rc::new(RefCell::new(NavController::new(config.nav))),
            throttle: FrameThrottle::new(Rc::clone(&frames)),
        });

        log::info!(
            "coordinator attached: {} watched, progress={}, nav={}",
            reveal.len(),
            progress.is_some(),
            nav.is_some()
        );

        Ok(Self {
            host,
            markers,
            reveal: RefCell::new(reveal),
            progress,
            nav,
            attached: Rc::new(Cell::new(true)),
        })
    }

    /// Elements the host should start observing for intersection.
    #[must_use]
    pub fn watched(&self) -> Vec<H::Node> {
        self.reveal.borrow().pending().cloned().collect()
    }

    #[must_use]
    pub fn has_progress(&self) -> bool {
        self.progress.is_some()
    }

    #[must_use]
    pub fn has_nav(&self) -> bool {
        self.nav.is_some()
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached.get()
    }

    /// Current nav visibility, if a nav bar is present.
    #[must_use]
    pub fn nav_state(&self) -> Option<NavVisibility> {
        self.nav.as_ref().map(|nav| nav.controller.borrow().state())
    }

    /// Scroll event entry point. Cheap; all reads happen on the next frame.
    pub fn on_scroll(&self) {
        if !self.attached.get() {
            return;
        }
        if let Some(progress) = &self.progress {
            let host = Rc::clone(&self.host);
            let bar = progress.bar.clone();
            let attached = Rc::clone(&self.attached);
            progress.throttle.schedule(move || {
                if !attached.get() {
                    return;
                }
                let percent = host.scroll_sample().progress_percent();
                host.set_style(&bar, "width", &width_style(percent));
            });
        }
        if let Some(nav) = &self.nav {
            let host = Rc::clone(&self.host);
            let element = nav.element.clone();
            let controller = Rc::clone(&nav.controller);
            let hidden_class = self.markers.nav_hidden_class.clone();
            let attached = Rc::clone(&self.attached);
            nav.throttle.schedule(move || {
                if !attached.get() {
                    return;
                }
                let y = host.scroll_sample().offset;
                match controller.borrow_mut().observe(y) {
                    Some(NavVisibility::Hidden) => host.add_class(&element, &hidden_class),
                    Some(NavVisibility::Shown) => host.remove_class(&element, &hidden_class),
                    None => {}
                }
            });
        }
    }

    /// Intersection batch entry point.
    ///
    /// Returns the elements that revealed in this batch; the host must stop
    /// observing each of them.
    pub fn on_intersections<I>(&self, entries: I) -> Vec<H::Node>
    where
        I: IntoIterator<Item = Intersection<H::Node>>,
    {
        if !self.attached.get() {
            return Vec::new();
        }
        let reveals = self.reveal.borrow_mut().on_entries(entries);
        let class = &self.markers.reveal_class;
        reveals
            .into_iter()
            .map(|reveal| {
                self.host.add_class(&reveal.target, class);
                for child in &reveal.children {
                    self.host.set_style(&child.node, "transition-delay", &child.delay_style());
                    self.host.add_class(&child.node, class);
                }
                reveal.target
            })
            .collect()
    }

    /// Stop reacting to events. Frames already queued become no-ops.
    pub fn detach(&self) {
        self.attached.set(false);
        log::debug!("coordinator detached");
    }
}

impl<H: Host, S: FrameScheduler> Drop for Coordinator<H, S> {
    fn drop(&mut self) {
        self.attached.set(false);
    }
}
