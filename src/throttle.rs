//! At-most-once-per-frame scheduling.
//!
//! Scroll and pointer events can fire dozens of times between repaints. A
//! [`FrameThrottle`] collapses them into one frame callback. Queued work must
//! recompute from live host state when it runs, since later calls made while a
//! frame is pending are dropped rather than merged.

use std::cell::Cell;
use std::rc::Rc;

use crate::host::FrameScheduler;

#[cfg(test)]
#[path = "throttle_test.rs"]
mod throttle_test;

/// Pending-flag throttle bound to a frame scheduler.
///
/// Each observer owns its own throttle, so one observer's pending frame never
/// suppresses another's.
pub struct FrameThrottle<S: FrameScheduler> {
    scheduler: Rc<S>,
    pending: Rc<Cell<bool>>,
}

impl<S: FrameScheduler> FrameThrottle<S> {
    #[must_use]
    pub fn new(scheduler: Rc<S>) -> Self {
        Self { scheduler, pending: Rc::new(Cell::new(false)) }
    }

    /// Whether a frame callback is currently queued.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }

    /// Run `work` on the next frame unless a frame is already pending.
    ///
    /// Returns `true` if this call queued the frame. When the scheduler
    /// refuses the request the work runs immediately so the flag never
    /// sticks.
    pub fn schedule(&self, work: impl FnOnce() + 'static) -> bool {
        if self.pending.get() {
            return false;
        }
        self.pending.set(true);

        let pending = Rc::clone(&self.pending);
        let callback = Box::new(move || {
            work();
            pending.set(false);
        });

        match self.scheduler.request_frame(callback) {
            Ok(()) => true,
            Err(callback) => {
                log::warn!("frame request refused; running throttled work synchronously");
                callback();
                self.pending.set(false);
                false
            }
        }
    }
}
