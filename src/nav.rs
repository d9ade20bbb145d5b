//! Nav bar hide/show state machine.
//!
//! The bar hides on a deliberate downward scroll once the reader is past the
//! top band, and comes back on a deliberate upward scroll or near the top.
//! Movements within the hysteresis band leave the state alone, which keeps
//! trackpad jitter from flickering the bar.

use crate::config::NavOptions;

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavVisibility {
    #[default]
    Shown,
    Hidden,
}

/// Hysteresis controller over consecutive scroll offsets.
#[derive(Debug, Clone)]
pub struct NavController {
    state: NavVisibility,
    last_y: f64,
    options: NavOptions,
}

impl Default for NavController {
    fn default() -> Self {
        Self::new(NavOptions::default())
    }
}

impl NavController {
    #[must_use]
    pub fn new(options: NavOptions) -> Self {
        Self { state: NavVisibility::Shown, last_y: 0.0, options }
    }

    #[must_use]
    pub fn state(&self) -> NavVisibility {
        self.state
    }

    #[must_use]
    pub fn last_y(&self) -> f64 {
        self.last_y
    }

    /// Feed the offset from the current frame.
    ///
    /// Returns the new state when it changed. `last_y` advances on every
    /// call, transition or not.
    pub fn observe(&mut self, y: f64) -> Option<NavVisibility> {
        let band = self.options.hysteresis_px;
        let top = self.options.reveal_threshold_px;
        let next = match self.state {
            NavVisibility::Shown if y > top && y > self.last_y + band => NavVisibility::Hidden,
            NavVisibility::Hidden if y < self.last_y - band || y < top => NavVisibility::Shown,
            unchanged => unchanged,
        };
        self.last_y = y;

        if next == self.state {
            return None;
        }
        log::debug!("nav {:?} -> {next:?} at y={y}", self.state);
        self.state = next;
        Some(next)
    }
}
