//! Typed configuration for marker names and motion tunables.
//!
//! The host page may override any field through an inline JSON block
//! (`<script type="application/json" id="clay-config">`). Missing fields keep
//! their defaults. Everything is validated once, when the site attaches.

use serde::Deserialize;

use crate::consts::{
    COMPACT_REVEAL_EARLY_TRIGGER_PX, COMPACT_REVEAL_THRESHOLD, COUNTER_DURATION_MS, NAV_HYSTERESIS_PX,
    NAV_REVEAL_THRESHOLD_PX, PAGE_ENTRANCE_MS, PAGE_EXIT_DELAY_MS, REVEAL_EARLY_TRIGGER_PX, REVEAL_THRESHOLD,
    STAGGER_BASE_MS, STAGGER_STEP_MS,
};
use crate::error::ClayError;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Element id of the optional inline JSON config block.
pub const CONFIG_ELEMENT_ID: &str = "clay-config";

/// Class names the coordinator looks for in the host document.
///
/// Each field is a bare class name (no leading `.`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MarkerConfig {
    pub watch: String,
    pub stagger_child: String,
    pub progress_bar: String,
    pub nav: String,
    pub reveal_class: String,
    pub nav_hidden_class: String,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            watch: "animate-on-scroll".into(),
            stagger_child: "stagger-child".into(),
            progress_bar: "scroll-progress".into(),
            nav: "nav".into(),
            reveal_class: "visible".into(),
            nav_hidden_class: "nav-hidden".into(),
        }
    }
}

impl MarkerConfig {
    /// CSS selector for watched elements.
    #[must_use]
    pub fn watch_selector(&self) -> String {
        format!(".{}", self.watch)
    }

    /// CSS selector for stagger children.
    #[must_use]
    pub fn stagger_selector(&self) -> String {
        format!(".{}", self.stagger_child)
    }

    /// CSS selector for the progress indicator.
    #[must_use]
    pub fn progress_selector(&self) -> String {
        format!(".{}", self.progress_bar)
    }

    /// CSS selector for the nav bar.
    #[must_use]
    pub fn nav_selector(&self) -> String {
        format!(".{}", self.nav)
    }

    fn validate(&self) -> Result<(), ClayError> {
        let fields = [
            ("watch", &self.watch),
            ("staggerChild", &self.stagger_child),
            ("progressBar", &self.progress_bar),
            ("nav", &self.nav),
            ("revealClass", &self.reveal_class),
            ("navHiddenClass", &self.nav_hidden_class),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(ClayError::Config(format!("marker {name} must not be empty")));
            }
            if value.chars().any(char::is_whitespace) || value.starts_with('.') {
                return Err(ClayError::Config(format!("marker {name} must be a bare class name, got {value:?}")));
            }
        }
        Ok(())
    }
}

/// Intersection and stagger tunables for the reveal observer.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RevealOptions {
    /// Visible area fraction in `(0, 1]`.
    pub threshold: f64,
    /// Pixels of early trigger at the viewport bottom.
    pub early_trigger_px: f64,
    pub stagger_step_ms: u32,
    pub stagger_base_ms: u32,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: REVEAL_THRESHOLD,
            early_trigger_px: REVEAL_EARLY_TRIGGER_PX,
            stagger_step_ms: STAGGER_STEP_MS,
            stagger_base_ms: STAGGER_BASE_MS,
        }
    }
}

impl RevealOptions {
    /// Tighter trigger used by the compact revision of the site (8% / 40px).
    #[must_use]
    pub fn compact() -> Self {
        Self {
            threshold: COMPACT_REVEAL_THRESHOLD,
            early_trigger_px: COMPACT_REVEAL_EARLY_TRIGGER_PX,
            ..Self::default()
        }
    }

    /// Root margin string in the form `IntersectionObserver` expects.
    #[must_use]
    pub fn root_margin(&self) -> String {
        if self.early_trigger_px <= 0.0 {
            return "0px".into();
        }
        format!("0px 0px -{}px 0px", self.early_trigger_px)
    }

    fn validate(&self) -> Result<(), ClayError> {
        if !(self.threshold > 0.0 && self.threshold <= 1.0) {
            return Err(ClayError::Config(format!("reveal threshold must be in (0, 1], got {}", self.threshold)));
        }
        if !self.early_trigger_px.is_finite() || self.early_trigger_px < 0.0 {
            return Err(ClayError::Config(format!(
                "reveal earlyTriggerPx must be a non-negative number, got {}",
                self.early_trigger_px
            )));
        }
        Ok(())
    }
}

/// Nav bar hide/show tunables.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavOptions {
    pub reveal_threshold_px: f64,
    pub hysteresis_px: f64,
}

impl Default for NavOptions {
    fn default() -> Self {
        Self { reveal_threshold_px: NAV_REVEAL_THRESHOLD_PX, hysteresis_px: NAV_HYSTERESIS_PX }
    }
}

impl NavOptions {
    fn validate(&self) -> Result<(), ClayError> {
        for (name, value) in [("revealThresholdPx", self.reveal_threshold_px), ("hysteresisPx", self.hysteresis_px)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ClayError::Config(format!("nav {name} must be a non-negative number, got {value}")));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CounterOptions {
    pub duration_ms: f64,
}

impl Default for CounterOptions {
    fn default() -> Self {
        Self { duration_ms: COUNTER_DURATION_MS }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransitionOptions {
    pub exit_delay_ms: u32,
    pub entrance_ms: u32,
}

impl Default for TransitionOptions {
    fn default() -> Self {
        Self { exit_delay_ms: PAGE_EXIT_DELAY_MS, entrance_ms: PAGE_ENTRANCE_MS }
    }
}

/// Complete site configuration.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MotionConfig {
    pub markers: MarkerConfig,
    pub reveal: RevealOptions,
    pub nav: NavOptions,
    pub counter: CounterOptions,
    pub transition: TransitionOptions,
}

impl MotionConfig {
    /// Parse an inline JSON override and validate the result.
    pub fn from_json(raw: &str) -> Result<Self, ClayError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every field once. Called by [`crate::coordinator::Coordinator::attach`].
    pub fn validate(&self) -> Result<(), ClayError> {
        self.markers.validate()?;
        self.reveal.validate()?;
        self.nav.validate()?;
        if !(self.counter.duration_ms.is_finite() && self.counter.duration_ms > 0.0) {
            return Err(ClayError::Config(format!(
                "counter durationMs must be positive, got {}",
                self.counter.duration_ms
            )));
        }
        Ok(())
    }
}
