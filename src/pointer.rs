//! Pointer-driven flourishes: cursor glow, magnetic buttons, tilt cards.
//!
//! All three are skipped on coarse (touch) pointers. The math here takes an
//! element rectangle and a client-space pointer position and returns the
//! inline `transform` to apply.

use crate::consts::{MAGNETIC_PULL, TILT_LIFT_PX, TILT_PERSPECTIVE_PX, TILT_RANGE_DEG};

#[cfg(test)]
#[path = "pointer_test.rs"]
mod pointer_test;

/// Media query matched by touch-first devices.
pub const COARSE_POINTER_QUERY: &str = "(pointer: coarse)";

/// Body class while the cursor glow is visible.
pub const CURSOR_ACTIVE_CLASS: &str = "cursor-active";

pub const CURSOR_X_PROPERTY: &str = "--cursor-x";
pub const CURSOR_Y_PROPERTY: &str = "--cursor-y";

pub const MAGNETIC_SELECTOR: &str = ".btn, .card-interactive";
pub const TILT_SELECTOR: &str = ".card-tilt";

/// Spring-back transition applied when the pointer leaves a tilt card.
pub const TILT_SETTLE_TRANSITION: &str = "transform 0.5s cubic-bezier(0.34, 1.56, 0.64, 1)";

/// Element bounds in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Translate an element a fraction of the way toward the pointer.
#[must_use]
pub fn magnetic_transform(rect: Rect, client_x: f64, client_y: f64) -> String {
    let dx = client_x - rect.left - rect.width / 2.0;
    let dy = client_y - rect.top - rect.height / 2.0;
    format!("translate({}px, {}px)", dx * MAGNETIC_PULL, dy * MAGNETIC_PULL)
}

/// Tilt angles `(rotate_x, rotate_y)` in degrees for a pointer over `rect`.
///
/// Returns `None` for degenerate rectangles.
#[must_use]
pub fn tilt_angles(rect: Rect, client_x: f64, client_y: f64) -> Option<(f64, f64)> {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return None;
    }
    let nx = (client_x - rect.left) / rect.width;
    let ny = (client_y - rect.top) / rect.height;
    Some(((ny - 0.5) * -TILT_RANGE_DEG, (nx - 0.5) * TILT_RANGE_DEG))
}

/// Full tilt transform, or `None` for degenerate rectangles.
#[must_use]
pub fn tilt_transform(rect: Rect, client_x: f64, client_y: f64) -> Option<String> {
    let (tilt_x, tilt_y) = tilt_angles(rect, client_x, client_y)?;
    Some(format!(
        "perspective({TILT_PERSPECTIVE_PX}px) rotateX({tilt_x}deg) rotateY({tilt_y}deg) translateY(-{TILT_LIFT_PX}px)"
    ))
}

/// Cursor glow visibility.
///
/// The idle timer is re-armed on every move, so `on_idle` only ever sees the
/// latest one. Class writes happen only on actual transitions.
#[derive(Debug, Clone, Default)]
pub struct CursorGlow {
    active: bool,
}

impl CursorGlow {
    /// Record a move. Returns `true` if the glow just became visible.
    pub fn on_move(&mut self) -> bool {
        let was_active = self.active;
        self.active = true;
        !was_active
    }

    /// Idle timer fired. Returns `true` if the glow should hide now.
    pub fn on_idle(&mut self) -> bool {
        let was_active = self.active;
        self.active = false;
        was_active
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// CSS pixel value for a custom property.
#[must_use]
pub fn px(value: f64) -> String {
    format!("{value}px")
}
