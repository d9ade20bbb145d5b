//! Shared numeric constants for the clay crate.

// ── Reveal ──────────────────────────────────────────────────────

/// Fraction of an element's area that must be visible before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.10;

/// Reveal fires this many pixels before the element's top crosses the
/// viewport bottom.
pub const REVEAL_EARLY_TRIGGER_PX: f64 = 60.0;

/// Threshold used by the compact layout revision of the site.
pub const COMPACT_REVEAL_THRESHOLD: f64 = 0.08;

/// Early trigger used by the compact layout revision of the site.
pub const COMPACT_REVEAL_EARLY_TRIGGER_PX: f64 = 40.0;

/// Per-child increment of the stagger delay.
pub const STAGGER_STEP_MS: u32 = 80;

/// Delay applied to the first stagger child.
pub const STAGGER_BASE_MS: u32 = 100;

// ── Nav ─────────────────────────────────────────────────────────

/// Above this offset the nav bar is always shown.
pub const NAV_REVEAL_THRESHOLD_PX: f64 = 120.0;

/// Scroll delta that must be exceeded before the nav bar changes state.
pub const NAV_HYSTERESIS_PX: f64 = 5.0;

// ── Timers ──────────────────────────────────────────────────────

/// How long the body keeps the `page-enter` class after load.
pub const PAGE_ENTRANCE_MS: u32 = 1500;

/// Exit animation time before a same-site navigation proceeds.
pub const PAGE_EXIT_DELAY_MS: u32 = 280;

/// Length of one counter animation.
pub const COUNTER_DURATION_MS: f64 = 1500.0;

/// Fraction of a counter that must be visible before it starts.
pub const COUNTER_THRESHOLD: f64 = 0.5;

/// Idle time after the last mouse move before the cursor glow fades.
pub const CURSOR_IDLE_MS: u32 = 3000;

/// How long the theme toggle keeps its spin transform.
pub const THEME_TOGGLE_SPIN_MS: u32 = 300;

/// How long a tilt card keeps its spring-back transition.
pub const TILT_SETTLE_MS: u32 = 500;

/// Time a toast stays fully visible.
pub const TOAST_VISIBLE_MS: u32 = 4000;

/// Fade-out time before a toast is removed from the document.
pub const TOAST_FADE_MS: u32 = 300;

// ── Pointer ─────────────────────────────────────────────────────

/// How far a magnetic element follows the pointer, as a fraction of the
/// pointer's distance from the element center.
pub const MAGNETIC_PULL: f64 = 0.1;

/// Maximum tilt angle in degrees at a card edge, split over both halves.
pub const TILT_RANGE_DEG: f64 = 8.0;

/// Perspective distance for tilt cards, in pixels.
pub const TILT_PERSPECTIVE_PX: f64 = 800.0;

/// Lift applied to a tilted card, in pixels.
pub const TILT_LIFT_PX: f64 = 4.0;

// ── Easter eggs ─────────────────────────────────────────────────

/// Logo clicks required before the toast appears.
pub const LOGO_CLICK_STREAK: u32 = 5;
