//! Scroll completion percentage.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

/// One reading of the page's scroll position, taken inside a frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollSample {
    /// Vertical scroll offset in CSS pixels.
    pub offset: f64,
    /// Total scrollable document height.
    pub document_extent: f64,
    /// Viewport height.
    pub viewport_extent: f64,
}

impl ScrollSample {
    /// Distance the page can scroll. Zero or negative for short pages.
    #[must_use]
    pub fn scroll_range(&self) -> f64 {
        self.document_extent - self.viewport_extent
    }

    /// Completion in `[0, 100]`.
    ///
    /// Pages no taller than the viewport report `0` rather than dividing by
    /// a non-positive range. Overscroll (rubber-banding) is clamped.
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        let range = self.scroll_range();
        if range <= 0.0 || !range.is_finite() {
            return 0.0;
        }
        let percent = self.offset / range * 100.0;
        if percent.is_nan() {
            return 0.0;
        }
        percent.clamp(0.0, 100.0)
    }
}

/// CSS `width` value for the progress indicator.
#[must_use]
pub fn width_style(percent: f64) -> String {
    format!("{percent}%")
}
