#![allow(clippy::float_cmp)]

use super::*;

fn sample(offset: f64, document_extent: f64, viewport_extent: f64) -> ScrollSample {
    ScrollSample { offset, document_extent, viewport_extent }
}

#[test]
fn short_page_reports_zero_for_any_offset() {
    for offset in [0.0, 10.0, 500.0, -3.0] {
        assert_eq!(sample(offset, 800.0, 800.0).progress_percent(), 0.0);
        assert_eq!(sample(offset, 600.0, 800.0).progress_percent(), 0.0);
    }
}

#[test]
fn bottom_of_page_is_exactly_one_hundred() {
    assert_eq!(sample(1200.0, 2000.0, 800.0).progress_percent(), 100.0);
}

#[test]
fn top_of_page_is_zero() {
    assert_eq!(sample(0.0, 2000.0, 800.0).progress_percent(), 0.0);
}

#[test]
fn midpoint_is_fifty() {
    assert_eq!(sample(600.0, 2000.0, 800.0).progress_percent(), 50.0);
}

#[test]
fn overscroll_is_clamped() {
    assert_eq!(sample(1300.0, 2000.0, 800.0).progress_percent(), 100.0);
    assert_eq!(sample(-40.0, 2000.0, 800.0).progress_percent(), 0.0);
}

#[test]
fn scroll_range_subtracts_viewport() {
    assert_eq!(sample(0.0, 2000.0, 800.0).scroll_range(), 1200.0);
}

#[test]
fn width_style_formats_percent() {
    assert_eq!(width_style(0.0), "0%");
    assert_eq!(width_style(100.0), "100%");
    assert_eq!(width_style(12.5), "12.5%");
}
