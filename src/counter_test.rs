#![allow(clippy::float_cmp)]

use super::*;

fn spec(target: i64) -> CounterSpec {
    CounterSpec { target, prefix: String::new(), suffix: String::new() }
}

#[test]
fn parse_reads_integer_prefix() {
    assert_eq!(CounterSpec::parse("42", None, None), Some(spec(42)));
    assert_eq!(CounterSpec::parse("  12px", None, None).map(|s| s.target), Some(12));
    assert_eq!(CounterSpec::parse("-7", None, None).map(|s| s.target), Some(-7));
    assert_eq!(CounterSpec::parse("3.9", None, None).map(|s| s.target), Some(3));
}

#[test]
fn parse_rejects_non_numeric() {
    assert_eq!(CounterSpec::parse("abc", None, None), None);
    assert_eq!(CounterSpec::parse("", None, None), None);
    assert_eq!(CounterSpec::parse("-", None, None), None);
}

#[test]
fn parse_keeps_prefix_and_suffix() {
    let parsed = CounterSpec::parse("150", Some("$"), Some("k+")).expect("numeric");
    assert_eq!(parsed.render(150), "$150k+");
}

#[test]
fn thousands_are_grouped() {
    assert_eq!(group_thousands(0), "0");
    assert_eq!(group_thousands(999), "999");
    assert_eq!(group_thousands(1000), "1,000");
    assert_eq!(group_thousands(1_234_567), "1,234,567");
    assert_eq!(group_thousands(-12_500), "-12,500");
}

#[test]
fn ease_out_cubic_endpoints_and_shape() {
    assert_eq!(ease_out_cubic(0.0), 0.0);
    assert_eq!(ease_out_cubic(1.0), 1.0);
    assert_eq!(ease_out_cubic(0.5), 0.875);
    assert_eq!(ease_out_cubic(2.0), 1.0);
    assert_eq!(ease_out_cubic(-1.0), 0.0);
}

#[test]
fn animation_runs_from_zero_to_target() {
    let mut anim = CounterAnimation::new(spec(2000), 1500.0);
    let first = anim.frame(10_000.0);
    assert_eq!(first, CounterFrame { text: "0".to_owned(), done: false });

    let mid = anim.frame(10_750.0);
    assert_eq!(mid.text, "1,750");
    assert!(!mid.done);

    let last = anim.frame(11_500.0);
    assert_eq!(last, CounterFrame { text: "2,000".to_owned(), done: true });
}

#[test]
fn late_frame_clamps_to_target() {
    let mut anim = CounterAnimation::new(spec(8), 1500.0);
    anim.frame(0.0);
    assert_eq!(anim.frame(9_000.0), CounterFrame { text: "8".to_owned(), done: true });
}

#[test]
fn zero_duration_finishes_immediately() {
    let mut anim = CounterAnimation::new(spec(5), 0.0);
    assert_eq!(anim.frame(3.0), CounterFrame { text: "5".to_owned(), done: true });
}

#[test]
fn final_text_is_target_with_affixes() {
    let anim = CounterAnimation::new(
        CounterSpec { target: 12_000, prefix: "~".to_owned(), suffix: "+".to_owned() },
        1500.0,
    );
    assert_eq!(anim.final_text(), "~12,000+");
}
