use super::*;

#[test]
fn doubled_repeats_markup() {
    assert_eq!(doubled("<span>A</span>"), "<span>A</span><span>A</span>");
}

#[test]
fn doubled_empty_is_empty() {
    assert_eq!(doubled(""), "");
}
