//! Seamless-loop marquee banners.

#[cfg(test)]
#[path = "marquee_test.rs"]
mod marquee_test;

pub const MARQUEE_SELECTOR: &str = ".marquee";

/// Marker attribute set once a marquee has been doubled.
pub const DOUBLED_ATTRIBUTE: &str = "data-marquee-doubled";

/// Content repeated twice so the CSS scroll can wrap without a gap.
#[must_use]
pub fn doubled(content: &str) -> String {
    let mut out = String::with_capacity(content.len() * 2);
    out.push_str(content);
    out.push_str(content);
    out
}
