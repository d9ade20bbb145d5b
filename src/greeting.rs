//! Time-of-day greeting for `[data-greeting]`.

#[cfg(test)]
#[path = "greeting_test.rs"]
mod greeting_test;

pub const GREETING_SELECTOR: &str = "[data-greeting]";

/// Greeting for a local wall-clock hour (0–23).
#[must_use]
pub fn greeting_for_hour(hour: u32) -> &'static str {
    match hour {
        0..=4 => "You're up late. I like that.",
        5..=11 => "Good morning. Coffee first, then scroll.",
        12..=16 => "Good afternoon. Let's skip the small talk.",
        17..=20 => "Good evening. Grab a seat.",
        _ => "Night owl? Same.",
    }
}
