use super::*;

#[test]
fn band_boundaries() {
    assert_eq!(greeting_for_hour(0), "You're up late. I like that.");
    assert_eq!(greeting_for_hour(4), "You're up late. I like that.");
    assert_eq!(greeting_for_hour(5), "Good morning. Coffee first, then scroll.");
    assert_eq!(greeting_for_hour(11), "Good morning. Coffee first, then scroll.");
    assert_eq!(greeting_for_hour(12), "Good afternoon. Let's skip the small talk.");
    assert_eq!(greeting_for_hour(16), "Good afternoon. Let's skip the small talk.");
    assert_eq!(greeting_for_hour(17), "Good evening. Grab a seat.");
    assert_eq!(greeting_for_hour(20), "Good evening. Grab a seat.");
    assert_eq!(greeting_for_hour(21), "Night owl? Same.");
    assert_eq!(greeting_for_hour(23), "Night owl? Same.");
}

#[test]
fn every_hour_has_a_greeting() {
    for hour in 0..24 {
        assert!(!greeting_for_hour(hour).is_empty());
    }
}
