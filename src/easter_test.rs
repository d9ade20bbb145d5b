use super::*;

fn feed(detector: &mut KonamiDetector, keys: &[&str]) -> Vec<bool> {
    keys.iter().map(|k| detector.on_key(k)).collect()
}

#[test]
fn full_sequence_fires_once_on_last_key() {
    let mut detector = KonamiDetector::default();
    let fired = feed(&mut detector, &KONAMI_SEQUENCE);
    assert_eq!(fired.iter().filter(|f| **f).count(), 1);
    assert_eq!(fired.last(), Some(&true));
    assert_eq!(detector.progress(), 0);
}

#[test]
fn wrong_key_resets_progress() {
    let mut detector = KonamiDetector::default();
    feed(&mut detector, &["ArrowUp", "ArrowUp", "ArrowDown"]);
    assert_eq!(detector.progress(), 3);
    assert!(!detector.on_key("x"));
    assert_eq!(detector.progress(), 0);
}

#[test]
fn mismatching_key_is_not_rechecked_as_a_fresh_start() {
    let mut detector = KonamiDetector::default();
    // The second ArrowDown is expected but ArrowUp arrives; it resets and is dropped.
    feed(&mut detector, &["ArrowUp", "ArrowUp", "ArrowUp"]);
    assert_eq!(detector.progress(), 0);
}

#[test]
fn sequence_can_repeat() {
    let mut detector = KonamiDetector::default();
    assert_eq!(feed(&mut detector, &KONAMI_SEQUENCE).last(), Some(&true));
    assert_eq!(feed(&mut detector, &KONAMI_SEQUENCE).last(), Some(&true));
}

#[test]
fn uppercase_letters_do_not_match() {
    let mut detector = KonamiDetector::default();
    let mut keys = KONAMI_SEQUENCE.to_vec();
    keys[8] = "B";
    assert!(!feed(&mut detector, &keys).contains(&true));
}

#[test]
fn fifth_click_completes_streak() {
    let mut streak = ClickStreak::default();
    for _ in 0..4 {
        assert!(!streak.click());
    }
    assert_eq!(streak.count(), 4);
    assert!(streak.click());
    assert_eq!(streak.count(), 0);
    assert!(!streak.click());
}

#[test]
fn pick_message_covers_range() {
    assert_eq!(pick_message(0.0), TOAST_MESSAGES[0]);
    assert_eq!(pick_message(0.999_999), TOAST_MESSAGES[4]);
    assert_eq!(pick_message(0.5), TOAST_MESSAGES[2]);
    assert_eq!(pick_message(1.0), TOAST_MESSAGES[4]);
    assert_eq!(pick_message(-3.0), TOAST_MESSAGES[0]);
}
