//! Hidden interactions: the Konami code and the logo click streak.

use crate::consts::LOGO_CLICK_STREAK;

#[cfg(test)]
#[path = "easter_test.rs"]
mod easter_test;

pub const LOGO_SELECTOR: &str = ".nav-logo";

/// `KeyboardEvent.key` values, in order.
pub const KONAMI_SEQUENCE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "b",
    "a",
];

/// Messages the logo toast picks from.
pub const TOAST_MESSAGES: [&str; 5] = [
    "You found the secret. There is no secret. Just curiosity.",
    "5 clicks on a logo? You're either testing something or bored. Either way, respect.",
    "This site was compiled from Rust to WebAssembly. Every pixel still earns its place.",
    "Fun fact: The folder this lives in is called 'the-clay.' Because J is the artist. Get it?",
    "GREAT. (Not fine. GREAT.)",
];

pub const RETRO_OVERLAY_TEXT: &str = "\
  ╔══════════════════════════════════╗
  ║   KONAMI CODE ACCEPTED          ║
  ║                                 ║
  ║   > 80s kid detected            ║
  ║   > Loading Atari 2600...       ║
  ║   > Just kidding.               ║
  ║   > But you knew the code.      ║
  ║   > That makes us friends.      ║
  ║                                 ║
  ║   [CLICK TO RETURN]             ║
  ╚══════════════════════════════════╝";

pub const RETRO_OVERLAY_STYLE: &str = "position: fixed; inset: 0; z-index: 99999; background: #000; color: #0f0; \
     font-family: 'Courier New', monospace; display: flex; align-items: center; justify-content: center; \
     flex-direction: column; font-size: 1.2rem; animation: fadeIn 0.5s ease-out; cursor: pointer;";

pub const RETRO_PRE_STYLE: &str = "color: #0f0; text-align: center; line-height: 1.5;";

pub const TOAST_STYLE: &str = "position: fixed; bottom: 2rem; left: 50%; \
     transform: translateX(-50%) translateY(20px); background: var(--color-surface); color: var(--color-text); \
     padding: 1rem 1.5rem; border-radius: 12px; box-shadow: 0 12px 40px rgba(0,0,0,0.15); \
     border: 1px solid var(--color-border-strong); font-size: 0.9rem; max-width: 400px; text-align: center; \
     z-index: 99999; opacity: 0; \
     transition: opacity 0.3s ease, transform 0.3s cubic-bezier(0.34, 1.56, 0.64, 1);";

pub const TOAST_SHOWN_TRANSFORM: &str = "translateX(-50%) translateY(0)";
pub const TOAST_HIDDEN_TRANSFORM: &str = "translateX(-50%) translateY(20px)";

/// Tracks progress through [`KONAMI_SEQUENCE`].
#[derive(Debug, Clone, Default)]
pub struct KonamiDetector {
    index: usize,
}

impl KonamiDetector {
    /// Feed one key. Returns `true` when the sequence completes.
    ///
    /// A wrong key restarts from the beginning without being re-checked as
    /// the first key of a new attempt.
    pub fn on_key(&mut self, key: &str) -> bool {
        if KONAMI_SEQUENCE.get(self.index) != Some(&key) {
            self.index = 0;
            return false;
        }
        self.index += 1;
        if self.index == KONAMI_SEQUENCE.len() {
            self.index = 0;
            return true;
        }
        false
    }

    #[must_use]
    pub fn progress(&self) -> usize {
        self.index
    }
}

/// Counts logo clicks toward the toast.
#[derive(Debug, Clone)]
pub struct ClickStreak {
    count: u32,
    target: u32,
}

impl Default for ClickStreak {
    fn default() -> Self {
        Self { count: 0, target: LOGO_CLICK_STREAK }
    }
}

impl ClickStreak {
    /// Record a click. Returns `true` on the click that completes the
    /// streak; the count then starts over.
    pub fn click(&mut self) -> bool {
        self.count += 1;
        if self.count >= self.target {
            self.count = 0;
            return true;
        }
        false
    }

    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }
}

/// Pick a toast message from a uniform sample in `[0, 1)`.
#[must_use]
pub fn pick_message(sample: f64) -> &'static str {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let index = (sample.clamp(0.0, 1.0) * TOAST_MESSAGES.len() as f64).floor() as usize;
    TOAST_MESSAGES[index.min(TOAST_MESSAGES.len() - 1)]
}
