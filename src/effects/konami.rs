use std::collections::VecDeque;

pub const KONAMI: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "KeyB",
    "KeyA",
];

/// Sliding window over the last key codes pressed.
#[derive(Debug, Default)]
pub struct KonamiTracker {
    recent: VecDeque<String>,
}

impl KonamiTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a `KeyboardEvent.code`. Returns true when the sequence
    /// completes; the window is cleared so it has to be typed again.
    pub fn push(&mut self, code: &str) -> bool {
        self.recent.push_back(code.to_string());
        if self.recent.len() > KONAMI.len() {
            self.recent.pop_front();
        }
        let matched = self.recent.len() == KONAMI.len()
            && self.recent.iter().zip(KONAMI.iter()).all(|(a, b)| a == b);
        if matched {
            self.recent.clear();
        }
        matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_all(tracker: &mut KonamiTracker, codes: &[&str]) -> Vec<bool> {
        codes.iter().map(|code| tracker.push(code)).collect()
    }

    #[test]
    fn full_sequence_matches_on_last_key() {
        let mut tracker = KonamiTracker::new();
        let hits = type_all(&mut tracker, &KONAMI);
        assert_eq!(hits.iter().filter(|hit| **hit).count(), 1);
        assert_eq!(hits.last(), Some(&true));
    }

    #[test]
    fn leading_noise_is_dropped_from_window() {
        let mut tracker = KonamiTracker::new();
        type_all(&mut tracker, &["KeyX", "Space", "ArrowUp"]);
        assert_eq!(type_all(&mut tracker, &KONAMI).last(), Some(&true));
    }

    #[test]
    fn wrong_key_breaks_sequence() {
        let mut tracker = KonamiTracker::new();
        let mut codes = KONAMI.to_vec();
        codes[4] = "ArrowRight";
        assert!(type_all(&mut tracker, &codes).iter().all(|hit| !hit));
    }

    #[test]
    fn match_resets_window() {
        let mut tracker = KonamiTracker::new();
        type_all(&mut tracker, &KONAMI);
        assert!(!tracker.push("KeyA"));
        assert_eq!(type_all(&mut tracker, &KONAMI).last(), Some(&true));
    }
}
