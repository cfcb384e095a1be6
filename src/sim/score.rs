//! Score tracker with its on-screen label

use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// Running score plus the label text shown in the HUD
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTracker {
    score: u64,
    label: String,
}

impl Default for ScoreTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self {
            score: 0,
            label: "0".to_string(),
        }
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    /// Text for the HUD; always the decimal form of `score()`
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Add points. Zero is rejected: every scoring event is worth something.
    pub fn increment(&mut self, amount: u32) -> Result<u64, SimError> {
        if amount == 0 {
            return Err(SimError::ZeroScoreIncrement);
        }
        self.score = self.score.saturating_add(amount as u64);
        self.refresh_label();
        Ok(self.score)
    }

    pub fn reset(&mut self) {
        self.score = 0;
        self.refresh_label();
    }

    fn refresh_label(&mut self) {
        self.label = self.score.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_increment_updates_label() {
        let mut score = ScoreTracker::new();
        assert_eq!(score.label(), "0");
        assert_eq!(score.increment(10), Ok(10));
        assert_eq!(score.increment(10), Ok(20));
        assert_eq!(score.label(), "20");
    }

    #[test]
    fn test_zero_increment_is_rejected() {
        let mut score = ScoreTracker::new();
        score.increment(10).unwrap();
        assert_eq!(score.increment(0), Err(SimError::ZeroScoreIncrement));
        assert_eq!(score.score(), 10);
    }

    #[test]
    fn test_reset() {
        let mut score = ScoreTracker::new();
        score.increment(30).unwrap();
        score.reset();
        assert_eq!(score.score(), 0);
        assert_eq!(score.label(), "0");
    }

    proptest! {
        #[test]
        fn prop_score_never_decreases(amounts in proptest::collection::vec(0u32..1000, 0..50)) {
            let mut score = ScoreTracker::new();
            let mut last = 0;
            for amount in amounts {
                let _ = score.increment(amount);
                prop_assert!(score.score() >= last);
                prop_assert_eq!(score.label(), score.score().to_string());
                last = score.score();
            }
        }
    }
}
