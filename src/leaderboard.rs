//! Session leaderboard
//!
//! Keeps the best finished rounds of the current run. Nothing is written to
//! disk; the list dies with the process.

use serde::{Deserialize, Serialize};

/// Maximum number of rounds to keep
pub const MAX_SESSION_SCORES: usize = 10;

/// A finished round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundScore {
    pub score: u64,
    /// Round number (0-based)
    pub round: u32,
    /// Ticks the round lasted
    pub ticks: u64,
}

/// Best rounds so far, highest score first
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionScores {
    pub entries: Vec<RoundScore>,
}

impl SessionScores {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Check if a score would make the list
    pub fn qualifies(&self, score: u64) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_SESSION_SCORES {
            return true;
        }
        self.entries.last().is_none_or(|e| score > e.score)
    }

    /// Rank a score would get (1-indexed), None if it doesn't qualify
    pub fn potential_rank(&self, score: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let rank = self.entries.iter().position(|e| score > e.score);
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Record a finished round. Returns the rank achieved (1-indexed) or
    /// None if it didn't make the list. Ties keep the earlier round first.
    pub fn add_score(&mut self, score: u64, round: u32, ticks: u64) -> Option<usize> {
        let rank = self.potential_rank(score)?;
        self.entries.insert(rank - 1, RoundScore { score, round, ticks });
        self.entries.truncate(MAX_SESSION_SCORES);
        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_never_qualifies() {
        let scores = SessionScores::new();
        assert!(!scores.qualifies(0));
        assert!(scores.qualifies(10));
        assert_eq!(scores.potential_rank(0), None);
    }

    #[test]
    fn test_sorted_descending() {
        let mut scores = SessionScores::new();
        assert_eq!(scores.add_score(30, 0, 100), Some(1));
        assert_eq!(scores.add_score(50, 1, 100), Some(1));
        assert_eq!(scores.add_score(40, 2, 100), Some(2));
        assert_eq!(scores.add_score(40, 3, 100), Some(3));

        let order: Vec<_> = scores.entries.iter().map(|e| (e.score, e.round)).collect();
        assert_eq!(order, vec![(50, 1), (40, 2), (40, 3), (30, 0)]);
        assert_eq!(scores.top_score(), Some(50));
    }

    #[test]
    fn test_truncates_to_max() {
        let mut scores = SessionScores::new();
        for i in 1..=12u32 {
            scores.add_score(i as u64 * 10, i, 60);
        }
        assert_eq!(scores.entries.len(), MAX_SESSION_SCORES);
        assert_eq!(scores.entries.last().map(|e| e.score), Some(30));
        assert!(!scores.qualifies(30));
        assert!(scores.qualifies(31));
        assert_eq!(scores.add_score(20, 13, 60), None);
    }
}
