//! Local leaderboard
//!
//! Persisted as JSON, tracks the top 10 scores sorted descending;
//! ties rank below earlier submissions.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::persistence::{self, PersistError};

/// Maximum number of entries to keep
pub const MAX_ENTRIES: usize = 10;

/// A single leaderboard entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// Player name as submitted
    pub name: String,
    /// Final round score
    pub score: i64,
    /// Unix timestamp (ms) when achieved
    pub timestamp: f64,
}

/// Top-N leaderboard
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Leaderboard {
    pub entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a score qualifies for the board
    pub fn qualifies(&self, score: i64) -> bool {
        if score <= 0 {
            return false;
        }
        if self.entries.len() < MAX_ENTRIES {
            return true;
        }
        // Must beat the lowest entry outright
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Get the rank a score would achieve (1-indexed, None if it misses)
    pub fn potential_rank(&self, score: i64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let rank = self.entries.iter().position(|e| score > e.score);
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Add a new score (if it qualifies), keeping descending order
    /// with ties below earlier submissions.
    /// Returns the rank achieved (1-indexed) or None if it didn't qualify
    pub fn add_score(&mut self, name: &str, score: i64, timestamp: f64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let entry = LeaderboardEntry {
            name: name.to_string(),
            score,
            timestamp,
        };

        // Find insertion point (sorted descending by score)
        let pos = self.entries.iter().position(|e| score > e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        // Trim to max size
        self.entries.truncate(MAX_ENTRIES);

        Some(rank)
    }

    /// Check if the board is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<i64> {
        self.entries.first().map(|e| e.score)
    }

    /// Load from a JSON file, starting fresh when absent or corrupt.
    pub fn load(path: &Path) -> Self {
        match persistence::load_json::<Leaderboard>(path) {
            Ok(board) => {
                log::info!("Loaded {} leaderboard entries", board.entries.len());
                board
            }
            Err(err) => {
                log::info!("No leaderboard found, starting fresh ({})", err);
                Self::new()
            }
        }
    }

    /// Save as JSON.
    pub fn save(&self, path: &Path) -> Result<(), PersistError> {
        persistence::save_json(path, self)
    }
}
