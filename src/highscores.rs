//! High score leaderboard
//!
//! Tracks the top 10 scores across runs, persisted as JSON next to the save
//! file. Fed from the snapshot emitted at game over.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Final score of the run
    pub score: u64,
    /// Unix timestamp (ms) when achieved; supplied by the caller
    pub timestamp: f64,
}

/// High score leaderboard, sorted descending by score
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, score: u64) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Add a new score to the leaderboard (if it qualifies).
    /// Returns the rank achieved (1-indexed) or None if it didn't qualify.
    pub fn add_score(&mut self, score: u64, timestamp: f64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let entry = HighScoreEntry { score, timestamp };

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

        self.entries.truncate(MAX_HIGH_SCORES);

        Some(rank)
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }

    /// Load the leaderboard from disk, starting fresh when there is nothing
    /// usable
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<HighScores>(&json) {
                Ok(scores) => {
                    log::info!("loaded {} high scores", scores.entries.len());
                    scores
                }
                Err(err) => {
                    log::warn!("corrupt high scores {}: {}", path.display(), err);
                    Self::new()
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::info!("no high scores found, starting fresh");
                Self::new()
            }
            Err(err) => {
                log::warn!("failed to read high scores {}: {}", path.display(), err);
                Self::new()
            }
        }
    }

    /// Save the leaderboard to disk
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string(self)?;
        fs::write(path, json)?;
        log::info!("high scores saved ({} entries)", self.entries.len());
        Ok(())
    }
}
