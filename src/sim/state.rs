//! Game state
//!
//! Score, lives, and the derived game-over flag. Mutated only by the
//! collision resolver; reset by the embedding layer's new-game action.

use serde::{Deserialize, Serialize};

/// Score/lives state for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub score: u64,
    pub lives: u8,
    /// True from the moment lives hits zero until [`GameState::reset`]
    pub over: bool,
}

impl GameState {
    /// Create a fresh state with the given starting lives
    pub fn new(start_lives: u8) -> Self {
        Self {
            score: 0,
            lives: start_lives,
            over: false,
        }
    }

    /// Re-arm for a new round. The only way out of game over.
    pub fn reset(&mut self, start_lives: u8) {
        self.score = 0;
        self.lives = start_lives;
        self.over = false;
    }

    /// Snapshot for persistence
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            score: self.score,
            lives: self.lives,
        }
    }
}

/// Persistable score/lives pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub score: u64,
    pub lives: u8,
}
