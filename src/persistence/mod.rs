//! Save/load persistence
//!
//! Versioned JSON envelope around the score/lives snapshot, written once per
//! game over. Corrupt or mismatched saves load as nothing rather than as an
//! error; the caller falls back to a fresh state.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::sim::GameSnapshot;

/// Bumped whenever the snapshot layout changes
pub const SAVE_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct SaveEnvelope {
    version: u32,
    state: GameSnapshot,
}

/// Write the snapshot to `path`, replacing any previous save
pub fn save(path: &Path, snapshot: &GameSnapshot) -> io::Result<()> {
    let envelope = SaveEnvelope {
        version: SAVE_VERSION,
        state: *snapshot,
    };
    let json = serde_json::to_string_pretty(&envelope)?;
    fs::write(path, json)?;
    log::info!("saved game state to {}", path.display());
    Ok(())
}

/// Read a snapshot back, or `None` when there is nothing usable.
///
/// A missing file is the normal first-run case; garbage and version
/// mismatches are logged and treated the same way.
pub fn load(path: &Path) -> Option<GameSnapshot> {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return None,
        Err(err) => {
            log::warn!("failed to read save {}: {}", path.display(), err);
            return None;
        }
    };

    let envelope: SaveEnvelope = match serde_json::from_str(&json) {
        Ok(envelope) => envelope,
        Err(err) => {
            log::warn!("corrupt save {}: {}", path.display(), err);
            return None;
        }
    };

    if envelope.version != SAVE_VERSION {
        log::warn!(
            "save {} has version {}, expected {}",
            path.display(),
            envelope.version,
            SAVE_VERSION
        );
        return None;
    }

    Some(envelope.state)
}
