//! Sound asset mapping and a logging playback sink
//!
//! The sim emits [`Sound`] values; an engine maps them to clips it loaded at
//! startup. This module owns the clip table and a headless sink the demo
//! driver plays into.

use crate::sim::Sound;

/// Every sound the game uses, for preloading
pub const ALL_SOUNDS: [Sound; 6] = [
    Sound::Barrier,
    Sound::Block0,
    Sound::Block1,
    Sound::Block2,
    Sound::Paddle,
    Sound::Over,
];

/// Clip file for a sound, relative to the asset bundle's Sounds directory
pub fn clip_file(sound: Sound) -> &'static str {
    match sound {
        Sound::Barrier => "Barrier.wav",
        Sound::Block0 => "Block0.wav",
        Sound::Block1 => "Block1.wav",
        Sound::Block2 => "Block2.wav",
        Sound::Paddle => "Paddle.wav",
        Sound::Over => "GameOver.wav",
    }
}

/// Playback backend for headless runs: logs plays instead of mixing audio
#[derive(Debug)]
pub struct AudioSink {
    muted: bool,
}

impl Default for AudioSink {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioSink {
    pub fn new() -> Self {
        Self { muted: false }
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Play a sound. In this backend that means logging which clip an engine
    /// would trigger.
    pub fn play(&self, sound: Sound) {
        if self.muted {
            return;
        }
        log::debug!("play sound {} ({})", sound.name(), clip_file(sound));
    }
}
