//! Breaker core - engine-agnostic gameplay for a 3D brick breaker
//!
//! Core modules:
//! - `sim`: Deterministic gameplay (contact pipeline, game state, paddle input)
//! - `tuning`: Data-driven game balance
//! - `persistence`: Save/load of the score/lives snapshot
//! - `highscores`: Best-score table
//! - `audio`: Sound naming and a logging playback sink
//!
//! The crate owns no engine resources. A host engine feeds raw contact pairs
//! and pointer events in, and executes the [`sim::Effect`] values that come
//! back out.

pub mod audio;
pub mod highscores;
pub mod persistence;
pub mod sim;
pub mod tuning;

pub use highscores::HighScores;
pub use tuning::Tuning;

use glam::Vec3;

/// Game configuration constants
pub mod consts {
    /// Lives at the start of a round
    pub const START_LIVES: u8 = 3;
    /// Horizontal-plane ball speed restored after every resolved contact
    pub const BALL_SPEED: f32 = 3.0;
    /// Deflection applied when the ball strikes a paddle edge (degrees)
    pub const PADDLE_DEFLECT_DEG: f32 = 20.0;
    /// Ticks a struck brick stays hidden before it reappears
    pub const BRICK_RESPAWN_TICKS: u32 = 120;
    /// Half-width of the paddle's travel along X (world units)
    pub const PADDLE_LIMIT_X: f32 = 4.5;
    /// Screen-pixel to world-unit scale for paddle dragging
    pub const TOUCH_SCALE: f32 = 0.1;
}

/// Angle of a velocity in the horizontal (XZ) plane, radians
#[inline]
pub fn xz_angle(v: Vec3) -> f32 {
    v.z.atan2(v.x)
}

/// Magnitude of a velocity in the horizontal (XZ) plane
#[inline]
pub fn xz_speed(v: Vec3) -> f32 {
    (v.x * v.x + v.z * v.z).sqrt()
}

/// Rotate a velocity about the vertical axis, leaving the Y component alone.
/// Positive angles increase [`xz_angle`].
#[inline]
pub fn rotate_xz(v: Vec3, radians: f32) -> Vec3 {
    let (sin, cos) = radians.sin_cos();
    Vec3::new(v.x * cos - v.z * sin, v.y, v.x * sin + v.z * cos)
}

/// Rescale the horizontal components to the given speed, keeping direction
/// and the Y component. A degenerate horizontal velocity is returned
/// unchanged rather than being given an invented direction.
#[inline]
pub fn with_xz_speed(v: Vec3, speed: f32) -> Vec3 {
    let len = xz_speed(v);
    if len <= f32::EPSILON {
        return v;
    }
    let scale = speed / len;
    Vec3::new(v.x * scale, v.y, v.z * scale)
}
