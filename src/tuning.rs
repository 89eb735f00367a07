//! Data-driven game balance
//!
//! The gameplay constants as a serde round-trippable struct, so an outer
//! layer can load balance changes as data instead of recompiling. `Default`
//! is the canonical tuning from [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Lives at the start of a round
    pub start_lives: u8,
    /// Horizontal-plane ball speed restored after every resolved contact
    pub ball_speed: f32,
    /// Deflection for paddle edge hits, in degrees
    pub paddle_deflect_deg: f32,
    /// Ticks a struck brick stays hidden before it reappears
    pub brick_respawn_ticks: u32,
    /// Half-width of the paddle's travel along X
    pub paddle_limit_x: f32,
    /// Screen-pixel to world-unit scale for paddle dragging
    pub touch_scale: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            start_lives: consts::START_LIVES,
            ball_speed: consts::BALL_SPEED,
            paddle_deflect_deg: consts::PADDLE_DEFLECT_DEG,
            brick_respawn_ticks: consts::BRICK_RESPAWN_TICKS,
            paddle_limit_x: consts::PADDLE_LIMIT_X,
            touch_scale: consts::TOUCH_SCALE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_consts() {
        let tuning = Tuning::default();
        assert_eq!(tuning.start_lives, 3);
        assert_eq!(tuning.ball_speed, 3.0);
        assert_eq!(tuning.paddle_deflect_deg, 20.0);
        assert_eq!(tuning.brick_respawn_ticks, 120);
    }

    #[test]
    fn test_json_round_trip() {
        let tuning = Tuning {
            ball_speed: 4.25,
            ..Default::default()
        };
        let json = serde_json::to_string(&tuning).unwrap();
        let back: Tuning = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tuning);
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let tuning: Tuning = serde_json::from_str(r#"{"start_lives": 5}"#).unwrap();
        assert_eq!(tuning.start_lives, 5);
        assert_eq!(tuning.brick_respawn_ticks, 120);
    }
}
