//! Contact resolution
//!
//! The gameplay state machine. Raw contact pairs come in; score, lives, ball
//! velocity, and the reveal schedule are updated in place; side-effect
//! requests for the engine layer come out.

use glam::Vec3;

use super::contact::{BodyId, ColliderCategory, ContactDedup, ContactEvent, classify};
use super::schedule::RevealSchedule;
use super::state::{GameSnapshot, GameState};
use crate::tuning::Tuning;
use crate::{rotate_xz, with_xz_speed};

/// Sound effect identifiers, named after the engine-side clips
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sound {
    /// Ball hits a wall
    Barrier,
    /// Brick hit
    Block0,
    Block1,
    Block2,
    /// Ball hits the paddle
    Paddle,
    /// Run ended
    Over,
}

impl Sound {
    /// Engine-facing sound key, matching the loaded clip names
    pub fn name(self) -> &'static str {
        match self {
            Sound::Barrier => "Barrier",
            Sound::Block0 => "Block0",
            Sound::Block1 => "Block1",
            Sound::Block2 => "Block2",
            Sound::Paddle => "Paddle",
            Sound::Over => "Over",
        }
    }
}

/// Side-effect request for the engine layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    PlaySound(Sound),
    /// Show or hide a brick node
    SetBrickHidden { body: BodyId, hidden: bool },
    /// Persist the run that just ended
    SaveState(GameSnapshot),
    /// Start a new round; the embedding layer answers with
    /// [`GameState::reset`]
    RequestReset,
}

/// The contact state machine: classify, dedup, apply the gameplay rules.
///
/// Owns the last-contact memory. One instance per game session; lives on the
/// same thread as the physics callback.
#[derive(Debug)]
pub struct CollisionResolver {
    tuning: Tuning,
    dedup: ContactDedup,
}

impl CollisionResolver {
    pub fn new(tuning: Tuning) -> Self {
        Self {
            tuning,
            dedup: ContactDedup::default(),
        }
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Body the resolver last acted on (dedup memory)
    pub fn last_contact(&self) -> Option<BodyId> {
        self.dedup.last()
    }

    /// Resolve one reported contact.
    ///
    /// Mutates score/lives, the ball velocity, and the reveal schedule, and
    /// returns the effects the engine layer should execute. Stale events,
    /// repeats of the last contact, and anything arriving while the game is
    /// over resolve to nothing.
    pub fn resolve(
        &mut self,
        event: &ContactEvent,
        state: &mut GameState,
        ball_vel: &mut Vec3,
        schedule: &mut RevealSchedule,
    ) -> Vec<Effect> {
        let Some(body) = classify(event) else {
            return Vec::new();
        };
        // Terminal until the embedding layer resets. Also the guard that
        // keeps lives from being decremented past zero.
        if state.over {
            return Vec::new();
        }
        if !self.dedup.admit(body.id) {
            return Vec::new();
        }

        let mut effects = Vec::new();
        match body.category {
            ColliderCategory::Barrier => {
                effects.push(Effect::PlaySound(Sound::Barrier));
                if body.name.as_deref() == Some("Bottom") {
                    state.lives = state.lives.saturating_sub(1);
                    if state.lives == 0 {
                        state.over = true;
                        log::info!("run over, final score {}", state.score);
                        effects.push(Effect::PlaySound(Sound::Over));
                        effects.push(Effect::SaveState(state.snapshot()));
                        effects.push(Effect::RequestReset);
                    }
                }
            }
            ColliderCategory::Brick => {
                effects.push(Effect::PlaySound(Sound::Block0));
                state.score += 1;
                effects.push(Effect::SetBrickHidden {
                    body: body.id,
                    hidden: true,
                });
                schedule.schedule(body.id, self.tuning.brick_respawn_ticks);
            }
            ColliderCategory::Paddle => {
                effects.push(Effect::PlaySound(Sound::Paddle));
                let deflect = self.tuning.paddle_deflect_deg.to_radians();
                match body.name.as_deref() {
                    Some("Left") => *ball_vel = rotate_xz(*ball_vel, -deflect),
                    Some("Right") => *ball_vel = rotate_xz(*ball_vel, deflect),
                    _ => {}
                }
            }
            // A ball-tagged "other" body has no gameplay rule; fall through
            // to the speed clamp like any other unmatched contact.
            ColliderCategory::Ball => {}
        }

        // Angle changes must not change energy: every distinct contact leaves
        // the ball at the nominal horizontal speed.
        *ball_vel = with_xz_speed(*ball_vel, self.tuning.ball_speed);

        effects
    }
}
