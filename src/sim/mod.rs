//! Deterministic gameplay module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Plain data in, effects out
//! - Stable ordering (by body ID) wherever order is observable
//! - No rendering, audio, or platform dependencies
//!
//! The host engine drives two entry points: [`CollisionResolver::resolve`]
//! once per reported contact pair, and [`RevealSchedule::tick`] once per
//! simulation step. Paddle input runs independently through
//! [`PaddleControl`].

pub mod contact;
pub mod input;
pub mod resolve;
pub mod schedule;
pub mod state;

pub use contact::{BodyId, ColliderCategory, ContactBody, ContactDedup, ContactEvent, classify};
pub use input::PaddleControl;
pub use resolve::{CollisionResolver, Effect, Sound};
pub use schedule::RevealSchedule;
pub use state::{GameSnapshot, GameState};
