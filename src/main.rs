//! Breaker demo entry point
//!
//! Headless driver: wires the gameplay core together and runs a scripted
//! rally so the contact pipeline, effect handling, persistence, and input
//! mapping can be watched from the log. An engine embedding would do exactly
//! this from its physics and pointer callbacks.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use glam::Vec3;

use breaker_core::audio::AudioSink;
use breaker_core::sim::{
    ColliderCategory, CollisionResolver, ContactBody, ContactEvent, Effect, GameState,
    PaddleControl, RevealSchedule,
};
use breaker_core::{HighScores, Tuning, persistence, xz_speed};

/// Body id of the ball in the scripted scene
const BALL: u64 = 1;

fn ball() -> ContactBody {
    ContactBody::new(BALL, ColliderCategory::Ball)
}

fn timestamp_ms() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as f64)
        .unwrap_or(0.0)
}

fn apply_effects(
    effects: &[Effect],
    state: &mut GameState,
    audio: &AudioSink,
    save_path: &Path,
    highscores: &mut HighScores,
    start_lives: u8,
) {
    for effect in effects {
        match effect {
            Effect::PlaySound(sound) => audio.play(*sound),
            Effect::SetBrickHidden { body, hidden } => {
                log::info!("brick {:?} hidden={}", body, hidden);
            }
            Effect::SaveState(snapshot) => {
                if let Err(err) = persistence::save(save_path, snapshot) {
                    log::warn!("could not save game state: {}", err);
                }
                if let Some(rank) = highscores.add_score(snapshot.score, timestamp_ms()) {
                    log::info!("score {} enters the table at rank {}", snapshot.score, rank);
                }
            }
            Effect::RequestReset => {
                state.reset(start_lives);
                log::info!("new round armed");
            }
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("breaker demo starting");

    let data_dir = std::env::temp_dir();
    let save_path: PathBuf = data_dir.join("breaker-demo-save.json");
    let scores_path: PathBuf = data_dir.join("breaker-demo-highscores.json");

    if let Some(previous) = persistence::load(&save_path) {
        log::info!("previous run ended at score {}", previous.score);
    }
    let mut highscores = HighScores::load(&scores_path);

    let tuning = Tuning::default();
    let mut state = GameState::new(tuning.start_lives);
    let mut schedule = RevealSchedule::default();
    let mut resolver = CollisionResolver::new(tuning.clone());
    let mut ball_vel = Vec3::new(2.0, 0.0, 1.5);
    let audio = AudioSink::new();

    // A scripted rally: a paddle-edge serve, some bricks (one overlap
    // re-reported by the physics step), wall grazes, and three floor hits,
    // the last of which ends the run and re-arms a new one mid-script.
    let script = [
        ContactEvent::new(
            ball(),
            ContactBody::named(2, ColliderCategory::Paddle, "Left"),
        ),
        ContactEvent::new(ball(), ContactBody::new(10, ColliderCategory::Brick)),
        ContactEvent::new(ball(), ContactBody::new(10, ColliderCategory::Brick)),
        ContactEvent::new(
            ball(),
            ContactBody::named(3, ColliderCategory::Barrier, "Left"),
        ),
        ContactEvent::new(
            ball(),
            ContactBody::named(4, ColliderCategory::Barrier, "Bottom"),
        ),
        ContactEvent::new(ball(), ContactBody::new(11, ColliderCategory::Brick)),
        ContactEvent::new(
            ball(),
            ContactBody::named(4, ColliderCategory::Barrier, "Bottom"),
        ),
        ContactEvent::new(
            ball(),
            ContactBody::named(2, ColliderCategory::Paddle, "Right"),
        ),
        ContactEvent::new(
            ball(),
            ContactBody::named(4, ColliderCategory::Barrier, "Bottom"),
        ),
        ContactEvent::new(ball(), ContactBody::new(12, ColliderCategory::Brick)),
    ];

    for event in &script {
        let effects = resolver.resolve(event, &mut state, &mut ball_vel, &mut schedule);
        apply_effects(
            &effects,
            &mut state,
            &audio,
            &save_path,
            &mut highscores,
            tuning.start_lives,
        );
        log::debug!(
            "score {} lives {} speed {:.2}",
            state.score,
            state.lives,
            xz_speed(ball_vel)
        );
    }

    // Pump the simulation until the hidden bricks come back.
    for _ in 0..tuning.brick_respawn_ticks {
        for body in schedule.tick() {
            log::info!("brick {:?} reappears at tick {}", body, schedule.now());
        }
    }

    // Pointer input runs independently of the contact pipeline.
    let mut paddle = PaddleControl::new(tuning.touch_scale, tuning.paddle_limit_x);
    paddle.touch_began(100.0);
    let x = paddle.touch_moved(150.0);
    log::info!("50 px drag puts the paddle at x = {:.1}", x);

    if let Err(err) = highscores.save(&scores_path) {
        log::warn!("could not save high scores: {}", err);
    }

    log::info!(
        "demo finished: score {} lives {} best {:?}",
        state.score,
        state.lives,
        highscores.top_score()
    );
}
