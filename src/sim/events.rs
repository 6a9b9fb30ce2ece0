//! Input events and their effect on game state
//!
//! Presentation layers translate raw window input into these abstract events
//! and hand them to [`apply_event`] as they arrive, between ticks. Events
//! mutate state immediately; the next tick picks the changes up. When two
//! direction keys fight over the rocket, the last event wins.

use glam::Vec2;

use super::state::{Difficulty, GamePhase, GameState};
use crate::tuning::Tuning;

/// Held rocket direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDir {
    Up,
    Down,
}

/// Abstract input events, independent of any windowing API
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer click in arena coordinates; aims the ball and puts it in flight
    Launch { x: f32, y: f32 },
    /// Direction key pressed; the rocket moves until a stop arrives
    RocketMove(MoveDir),
    /// Direction key released
    RocketStop,
    /// Difficulty preset picked from the menu
    SetDifficulty(Difficulty),
    /// Reset the session; the chosen difficulty carries over
    StartOver,
    /// Player wants out
    Quit,
}

/// Apply one input event to the game state.
///
/// Returns `true` while the session should keep running, `false` once the
/// player asked to quit.
pub fn apply_event(state: &mut GameState, tuning: &Tuning, event: InputEvent) -> bool {
    match event {
        InputEvent::Launch { x, y } => {
            // A finished game only revives through StartOver
            if state.phase != GamePhase::GameOver {
                state.ball.aim_at(Vec2::new(x, y), tuning.max_ball_velocity);
                state.phase = GamePhase::InFlight;
            }
        }
        InputEvent::RocketMove(dir) => {
            state.rocket.vel = match dir {
                MoveDir::Up => tuning.rocket_speed,
                MoveDir::Down => -tuning.rocket_speed,
            };
        }
        InputEvent::RocketStop => {
            state.rocket.vel = 0.0;
        }
        InputEvent::SetDifficulty(level) => {
            state.base_speed = level.base_speed(tuning);
            state.ball.speed = state.base_speed;
        }
        InputEvent::StartOver => {
            state.start_over();
        }
        InputEvent::Quit => return false,
    }
    true
}
