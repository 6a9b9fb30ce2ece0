//! Game state and core simulation types
//!
//! Everything a presentation layer needs to draw a frame lives here, and
//! nothing it does not.

use glam::Vec2;
use serde::Serialize;

use super::collision::clamp_velocity;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Ball at rest, waiting for an aim click
    Idle,
    /// Ball in flight, ticks advance it
    InFlight,
    /// Misses exhausted; the ball stays frozen until a start-over
    GameOver,
}

/// Difficulty presets selectable while playing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" | "med" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Base ball speed for this preset
    pub fn base_speed(&self, tuning: &Tuning) -> f32 {
        match self {
            Difficulty::Easy => tuning.easy_ball_speed,
            Difficulty::Medium => tuning.medium_ball_speed,
            Difficulty::Hard => tuning.hard_ball_speed,
        }
    }
}

/// The bouncing ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    /// Center position in normalized arena coordinates
    pub pos: Vec2,
    /// Direction of travel; magnitude never exceeds the velocity cap
    pub vel: Vec2,
    /// Per-tick displacement multiplier; grows with every deflection
    pub speed: f32,
}

impl Ball {
    pub fn new(speed: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            speed,
        }
    }

    /// Re-aim the ball toward a target point.
    ///
    /// The new velocity is the unit vector from the ball to the target,
    /// clamped to `max`. A click exactly on the ball center leaves the
    /// velocity unchanged.
    pub fn aim_at(&mut self, target: Vec2, max: f32) {
        if let Some(dir) = (target - self.pos).try_normalize() {
            self.vel = clamp_velocity(dir, max);
        }
    }
}

/// The player's rocket (paddle), guarding the left wall
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rocket {
    /// Vertical position of the rocket's top edge; x never changes
    pub y: f32,
    /// Vertical velocity; zero while no direction key is held
    pub vel: f32,
}

impl Default for Rocket {
    fn default() -> Self {
        Self { y: 0.0, vel: 0.0 }
    }
}

/// Complete game state, owned by the session and mutated in place
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Current phase
    pub phase: GamePhase,
    /// The bouncing ball
    pub ball: Ball,
    /// Player rocket
    pub rocket: Rocket,
    /// Successful rocket deflections this session
    pub score: u32,
    /// Balls lost past the left wall
    pub misses: u32,
    /// Base ball speed of the selected difficulty; start-over returns to it
    pub base_speed: f32,
}

impl GameState {
    /// Fresh state: ball centered and at rest, counters zeroed.
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            phase: GamePhase::Idle,
            ball: Ball::new(tuning.default_ball_speed),
            rocket: Rocket::default(),
            score: 0,
            misses: 0,
            base_speed: tuning.default_ball_speed,
        }
    }

    /// Reset the session to its initial values.
    ///
    /// Ball, rocket, score and misses all return to their starting state.
    /// The selected difficulty survives: the ball speed comes back as the
    /// current base speed, not the grown one.
    pub fn start_over(&mut self) {
        self.phase = GamePhase::Idle;
        self.ball = Ball::new(self.base_speed);
        self.rocket = Rocket::default();
        self.score = 0;
        self.misses = 0;
    }

    /// Lives remaining before the session ends
    pub fn lives(&self, tuning: &Tuning) -> u32 {
        tuning.max_misses.saturating_sub(self.misses)
    }

    /// Read-only view for presentation layers
    pub fn snapshot(&self, tuning: &Tuning) -> Snapshot {
        Snapshot {
            ball_pos: self.ball.pos,
            rocket_y: self.rocket.y,
            score: self.score,
            lives: self.lives(tuning),
            game_over: self.phase == GamePhase::GameOver,
        }
    }
}

/// Per-frame view handed to presentation layers
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Snapshot {
    pub ball_pos: Vec2,
    pub rocket_y: f32,
    pub score: u32,
    pub lives: u32,
    pub game_over: bool,
}
