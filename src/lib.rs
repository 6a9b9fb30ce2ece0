//! Rocket Pong - a square arena wall-bounce arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `tuning`: Data-driven game balance
//!
//! Rendering and window plumbing are intentionally absent. An outer layer
//! feeds [`sim::InputEvent`]s in and reads [`sim::Snapshot`]s out each frame;
//! the headless driver binary does exactly that with a scripted tape.

pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration defaults
pub mod consts {
    /// Fixed tick interval shared by the ball and rocket schedules (~60 Hz)
    pub const TICK_INTERVAL_MS: u64 = 16;

    /// Half-width/half-height of the square play boundary
    pub const ARENA_HALF_EXTENT: f32 = 0.8;

    /// Rocket (paddle) geometry - a fixed-x box guarding the left wall
    pub const ROCKET_WIDTH: f32 = 0.09;
    pub const ROCKET_HEIGHT: f32 = 0.6;
    pub const ROCKET_X: f32 = -0.6;
    /// Vertical displacement per tick while a direction key is held
    pub const ROCKET_SPEED: f32 = 0.05;

    /// Velocity magnitude cap, enforced after every reflection
    pub const MAX_BALL_VELOCITY: f32 = 1.3;
    /// Ball speed at session start, before any difficulty selection
    pub const DEFAULT_BALL_SPEED: f32 = 0.01;
    /// Speed gained per deflection, scaled by the running score
    pub const SPEED_GROWTH: f32 = 0.0001;

    /// Misses that end a session
    pub const MAX_MISSES: u32 = 3;

    /// Per-difficulty base ball speeds
    pub const EASY_BALL_SPEED: f32 = 0.008;
    pub const MEDIUM_BALL_SPEED: f32 = 0.015;
    pub const HARD_BALL_SPEED: f32 = 0.03;
}
