//! Data-driven game balance
//!
//! Every gameplay-balancing number lives here so the arena can be retuned
//! without a rebuild. Values load from a JSON file at startup and fall back
//! to the compiled defaults when the file is missing or malformed.

use serde::{Deserialize, Serialize};

use crate::consts;

/// Tunable simulation constants.
///
/// A tuning file may override any subset of fields; the rest keep their
/// defaults from [`crate::consts`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Arena ===
    /// Half-width/half-height of the square play boundary
    pub arena_half_extent: f32,

    // === Rocket ===
    /// Rocket box width
    pub rocket_width: f32,
    /// Rocket box height
    pub rocket_height: f32,
    /// Fixed horizontal position of the rocket's left edge
    pub rocket_x: f32,
    /// Vertical displacement per tick while a direction key is held
    pub rocket_speed: f32,

    // === Ball ===
    /// Velocity magnitude cap, enforced after every reflection
    pub max_ball_velocity: f32,
    /// Ball speed at session start, before any difficulty selection
    pub default_ball_speed: f32,
    /// Speed gained per deflection, scaled by the running score
    pub speed_growth: f32,

    // === Session ===
    /// Misses that end the game
    pub max_misses: u32,

    // === Difficulty presets ===
    pub easy_ball_speed: f32,
    pub medium_ball_speed: f32,
    pub hard_ball_speed: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            arena_half_extent: consts::ARENA_HALF_EXTENT,

            rocket_width: consts::ROCKET_WIDTH,
            rocket_height: consts::ROCKET_HEIGHT,
            rocket_x: consts::ROCKET_X,
            rocket_speed: consts::ROCKET_SPEED,

            max_ball_velocity: consts::MAX_BALL_VELOCITY,
            default_ball_speed: consts::DEFAULT_BALL_SPEED,
            speed_growth: consts::SPEED_GROWTH,

            max_misses: consts::MAX_MISSES,

            easy_ball_speed: consts::EASY_BALL_SPEED,
            medium_ball_speed: consts::MEDIUM_BALL_SPEED,
            hard_ball_speed: consts::HARD_BALL_SPEED,
        }
    }
}

impl Tuning {
    /// Parse a tuning overlay from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Load tuning from a file, falling back to defaults on any failure.
    pub fn load_or_default(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(tuning) if tuning.validate() => {
                    log::info!("Loaded tuning from {path}");
                    tuning
                }
                Ok(_) => {
                    log::warn!("Tuning in {path} failed validation, using defaults");
                    Self::default()
                }
                Err(err) => {
                    log::warn!("Could not parse {path}: {err}, using defaults");
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!("Could not read {path}: {err}, using defaults");
                Self::default()
            }
        }
    }

    /// Sanity check: positive geometry and a rocket that fits the arena.
    pub fn validate(&self) -> bool {
        self.arena_half_extent > 0.0
            && self.rocket_width > 0.0
            && self.rocket_height > 0.0
            && self.rocket_height <= 2.0 * self.arena_half_extent
            && self.rocket_speed >= 0.0
            && self.max_ball_velocity > 0.0
            && self.default_ball_speed > 0.0
            && self.max_misses > 0
    }

    /// Clamp a rocket top-edge position to its legal vertical range.
    ///
    /// The range keeps the whole box inside the arena: the top edge may not
    /// pass the top wall, the bottom edge may not pass the bottom wall.
    #[inline]
    pub fn clamp_rocket_y(&self, y: f32) -> f32 {
        y.clamp(
            -self.arena_half_extent + self.rocket_height,
            self.arena_half_extent,
        )
    }
}
