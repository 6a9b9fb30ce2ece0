//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - No logging, rendering or platform dependencies
//! - All tunables arrive through [`crate::tuning::Tuning`]

pub mod collision;
pub mod events;
pub mod state;
pub mod tick;

pub use collision::{TickEvents, clamp_velocity, reflect_velocity, resolve_collisions, rocket_hit};
pub use events::{InputEvent, MoveDir, apply_event};
pub use state::{Ball, Difficulty, GamePhase, GameState, Rocket, Snapshot};
pub use tick::tick;
