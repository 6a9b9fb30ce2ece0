//! Collision detection and response for the square arena
//!
//! The ball is a point, the walls are the four edges of the square, and the
//! rocket is an axis-aligned box on the left side. One resolution pass checks
//! all five surfaces in a fixed order; the checks are independent, so a ball
//! landing in a corner reflects off both walls in the same pass.

use glam::Vec2;

use super::state::{Ball, GamePhase, GameState};
use crate::tuning::Tuning;

/// What happened during one resolution pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickEvents {
    /// Ball deflected off the rocket
    pub rocket_hit: bool,
    /// Ball bounced off the top, bottom or right wall
    pub wall_hit: bool,
    /// Ball escaped past the rocket into the left wall
    pub missed: bool,
    /// That miss was the last one
    pub game_over: bool,
}

/// Clamp a velocity's magnitude to `max`, keeping its direction
#[inline]
pub fn clamp_velocity(vel: Vec2, max: f32) -> Vec2 {
    let speed = vel.length();
    if speed > max {
        vel / speed * max
    } else {
        vel
    }
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Rocket hit test: ball center against the rocket's box, bounds inclusive.
///
/// The ball is treated as a point here; `rocket_y` is the box's top edge.
#[inline]
pub fn rocket_hit(ball_pos: Vec2, rocket_y: f32, tuning: &Tuning) -> bool {
    ball_pos.x >= tuning.rocket_x
        && ball_pos.x <= tuning.rocket_x + tuning.rocket_width
        && ball_pos.y >= rocket_y - tuning.rocket_height
        && ball_pos.y <= rocket_y
}

/// Reflect the ball off a surface and re-apply the velocity cap
#[inline]
fn bounce(ball: &mut Ball, normal: Vec2, max: f32) {
    ball.vel = clamp_velocity(reflect_velocity(ball.vel, normal), max);
}

/// Resolve all surface collisions for the ball's current position.
///
/// Checks run in a fixed order: rocket, top wall, bottom wall, right wall,
/// left wall. Wall contact clamps the touched coordinate back onto the
/// boundary. Reaching the left wall is a miss; the terminal miss freezes the
/// ball where it stopped instead of reflecting it.
pub fn resolve_collisions(state: &mut GameState, tuning: &Tuning) -> TickEvents {
    let mut events = TickEvents::default();
    let half = tuning.arena_half_extent;
    let max = tuning.max_ball_velocity;

    if rocket_hit(state.ball.pos, state.rocket.y, tuning) {
        bounce(&mut state.ball, Vec2::X, max);
        state.score += 1;
        state.ball.speed += state.score as f32 * tuning.speed_growth;
        events.rocket_hit = true;
    }

    if state.ball.pos.y >= half {
        state.ball.pos.y = half;
        bounce(&mut state.ball, Vec2::NEG_Y, max);
        events.wall_hit = true;
    }

    if state.ball.pos.y <= -half {
        state.ball.pos.y = -half;
        bounce(&mut state.ball, Vec2::Y, max);
        events.wall_hit = true;
    }

    if state.ball.pos.x >= half {
        state.ball.pos.x = half;
        bounce(&mut state.ball, Vec2::NEG_X, max);
        events.wall_hit = true;
    }

    if state.ball.pos.x <= -half {
        state.ball.pos.x = -half;
        state.misses += 1;
        events.missed = true;
        if state.misses >= tuning.max_misses {
            state.phase = GamePhase::GameOver;
            events.game_over = true;
        } else {
            bounce(&mut state.ball, Vec2::X, max);
        }
    }

    events
}
