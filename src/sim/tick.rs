//! Fixed timestep simulation tick
//!
//! One schedule for both moving parts. The rocket advances every tick from
//! session start; the ball only advances while in flight, so Idle and
//! GameOver ticks are cheap no-ops for it. Displacement is per tick, not per
//! second: position changes by `vel * speed` each call.

use super::collision::{self, TickEvents};
use super::state::{GamePhase, GameState};
use crate::tuning::Tuning;

/// Advance the game state by one fixed tick
pub fn tick(state: &mut GameState, tuning: &Tuning) -> TickEvents {
    advance_rocket(state, tuning);

    if state.phase == GamePhase::InFlight {
        advance_ball(state, tuning)
    } else {
        TickEvents::default()
    }
}

/// Move the rocket by its held velocity, clamped to the legal range
fn advance_rocket(state: &mut GameState, tuning: &Tuning) {
    if state.rocket.vel != 0.0 {
        state.rocket.y = tuning.clamp_rocket_y(state.rocket.y + state.rocket.vel);
    }
}

/// Integrate the ball one step, then resolve surface collisions
fn advance_ball(state: &mut GameState, tuning: &Tuning) -> TickEvents {
    state.ball.pos += state.ball.vel * state.ball.speed;
    collision::resolve_collisions(state, tuning)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Ball;
    use glam::Vec2;

    #[test]
    fn test_idle_tick_leaves_ball_alone() {
        let tuning = Tuning::default();
        let mut state = GameState::new(&tuning);
        state.ball.vel = Vec2::new(1.0, 0.0);

        let events = tick(&mut state, &tuning);

        assert_eq!(state.ball.pos, Vec2::ZERO);
        assert_eq!(events, TickEvents::default());
    }

    #[test]
    fn test_in_flight_tick_moves_by_vel_times_speed() {
        let tuning = Tuning::default();
        let mut state = GameState::new(&tuning);
        state.phase = GamePhase::InFlight;
        state.ball = Ball::new(0.02);
        state.ball.vel = Vec2::new(1.0, 0.0);

        tick(&mut state, &tuning);
        assert_eq!(state.ball.pos, Vec2::new(0.02, 0.0));

        tick(&mut state, &tuning);
        assert_eq!(state.ball.pos, Vec2::new(0.04, 0.0));
    }

    #[test]
    fn test_rocket_moves_every_tick_even_while_idle() {
        let tuning = Tuning::default();
        let mut state = GameState::new(&tuning);
        state.rocket.vel = tuning.rocket_speed;

        tick(&mut state, &tuning);
        assert_eq!(state.rocket.y, tuning.rocket_speed);

        state.phase = GamePhase::GameOver;
        tick(&mut state, &tuning);
        assert_eq!(state.rocket.y, 2.0 * tuning.rocket_speed);
    }

    #[test]
    fn test_rocket_stops_at_top_wall() {
        let tuning = Tuning::default();
        let mut state = GameState::new(&tuning);
        state.rocket.vel = tuning.rocket_speed;

        for _ in 0..100 {
            tick(&mut state, &tuning);
        }
        assert_eq!(state.rocket.y, tuning.arena_half_extent);
    }

    #[test]
    fn test_rocket_stops_where_bottom_edge_meets_wall() {
        let tuning = Tuning::default();
        let mut state = GameState::new(&tuning);
        state.rocket.vel = -tuning.rocket_speed;

        for _ in 0..100 {
            tick(&mut state, &tuning);
        }
        assert_eq!(
            state.rocket.y,
            -tuning.arena_half_extent + tuning.rocket_height
        );
    }

    #[test]
    fn test_game_over_tick_freezes_ball_but_not_rocket() {
        let tuning = Tuning::default();
        let mut state = GameState::new(&tuning);
        state.phase = GamePhase::GameOver;
        state.ball.pos = Vec2::new(-tuning.arena_half_extent, 0.3);
        state.ball.vel = Vec2::new(-1.0, 0.0);
        state.rocket.vel = tuning.rocket_speed;
        let frozen = state.ball.pos;

        for _ in 0..5 {
            tick(&mut state, &tuning);
        }

        assert_eq!(state.ball.pos, frozen);
        assert_eq!(state.rocket.y, 5.0 * tuning.rocket_speed);
    }

    #[test]
    fn test_tick_reports_collision_events() {
        let tuning = Tuning::default();
        let mut state = GameState::new(&tuning);
        state.phase = GamePhase::InFlight;
        state.ball.pos = Vec2::new(0.0, tuning.arena_half_extent);
        state.ball.vel = Vec2::new(0.0, 1.0);
        state.ball.speed = 0.05;

        let events = tick(&mut state, &tuning);

        assert!(events.wall_hit);
        assert_eq!(state.ball.pos.y, tuning.arena_half_extent);
        assert!(state.ball.vel.y < 0.0);
    }

    #[test]
    fn test_straight_rally_reaches_game_over() {
        let tuning = Tuning::default();
        let mut state = GameState::new(&tuning);
        state.phase = GamePhase::InFlight;
        // Rocket parked at the top; ball bounces straight along y = -0.7
        state.rocket.y = tuning.arena_half_extent;
        state.ball.pos = Vec2::new(0.0, -0.7);
        state.ball.vel = Vec2::new(-1.0, 0.0);

        let mut miss_count = 0;
        for _ in 0..100_000 {
            let events = tick(&mut state, &tuning);
            if events.missed {
                miss_count += 1;
            }
            if events.game_over {
                break;
            }
        }

        assert_eq!(miss_count, tuning.max_misses);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives(&tuning), 0);
        assert_eq!(state.ball.pos.x, -tuning.arena_half_extent);
    }
}
