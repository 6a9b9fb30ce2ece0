//! Rocket Pong entry point
//!
//! Headless driver: replays a scripted input tape through the simulation at
//! the fixed tick cadence (back-to-back, no sleeping) and reports the session
//! the way an on-screen HUD would. Optional arguments, in any order: a
//! difficulty name (easy/medium/hard) and a path to a JSON tuning file.

use rocket_pong::Tuning;
use rocket_pong::consts::TICK_INTERVAL_MS;
use rocket_pong::sim::{Difficulty, GamePhase, GameState, InputEvent, MoveDir, apply_event, tick};

/// Scripted session: (tick index, event)
const SCRIPT: &[(u64, InputEvent)] = &[
    (0, InputEvent::Launch { x: 0.5, y: 0.5 }),
    (40, InputEvent::RocketMove(MoveDir::Down)),
    (120, InputEvent::RocketStop),
    (300, InputEvent::Launch { x: -0.9, y: -0.3 }),
    (500, InputEvent::RocketMove(MoveDir::Up)),
    (560, InputEvent::RocketStop),
    (20_000, InputEvent::Quit),
];

/// Hard stop in case the script is edited into an endless rally
const MAX_TICKS: u64 = 30_000;

fn main() {
    env_logger::init();

    let mut tuning = Tuning::default();
    let mut difficulty = None;
    for arg in std::env::args().skip(1) {
        match Difficulty::from_str(&arg) {
            Some(level) => difficulty = Some(level),
            None => tuning = Tuning::load_or_default(&arg),
        }
    }

    log::info!("Rocket Pong starting (tick interval {TICK_INTERVAL_MS} ms)");

    let mut state = GameState::new(&tuning);
    if let Some(level) = difficulty {
        apply_event(&mut state, &tuning, InputEvent::SetDifficulty(level));
        log::info!("Difficulty: {}", level.as_str());
    }

    let mut next_event = 0;
    let mut running = true;
    let mut ticks: u64 = 0;
    while running && state.phase != GamePhase::GameOver && ticks < MAX_TICKS {
        while next_event < SCRIPT.len() && SCRIPT[next_event].0 <= ticks {
            let (_, event) = SCRIPT[next_event];
            if !apply_event(&mut state, &tuning, event) {
                running = false;
            }
            next_event += 1;
        }

        let events = tick(&mut state, &tuning);
        if events.rocket_hit {
            log::info!(
                "Deflected! score={} ball speed={:.4}",
                state.score,
                state.ball.speed
            );
        }
        if events.missed && !events.game_over {
            log::info!("Missed, {} lives left", state.lives(&tuning));
        }
        ticks += 1;
    }

    let snapshot = state.snapshot(&tuning);
    match serde_json::to_string(&snapshot) {
        Ok(json) => log::debug!("Final snapshot: {json}"),
        Err(err) => log::warn!("Could not serialize snapshot: {err}"),
    }

    if snapshot.game_over {
        println!("Game Over! You caught the ball {} times.", snapshot.score);
    } else {
        println!(
            "Session ended after {ticks} ticks with score {}.",
            snapshot.score
        );
    }
}
