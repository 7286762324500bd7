//! Road Crossing entry point
//!
//! Runs a headless session driven by the autopilot and reports the outcome.
//! Usage: `road-crossing [settings.json]`

use std::path::Path;

use road_crossing::Settings;
use road_crossing::sim::{Autopilot, FrameClock, GameEvent, RandomLanes, RenderSnapshot, Session};

fn main() {
    env_logger::init();
    log::info!("Road Crossing (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_or_default(Path::new(&path)),
        None => Settings::default(),
    };
    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!("Session seed: {}", seed);

    let mut session = match Session::new(settings.sim.clone(), RandomLanes::seeded(seed)) {
        Ok(session) => session,
        Err(e) => {
            log::error!("Cannot start session: {e}");
            std::process::exit(1);
        }
    };
    let autopilot = Autopilot::new(settings.demo.autopilot_horizon);
    let mut clock = FrameClock::new();
    session.start();

    let mut frames = 0;
    while frames < settings.demo.max_frames {
        if frames % settings.demo.command_interval == 0 {
            if let Some(command) = autopilot.suggest(&session) {
                session.command(command);
            }
        }

        let report = clock.frame(&mut session);
        frames += 1;

        for event in session.drain_events() {
            match event {
                GameEvent::ScoreChanged { score } if score > 0 && score % 10 == 0 => {
                    log::info!("Reached lane {}", score);
                }
                GameEvent::GameOver { score } => log::info!("Final score: {}", score),
                other => log::debug!("{:?}", other),
            }
        }

        if !report.request_next {
            break;
        }
    }

    let snapshot = RenderSnapshot::capture(&session);
    let summary = serde_json::json!({
        "seed": seed,
        "frames": frames,
        "ticks": session.time_ticks(),
        "status": snapshot.status,
        "lanes_generated": snapshot.lanes.len(),
        "obstacles": snapshot.obstacles.len(),
    });
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to encode summary: {e}"),
    }
}
