//! Star Catcher entry point
//!
//! Runs the game headless under the autopilot: `star-catcher [seed] [ticks]`.
//! Gameplay events go to the log; the final frame and the session
//! leaderboard are printed as JSON.

const DEFAULT_SEED: u64 = 12345;
const DEFAULT_TICKS: u64 = 3600;

fn main() {
    use star_catcher::sim::TickInput;
    use star_catcher::{Scene, Tuning};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(DEFAULT_SEED);
    let ticks = args.next().and_then(|s| s.parse().ok()).unwrap_or(DEFAULT_TICKS);
    log::info!("Star Catcher (headless) starting: seed {}, {} ticks", seed, ticks);

    let mut scene = match Scene::new(Tuning::load(), seed) {
        Ok(scene) => scene,
        Err(e) => {
            log::error!("Cannot start: {}", e);
            std::process::exit(1);
        }
    };
    let input = TickInput {
        autopilot: true,
        ..Default::default()
    };

    for _ in 0..ticks {
        if let Err(e) = scene.tick(&input) {
            log::error!("Simulation stopped: {}", e);
            std::process::exit(1);
        }
        for event in scene.drain_events() {
            report(&event);
        }
    }

    let output = serde_json::json!({
        "snapshot": scene.snapshot(),
        "leaderboard": scene.scores(),
    });
    match serde_json::to_string_pretty(&output) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize results: {}", e),
    }
}

fn report(event: &star_catcher::sim::GameEvent) {
    use star_catcher::sim::GameEvent;

    match event {
        GameEvent::StarCollected { slot, score } => log::debug!("Star {} -> score {}", slot, score),
        GameEvent::FieldRefilled { generation } => log::info!("All stars collected, wave {}", generation),
        GameEvent::BombSpawned { slot, x, anchor_x } => {
            log::info!("Bomb {} dropped at x={:.0} (player at {:.0})", slot, x, anchor_x)
        }
        GameEvent::Jumped => log::trace!("Jump"),
        GameEvent::PlayerHit { bomb, score } => log::info!("Hit by bomb {} at score {}", bomb, score),
        GameEvent::RoundReset { round, final_score } => {
            log::info!("Round {} starting (last round scored {})", round, final_score)
        }
    }
}
