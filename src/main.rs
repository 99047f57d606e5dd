//! Rink Physics headless driver
//!
//! Stands in for the frame scheduler: builds the standard two-player rink and
//! ticks it at the fixed rate with a seeded input script.
//!
//! Usage: `rink-physics [settings.json] [ticks]`

#[cfg(not(target_arch = "wasm32"))]
use std::process::ExitCode;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> ExitCode {
    env_logger::init();
    log::info!("Rink Physics (headless) starting...");

    match driver::run(std::env::args().skip(1)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The web build drives `Engine` from the page's animation frame callback
}

#[cfg(not(target_arch = "wasm32"))]
mod driver {
    use glam::Vec2;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    use rink_physics::consts::{PLAYER_DIAMETER, PLAYER_MASS, TICK_RATE};
    use rink_physics::{Engine, EngineSettings, Hitbox, InputState, MoveableObject};

    /// Fixed seed so runs are reproducible
    const SCRIPT_SEED: u64 = 0x51_4B_A7E;
    /// Ticks each scripted key combination is held for
    const HOLD_TICKS: u64 = 30;

    pub fn run(mut args: impl Iterator<Item = String>) -> Result<(), Box<dyn std::error::Error>> {
        let settings = match args.next() {
            Some(path) => EngineSettings::from_json(&std::fs::read_to_string(path)?)?,
            None => EngineSettings::default(),
        };
        let ticks: u64 = match args.next() {
            Some(count) => count.parse()?,
            None => (settings.total_time * TICK_RATE as f32) as u64,
        };

        let players = [Vec2::new(500.0, 200.0), Vec2::new(500.0, 400.0)]
            .into_iter()
            .map(|pos| {
                MoveableObject::player(
                    pos,
                    PLAYER_MASS,
                    vec![Hitbox::circle(PLAYER_DIAMETER, Vec2::ZERO)],
                )
            })
            .collect::<Result<Vec<_>, _>>()?;
        let player_count = players.len();
        let mut engine = Engine::with_puck(settings, players)?;

        let mut rng = Pcg32::seed_from_u64(SCRIPT_SEED);
        let mut input = InputState::default();
        let mut controlled = 0;
        let mut contacts = 0;

        for t in 0..ticks {
            if t % HOLD_TICKS == 0 {
                input = InputState {
                    up: rng.random_bool(0.3),
                    left: rng.random_bool(0.3),
                    down: rng.random_bool(0.3),
                    right: rng.random_bool(0.3),
                };
                if rng.random_bool(0.1) {
                    controlled = (controlled + 1) % player_count;
                }
            }

            engine.tick(controlled, &input);
            contacts += engine.last_tick_contacts();

            if t % TICK_RATE as u64 == 0 {
                log::info!(
                    "t={:>5.1}s remaining={:>5.1}s controlled={} {}",
                    engine.elapsed_seconds(),
                    engine.time_remaining(),
                    controlled,
                    describe(&engine)
                );
            }
        }

        log::info!(
            "Finished {} ticks, {} object contacts",
            engine.elapsed_ticks(),
            contacts
        );
        Ok(())
    }

    fn describe(engine: &Engine) -> String {
        engine
            .objects()
            .iter()
            .map(|o| {
                let p = o.position();
                format!("{:?}({:.0},{:.0})", o.kind(), p.x, p.y)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
