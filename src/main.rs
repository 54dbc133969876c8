//! Scarper headless demo driver
//!
//! Runs a full autopilot match and logs what happens. Rendering, key
//! decoding and frame pacing belong to an external front end; this binary
//! only exercises the simulation core end to end.

use std::path::Path;
use std::process::ExitCode;

use scarper::MatchConfig;
use scarper::consts::TICK_HZ;
use scarper::sim::{RacePhase, RaceState, TickInput, tick};

/// Safety cap so a stalemate match still terminates
const MAX_TICKS: u64 = 60 * TICK_HZ as u64;

fn main() -> ExitCode {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => match MatchConfig::load(Path::new(&path)) {
            Ok(config) => config,
            Err(err) => {
                log::error!("{err}");
                return ExitCode::FAILURE;
            }
        },
        None => MatchConfig::default(),
    };

    let terrain = match config.build_terrain() {
        Ok(terrain) => terrain,
        Err(err) => {
            log::error!("{err}");
            return ExitCode::FAILURE;
        }
    };
    log::info!(
        "match start: {} cells, extent {:.0}, screen width {:.0}",
        terrain.cell_count(),
        terrain.extent(),
        config.screen_width
    );

    let mut state = RaceState::new(terrain, config.screen_width);
    let input = TickInput {
        demo: true,
        ..Default::default()
    };

    while state.phase() == RacePhase::Running && state.time_ticks() < MAX_TICKS {
        tick(&mut state, &input);

        if state.time_ticks().is_multiple_of(TICK_HZ as u64) {
            let snap = state.snapshot();
            log::info!(
                "t={:>4} leader={} progress={:.2} camera={:.0}",
                snap.time_ticks,
                snap.leader.as_str(),
                snap.progress,
                snap.camera
            );
        }
    }

    match state.phase() {
        RacePhase::Finished => {
            log::info!("{} wins the race", state.leader().id.tint().as_str());
        }
        _ => log::info!("match stopped after {} ticks", state.time_ticks()),
    }
    ExitCode::SUCCESS
}
