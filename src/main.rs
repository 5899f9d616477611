//! Dune Rider headless runner
//!
//! Drives a simple autopilot across the dune and prints the final frame as
//! JSON. Usage: `dune-rider [preset | config.json] [seed]`

use std::process::ExitCode;

use dune_rider::consts::SIM_DT;
use dune_rider::sim::{InputIntent, SimState};
use dune_rider::{DuneConfig, Frame, Preset};

/// Give up after this many ticks (a few minutes of game time)
const TICK_LIMIT: u64 = 20_000;
/// Ticks spent backing away after hitting a rock
const EVADE_TICKS: u32 = 40;

/// Throttle up the dune, backing off and turning away from rocks
#[derive(Debug, Default)]
struct Autopilot {
    evade_ticks: u32,
}

impl Autopilot {
    fn intent(&mut self, hit_rock: bool) -> InputIntent {
        if hit_rock {
            self.evade_ticks = EVADE_TICKS;
        }
        if self.evade_ticks > 0 {
            self.evade_ticks -= 1;
            // Reverse for the first half, then drive off at an angle
            let reversing = self.evade_ticks > EVADE_TICKS / 2;
            return InputIntent {
                up: !reversing,
                down: reversing,
                left: true,
                right: false,
            };
        }
        InputIntent {
            up: true,
            ..Default::default()
        }
    }
}

fn load_config(arg: Option<&str>) -> Result<DuneConfig, dune_rider::ConfigError> {
    match arg {
        None => Ok(Preset::default().config()),
        Some(name) => match Preset::from_str(name) {
            Some(preset) => Ok(preset.config()),
            None => DuneConfig::load(name),
        },
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match load_config(args.first().map(String::as_str)) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    let seed = match args.get(1).map(|s| s.parse::<u64>()) {
        None => 1,
        Some(Ok(seed)) => seed,
        Some(Err(e)) => {
            log::error!("Invalid seed '{}': {}", args[1], e);
            return ExitCode::FAILURE;
        }
    };

    let mut state = match SimState::new(config, seed) {
        Ok(state) => state,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    log::info!("Dune Rider (headless) starting, seed {}", seed);

    let mut autopilot = Autopilot::default();
    let mut hit_rock = false;
    while !state.is_finished() && state.time_ticks < TICK_LIMIT {
        let intent = autopilot.intent(hit_rock);
        let events = dune_rider::sim::tick(&mut state, &intent);
        hit_rock = events.motion.is_some_and(|m| m.hit_rock);
    }

    let seconds = state.time_ticks as f32 * SIM_DT;
    if state.is_finished() {
        log::info!("Crossed the dune in {} ticks ({:.1}s)", state.time_ticks, seconds);
    } else {
        log::warn!("Gave up after {} ticks in phase {}", state.time_ticks, state.phase.as_str());
    }

    match serde_json::to_string_pretty(&Frame::capture(&state)) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Failed to serialize frame: {}", e);
            ExitCode::FAILURE
        }
    }
}
