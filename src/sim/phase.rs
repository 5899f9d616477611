//! Climb/descend state machine
//!
//! Climbing -> Descending -> Finished, one way only. Each face of the dune
//! pushes the vehicle along y by a constant forcing term every tick.

use serde::{Deserialize, Serialize};

use super::state::{Phase, Vehicle};
use crate::config::DuneConfig;

/// A phase transition that happened this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseChange {
    pub from: Phase,
    pub to: Phase,
}

/// Apply this tick's forcing and check for the crest or the base.
pub fn step_phase(phase: &mut Phase, vehicle: &mut Vehicle, config: &DuneConfig) -> Option<PhaseChange> {
    let world_height = config.world.height;
    let forcing = &config.phases;

    let next = match *phase {
        Phase::Climbing => {
            vehicle.pos.y += forcing.climb_forcing;
            if vehicle.pos.y <= 0.0 {
                // Crest: pause at the top and face down the far side
                vehicle.pos.y = 0.0;
                vehicle.heading = std::f32::consts::FRAC_PI_2;
                vehicle.speed = 0.0;
                Some(Phase::Descending)
            } else {
                // Gravity can't drag the car off the bottom of the dune
                vehicle.pos.y = vehicle.pos.y.min(world_height);
                None
            }
        }
        Phase::Descending => {
            vehicle.pos.y += forcing.descent_forcing;
            if vehicle.pos.y >= world_height {
                vehicle.pos.y = world_height;
                vehicle.speed = 0.0;
                Some(Phase::Finished)
            } else {
                None
            }
        }
        Phase::Finished => None,
    };

    next.map(|to| {
        let change = PhaseChange { from: *phase, to };
        log::info!("Phase {} -> {}", change.from.as_str(), change.to.as_str());
        *phase = to;
        change
    })
}
