//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use serde::{Deserialize, Serialize};

use super::camera::camera_offset;
use super::motion::{self, MotionReport};
use super::phase::{PhaseChange, step_phase};
use super::state::SimState;
use crate::consts::*;

/// Directional controls held during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputIntent {
    /// Throttle
    pub up: bool,
    /// Brake / reverse
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TickEvents {
    /// `None` when the run was already finished and nothing moved
    pub motion: Option<MotionReport>,
    pub phase_change: Option<PhaseChange>,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut SimState, input: &InputIntent) -> TickEvents {
    // Finished runs are frozen
    if state.is_finished() {
        return TickEvents::default();
    }

    let report = motion::advance(&mut state.vehicle, input, &state.world, &state.config);
    state.in_deep_sand = report.handling.in_deep_sand;

    let phase_change = step_phase(&mut state.phase, &mut state.vehicle, &state.config);

    state.camera_y = camera_offset(
        state.vehicle.pos.y,
        state.config.world.height,
        state.config.camera.as_ref(),
    );
    state.time_ticks += 1;

    TickEvents {
        motion: Some(report),
        phase_change,
    }
}

/// Fixed-step accumulator between a host clock and `tick`
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedStep {
    accumulator: f32,
}

impl FixedStep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of ticks owed for `elapsed` seconds of host time.
    /// Long stalls are capped so the game never tries to catch up for seconds.
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        self.accumulator += elapsed.clamp(0.0, MAX_FRAME_TIME);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        // Hit the cap: drop the backlog instead of carrying it forward
        if substeps == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(SIM_DT);
        }
        substeps
    }

    /// Leftover time, in ticks (never more than 1)
    pub fn alpha(&self) -> f32 {
        self.accumulator / SIM_DT
    }
}

impl SimState {
    /// Run however many ticks `elapsed` seconds of host time are worth,
    /// holding `input` for all of them. Returns any phase changes.
    pub fn run_frame(&mut self, elapsed: f32, input: &InputIntent) -> Vec<PhaseChange> {
        let steps = self.clock.advance(elapsed);

        (0..steps)
            .filter_map(|_| tick(self, input).phase_change)
            .collect()
    }
}
