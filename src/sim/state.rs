//! Simulation state
//!
//! Everything the game loop owns lives in `SimState`; nothing is global.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::camera::camera_offset;
use super::tick::FixedStep;
use super::world::World;
use crate::config::{ConfigError, DuneConfig};

/// Which face of the dune the vehicle is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Phase {
    /// Driving up toward the crest (y = 0)
    #[default]
    Climbing,
    /// Crest reached, heading back down to the base
    Descending,
    /// Base reached on the far side; the run is over
    Finished,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Climbing => "CLIMBING",
            Phase::Descending => "DESCENDING",
            Phase::Finished => "FINISHED",
        }
    }
}

/// The player's vehicle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Center position in world units
    pub pos: Vec2,
    /// Radians, 0 = +x, -π/2 = up the dune
    pub heading: f32,
    /// Signed speed along the heading (negative = reversing)
    pub speed: f32,
    /// Bounding box, fixed by the body style
    pub width: f32,
    pub height: f32,
}

impl Vehicle {
    /// Vehicle parked at the base of the dune, facing up
    pub fn at_start(config: &DuneConfig) -> Self {
        let (width, height) = config.vehicle.body.size();
        Self {
            pos: Vec2::new(
                config.world.width / 2.0,
                config.world.height - config.vehicle.start_offset,
            ),
            heading: -std::f32::consts::FRAC_PI_2,
            speed: 0.0,
            width,
            height,
        }
    }
}

/// Complete simulation context
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    /// World seed
    pub seed: u64,
    pub config: DuneConfig,
    pub world: World,
    pub vehicle: Vehicle,
    pub phase: Phase,
    /// Vertical scroll for the renderer
    pub camera_y: f32,
    /// Vehicle was bogged down during the last tick
    pub in_deep_sand: bool,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Host-time scheduler for `run_frame`
    #[serde(skip)]
    pub(crate) clock: FixedStep,
}

impl SimState {
    /// Validate the config, generate the world and place the vehicle
    pub fn new(config: DuneConfig, seed: u64) -> Result<Self, ConfigError> {
        let mut rng = Pcg32::seed_from_u64(seed);
        let world = World::generate(&config, &mut rng)?;
        let vehicle = Vehicle::at_start(&config);
        let camera_y = camera_offset(vehicle.pos.y, config.world.height, config.camera.as_ref());

        log::info!(
            "New run: seed={} world={}x{} pits={} rocks={}",
            seed,
            config.world.width,
            config.world.height,
            world.pits.len(),
            world.rocks.len()
        );

        Ok(Self {
            seed,
            config,
            world,
            vehicle,
            phase: Phase::Climbing,
            camera_y,
            in_deep_sand: false,
            time_ticks: 0,
            clock: FixedStep::new(),
        })
    }

    /// Run is over; further ticks are no-ops
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Preset;

    #[test]
    fn test_new_run_starts_climbing_at_base() {
        let state = SimState::new(DuneConfig::default(), 7).unwrap();
        assert_eq!(state.phase, Phase::Climbing);
        assert_eq!(state.vehicle.pos, Vec2::new(400.0, 3900.0));
        assert_eq!(state.vehicle.speed, 0.0);
        assert_eq!(state.vehicle.width, 64.0);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_new_run_rejects_invalid_config() {
        let mut config = Preset::Classic.config();
        config.world.height = -1.0;
        assert!(SimState::new(config, 1).is_err());

        let mut config = DuneConfig::default();
        if let Some(camera) = config.camera.as_mut() {
            camera.overscan = -1000.0;
        }
        assert!(matches!(
            SimState::new(config, 1),
            Err(ConfigError::Overscan(_))
        ));

        let mut config = DuneConfig::default();
        config.phases.descent_forcing = f32::NAN;
        assert!(matches!(
            SimState::new(config, 1),
            Err(ConfigError::Forcing(_))
        ));
    }

    #[test]
    fn test_initial_camera_clamped_to_base() {
        let state = SimState::new(DuneConfig::default(), 7).unwrap();
        // 3900 - 300 would be 3600, max scroll is 4000 - 600 + 50
        assert_eq!(state.camera_y, 3450.0);
    }
}
