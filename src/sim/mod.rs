//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Fixed in-tick order: sand, rocks, throttle, phase, camera
//! - No rendering or platform dependencies

pub mod camera;
pub mod motion;
pub mod phase;
pub mod state;
pub mod tick;
pub mod world;

pub use camera::camera_offset;
pub use motion::{Handling, MotionReport, advance};
pub use phase::{PhaseChange, step_phase};
pub use state::{Phase, SimState, Vehicle};
pub use tick::{FixedStep, InputIntent, TickEvents, tick};
pub use world::{HazardZone, Ripple, World};
