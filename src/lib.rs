//! Dune Rider - climb the dune, survive the descent
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion model, hazards, phases, camera)
//! - `config`: Presets and validated tuning
//! - `view`: Renderer-facing frame snapshot

pub mod config;
pub mod sim;
pub mod view;

pub use config::{ConfigError, DuneConfig, Preset};
pub use view::Frame;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (one tick per 60 Hz display refresh)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest host frame the scheduler will catch up on (seconds)
    pub const MAX_FRAME_TIME: f32 = 0.25;

    /// Steering is ignored at or below this speed
    pub const MIN_STEER_SPEED: f32 = 0.5;
    /// Distance a vehicle is pushed back after hitting a rock
    pub const ROCK_NUDGE: f32 = 2.0;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Unit vector pointing along a heading
#[inline]
pub fn heading_dir(heading: f32) -> Vec2 {
    Vec2::new(heading.cos(), heading.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_normalize_angle() {
        assert!((normalize_angle(2.5 * PI) - 0.5 * PI).abs() < 1e-5);
        assert!((normalize_angle(-2.5 * PI) + 0.5 * PI).abs() < 1e-5);
        assert!((normalize_angle(-PI / 2.0) + PI / 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_normalize_angle_stays_in_range() {
        for i in -200..=200 {
            let angle = i as f32 * 0.137;
            let wrapped = normalize_angle(angle);
            assert!((-PI..PI).contains(&wrapped), "{} -> {}", angle, wrapped);
        }
    }

    #[test]
    fn test_heading_dir_up_is_negative_y() {
        let d = heading_dir(-PI / 2.0);
        assert!(d.x.abs() < 1e-6);
        assert!((d.y + 1.0).abs() < 1e-6);
    }
}
