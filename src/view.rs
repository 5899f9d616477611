//! Renderer-facing snapshot
//!
//! The renderer never touches `SimState`; it draws from a `Frame` captured
//! after each tick. Everything here is derived, nothing feeds back.

use serde::{Deserialize, Serialize};

use crate::sim::{Phase, SimState, Vehicle};

/// Columns in the 8-direction car sprite sheet (2 rows)
pub const SPRITE_COLUMNS: u8 = 4;

/// Cell of the sprite sheet to draw for a heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteCell {
    pub col: u8,
    pub row: u8,
}

impl SpriteCell {
    /// Nearest of 8 compass frames; frame 0 faces +x, frames run clockwise
    /// in screen space (+y down)
    pub fn for_heading(heading: f32) -> Self {
        let slice = std::f32::consts::FRAC_PI_4;
        // Shift positive first so slice boundaries always round up
        let index = ((heading / slice + 16.0).round() as i64).rem_euclid(8) as u8;
        Self {
            col: index % SPRITE_COLUMNS,
            row: index / SPRITE_COLUMNS,
        }
    }

    pub fn index(&self) -> u8 {
        self.row * SPRITE_COLUMNS + self.col
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Frame {
    pub tick: u64,
    pub phase: Phase,
    pub vehicle: Vehicle,
    pub camera_y: f32,
    pub sprite: SpriteCell,
    /// Speedometer value shown in the HUD
    pub speed_readout: i32,
    pub bogged_down: bool,
    /// Drop shadow offset under the car (light comes from the crest)
    pub shadow_offset_y: f32,
    /// Big centered message, if any
    pub banner: Option<String>,
}

impl Frame {
    pub fn capture(state: &SimState) -> Self {
        let vehicle = state.vehicle;
        Self {
            tick: state.time_ticks,
            phase: state.phase,
            vehicle,
            camera_y: state.camera_y,
            sprite: SpriteCell::for_heading(vehicle.heading),
            speed_readout: (vehicle.speed * 10.0).round() as i32,
            bogged_down: state.in_deep_sand,
            shadow_offset_y: match state.phase {
                Phase::Climbing => 15.0,
                Phase::Descending | Phase::Finished => -5.0,
            },
            banner: state.is_finished().then(|| "YOU SURVIVED!".to_string()),
        }
    }

    /// HUD lines, top to bottom
    pub fn hud_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("PHASE: {}", self.phase.as_str()),
            format!("SPEED: {}", self.speed_readout),
        ];
        if self.bogged_down {
            lines.push("BOGGED DOWN!".to_string());
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DuneConfig;
    use crate::sim::{InputIntent, tick};
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_sprite_cells_for_compass_headings() {
        assert_eq!(SpriteCell::for_heading(0.0).index(), 0);
        assert_eq!(SpriteCell::for_heading(FRAC_PI_2).index(), 2);
        assert_eq!(SpriteCell::for_heading(PI).index(), 4);
        // Facing up the dune
        let up = SpriteCell::for_heading(-FRAC_PI_2);
        assert_eq!(up.index(), 6);
        assert_eq!((up.col, up.row), (2, 1));
    }

    #[test]
    fn test_slice_boundaries_round_up() {
        use std::f32::consts::FRAC_PI_8;
        assert_eq!(SpriteCell::for_heading(-FRAC_PI_8).index(), 0);
        assert_eq!(SpriteCell::for_heading(FRAC_PI_8).index(), 1);
    }

    #[test]
    fn test_sprite_cell_wraps_any_heading() {
        for i in -40..40 {
            let cell = SpriteCell::for_heading(i as f32 * 0.37);
            assert!(cell.col < SPRITE_COLUMNS);
            assert!(cell.row < 2);
        }
        assert_eq!(SpriteCell::for_heading(2.0 * PI).index(), 0);
        assert_eq!(SpriteCell::for_heading(-7.0 * PI / 4.0).index(), 1);
    }

    #[test]
    fn test_frame_at_start() {
        let state = SimState::new(DuneConfig::default(), 3).unwrap();
        let frame = Frame::capture(&state);
        assert_eq!(frame.phase, Phase::Climbing);
        assert_eq!(frame.speed_readout, 0);
        assert_eq!(frame.shadow_offset_y, 15.0);
        assert!(frame.banner.is_none());
        assert_eq!(frame.hud_lines(), vec!["PHASE: CLIMBING", "SPEED: 0"]);
    }

    #[test]
    fn test_frame_speed_readout() {
        let mut state = SimState::new(DuneConfig::default(), 3).unwrap();
        state.world.pits.clear();
        let throttle = InputIntent {
            up: true,
            ..Default::default()
        };
        for _ in 0..10 {
            tick(&mut state, &throttle);
        }
        // 10 ticks of 0.12 acceleration
        assert_eq!(Frame::capture(&state).speed_readout, 12);
    }

    #[test]
    fn test_finished_frame_has_banner() {
        let mut state = SimState::new(DuneConfig::default(), 3).unwrap();
        state.phase = Phase::Finished;
        state.in_deep_sand = true;
        let frame = Frame::capture(&state);
        assert_eq!(frame.banner.as_deref(), Some("YOU SURVIVED!"));
        assert_eq!(frame.shadow_offset_y, -5.0);
        assert_eq!(frame.hud_lines().last().map(String::as_str), Some("BOGGED DOWN!"));
    }

    #[test]
    fn test_frame_serializes() {
        let state = SimState::new(DuneConfig::default(), 3).unwrap();
        let json = serde_json::to_string(&Frame::capture(&state)).unwrap();
        assert!(json.contains("\"phase\":\"Climbing\""));
    }
}
