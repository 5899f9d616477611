//! Game configuration and presets
//!
//! Every variant of the game (small screen, scrolling dune, rocky expedition)
//! is one `DuneConfig`. Configs are validated once, before a world is built;
//! tick code assumes a valid config.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Configuration rejected before the simulation starts
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("world dimensions must be positive (got {width}x{height})")]
    WorldSize { width: f32, height: f32 },
    #[error("boundary margin {margin} leaves no drivable width in a {width}-wide world")]
    BoundaryMargin { margin: f32, width: f32 },
    #[error("viewport height {viewport} must be positive and no taller than the world ({world})")]
    Viewport { viewport: f32, world: f32 },
    #[error("{kind} radius range {min}..{max} is invalid (min must be > 0 and <= max)")]
    HazardRadius {
        kind: &'static str,
        min: f32,
        max: f32,
    },
    #[error("placement margin {margin} leaves no room for hazards in a {height}-tall world")]
    PlacementMargin { margin: f32, height: f32 },
    #[error("invalid deep sand modifier: {0}")]
    SandModifier(&'static str),
    #[error("invalid vehicle tuning: {0}")]
    Vehicle(&'static str),
    #[error("invalid phase forcing: {0}")]
    Forcing(&'static str),
    #[error("camera overscan must be finite and non-negative (got {0})")]
    Overscan(f32),
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Named game variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Preset {
    /// Single-screen dune drawn with primitives
    Classic,
    /// Tall scrolling dune with a sprite car
    #[default]
    Dunes,
    /// Scrolling dune with rocks
    Expedition,
}

impl Preset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Classic => "Classic",
            Preset::Dunes => "Dunes",
            Preset::Expedition => "Expedition",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" => Some(Preset::Classic),
            "dunes" | "dune" => Some(Preset::Dunes),
            "expedition" | "rocks" => Some(Preset::Expedition),
            _ => None,
        }
    }

    /// Full config for this preset
    pub fn config(&self) -> DuneConfig {
        match self {
            Preset::Classic => DuneConfig {
                world: WorldConfig {
                    width: 800.0,
                    height: 600.0,
                    boundary_margin: 20.0,
                },
                vehicle: VehicleConfig {
                    body: BodyStyle::Primitive {
                        width: 24.0,
                        height: 40.0,
                    },
                    start_offset: 50.0,
                    ..VehicleConfig::default()
                },
                hazards: HazardConfig {
                    pit_count: 8,
                    pit_radius: RadiusRange::new(30.0, 60.0),
                    placement_margin: 100.0,
                    ripple_count: 40,
                    sand: SandModifiers {
                        hot_zone: 1.0,
                        max_speed_scale: 0.4,
                        friction_scale: 4.0,
                    },
                    ..HazardConfig::default()
                },
                phases: PhaseConfig::default(),
                camera: None,
            },
            Preset::Dunes => DuneConfig::default(),
            Preset::Expedition => DuneConfig {
                hazards: HazardConfig {
                    rock_count: 12,
                    ..HazardConfig::default()
                },
                ..DuneConfig::default()
            },
        }
    }
}

/// World bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub width: f32,
    pub height: f32,
    /// Closest the vehicle center may get to the left/right edge
    pub boundary_margin: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 4000.0,
            boundary_margin: 20.0,
        }
    }
}

/// How the car is drawn, which fixes its bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BodyStyle {
    /// Plain rectangle
    Primitive { width: f32, height: f32 },
    /// Frame from an 8-direction sprite sheet, scaled for drawing
    Sprite {
        frame_width: f32,
        frame_height: f32,
        draw_scale: f32,
    },
}

impl BodyStyle {
    /// Bounding (width, height) in world units
    pub fn size(&self) -> (f32, f32) {
        match *self {
            BodyStyle::Primitive { width, height } => (width, height),
            BodyStyle::Sprite {
                frame_width,
                frame_height,
                draw_scale,
            } => (frame_width * draw_scale, frame_height * draw_scale),
        }
    }
}

/// Nominal handling, in world units per tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleConfig {
    pub max_speed: f32,
    pub acceleration: f32,
    pub friction: f32,
    /// Radians per tick
    pub turn_speed: f32,
    /// Start height above the base of the dune
    pub start_offset: f32,
    pub body: BodyStyle,
}

impl Default for VehicleConfig {
    fn default() -> Self {
        Self {
            max_speed: 4.5,
            acceleration: 0.12,
            friction: 0.05,
            turn_speed: 0.05,
            start_offset: 100.0,
            body: BodyStyle::Sprite {
                frame_width: 128.0,
                frame_height: 128.0,
                draw_scale: 0.5,
            },
        }
    }
}

/// Half-open radius range used for uniform sampling
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadiusRange {
    pub min: f32,
    pub max: f32,
}

impl RadiusRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }
}

/// Handling changes while inside a deep sand pit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SandModifiers {
    /// Fraction of the drawn radius that bogs the car down
    pub hot_zone: f32,
    pub max_speed_scale: f32,
    pub friction_scale: f32,
}

impl Default for SandModifiers {
    fn default() -> Self {
        Self {
            hot_zone: 0.8,
            max_speed_scale: 0.35,
            friction_scale: 5.0,
        }
    }
}

/// World generation parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HazardConfig {
    pub pit_count: usize,
    pub pit_radius: RadiusRange,
    pub rock_count: usize,
    pub rock_radius: RadiusRange,
    /// Hazard-free band at the crest and the base
    pub placement_margin: f32,
    pub ripple_count: usize,
    pub sand: SandModifiers,
}

impl Default for HazardConfig {
    fn default() -> Self {
        Self {
            pit_count: 35,
            pit_radius: RadiusRange::new(40.0, 90.0),
            rock_count: 0,
            rock_radius: RadiusRange::new(15.0, 35.0),
            placement_margin: 200.0,
            ripple_count: 150,
            sand: SandModifiers::default(),
        }
    }
}

/// Per-tick vertical displacement for each face of the dune.
/// Positive values push toward the base (+y).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhaseConfig {
    pub climb_forcing: f32,
    pub descent_forcing: f32,
}

impl Default for PhaseConfig {
    fn default() -> Self {
        Self {
            climb_forcing: 1.5,
            descent_forcing: 2.5,
        }
    }
}

/// Scrolling camera
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub viewport_height: f32,
    /// How far past the crest/base the view may scroll
    pub overscan: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            viewport_height: 600.0,
            overscan: 50.0,
        }
    }
}

/// Complete game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DuneConfig {
    pub world: WorldConfig,
    pub vehicle: VehicleConfig,
    pub hazards: HazardConfig,
    pub phases: PhaseConfig,
    /// `None` for single-screen variants
    pub camera: Option<CameraConfig>,
}

impl Default for DuneConfig {
    fn default() -> Self {
        Self {
            world: WorldConfig::default(),
            vehicle: VehicleConfig::default(),
            hazards: HazardConfig::default(),
            phases: PhaseConfig::default(),
            camera: Some(CameraConfig::default()),
        }
    }
}

impl DuneConfig {
    /// Parse and validate a JSON config. Missing fields take the `dunes` defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject configs the simulation cannot run
    pub fn validate(&self) -> Result<(), ConfigError> {
        let world = &self.world;
        // Written as negations so NaN fails too
        if !(world.width > 0.0 && world.height > 0.0) {
            return Err(ConfigError::WorldSize {
                width: world.width,
                height: world.height,
            });
        }
        if !(world.boundary_margin >= 0.0 && world.boundary_margin * 2.0 < world.width) {
            return Err(ConfigError::BoundaryMargin {
                margin: world.boundary_margin,
                width: world.width,
            });
        }
        if let Some(camera) = &self.camera {
            if !(camera.viewport_height > 0.0 && camera.viewport_height <= world.height) {
                return Err(ConfigError::Viewport {
                    viewport: camera.viewport_height,
                    world: world.height,
                });
            }
            if !(camera.overscan.is_finite() && camera.overscan >= 0.0) {
                return Err(ConfigError::Overscan(camera.overscan));
            }
        }

        let phases = &self.phases;
        if !phases.climb_forcing.is_finite() {
            return Err(ConfigError::Forcing("climb_forcing must be finite"));
        }
        // The descent only ends by reaching the base
        if !(phases.descent_forcing.is_finite() && phases.descent_forcing > 0.0) {
            return Err(ConfigError::Forcing("descent_forcing must be finite and positive"));
        }

        let hazards = &self.hazards;
        check_radius("pit", hazards.pit_radius)?;
        if hazards.rock_count > 0 {
            check_radius("rock", hazards.rock_radius)?;
        }
        if !(hazards.placement_margin >= 0.0 && hazards.placement_margin * 2.0 < world.height) {
            return Err(ConfigError::PlacementMargin {
                margin: hazards.placement_margin,
                height: world.height,
            });
        }

        let sand = &hazards.sand;
        if !(sand.hot_zone > 0.0 && sand.hot_zone <= 1.0) {
            return Err(ConfigError::SandModifier("hot_zone must be in (0, 1]"));
        }
        if !(sand.max_speed_scale > 0.0 && sand.max_speed_scale <= 1.0) {
            return Err(ConfigError::SandModifier("max_speed_scale must be in (0, 1]"));
        }
        if !(sand.friction_scale >= 1.0) {
            return Err(ConfigError::SandModifier("friction_scale must be >= 1"));
        }

        let vehicle = &self.vehicle;
        if !(vehicle.max_speed > 0.0) {
            return Err(ConfigError::Vehicle("max_speed must be positive"));
        }
        if !(vehicle.acceleration > 0.0) {
            return Err(ConfigError::Vehicle("acceleration must be positive"));
        }
        if !(vehicle.friction > 0.0) {
            return Err(ConfigError::Vehicle("friction must be positive"));
        }
        if !(vehicle.turn_speed >= 0.0) {
            return Err(ConfigError::Vehicle("turn_speed must not be negative"));
        }
        if !(vehicle.start_offset >= 0.0 && vehicle.start_offset < world.height) {
            return Err(ConfigError::Vehicle("start_offset must lie inside the world"));
        }
        let (w, h) = vehicle.body.size();
        if !(w > 0.0 && h > 0.0) {
            return Err(ConfigError::Vehicle("body size must be positive"));
        }

        Ok(())
    }
}

fn check_radius(kind: &'static str, range: RadiusRange) -> Result<(), ConfigError> {
    if range.min > 0.0 && range.min <= range.max {
        Ok(())
    } else {
        Err(ConfigError::HazardRadius {
            kind,
            min: range.min,
            max: range.max,
        })
    }
}
