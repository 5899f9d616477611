//! Dune terrain: deep sand pits, rocks and wind ripples
//!
//! Generated once per run from the config and a seeded RNG, then read-only.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, DuneConfig, RadiusRange};

/// Circular hazard (deep sand pit or rock)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HazardZone {
    pub center: Vec2,
    pub radius: f32,
}

impl HazardZone {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// True if `p` lies strictly within `reach` of the center
    #[inline]
    pub fn within(&self, p: Vec2, reach: f32) -> bool {
        self.center.distance_squared(p) < reach * reach
    }
}

/// Cosmetic wind ripple, drawn as a shallow curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ripple {
    /// Left end of the curve
    pub pos: Vec2,
    pub width: f32,
    /// Vertical bulge of the curve midpoint
    pub curve_offset: f32,
}

/// Static terrain for one run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct World {
    pub pits: Vec<HazardZone>,
    pub rocks: Vec<HazardZone>,
    pub ripples: Vec<Ripple>,
}

impl World {
    /// Scatter hazards and ripples uniformly over the dune.
    ///
    /// Hazards stay out of the `placement_margin` band at the crest and the
    /// base so the start and the finish are always clear.
    pub fn generate<R: Rng>(config: &DuneConfig, rng: &mut R) -> Result<Self, ConfigError> {
        config.validate()?;

        let width = config.world.width;
        let height = config.world.height;
        let hazards = &config.hazards;
        let band = hazards.placement_margin..height - hazards.placement_margin;

        let mut scatter = |count: usize, radius: RadiusRange| -> Vec<HazardZone> {
            (0..count)
                .map(|_| {
                    let center = Vec2::new(
                        rng.random_range(0.0..width),
                        rng.random_range(band.clone()),
                    );
                    HazardZone::new(center, sample_radius(&mut *rng, radius))
                })
                .collect()
        };

        let pits = scatter(hazards.pit_count, hazards.pit_radius);
        let rocks = scatter(hazards.rock_count, hazards.rock_radius);

        let ripples: Vec<Ripple> = (0..hazards.ripple_count)
            .map(|_| Ripple {
                pos: Vec2::new(rng.random_range(0.0..width), rng.random_range(0.0..height)),
                width: rng.random_range(100.0..300.0),
                curve_offset: rng.random_range(-30.0..30.0),
            })
            .collect();

        log::debug!(
            "Generated world: {} pits, {} rocks, {} ripples",
            pits.len(),
            rocks.len(),
            ripples.len()
        );

        Ok(Self {
            pits,
            rocks,
            ripples,
        })
    }
}

/// Uniform radius; a degenerate range yields its single value
fn sample_radius<R: Rng>(rng: &mut R, range: RadiusRange) -> f32 {
    if range.min < range.max {
        rng.random_range(range.min..range.max)
    } else {
        range.min
    }
}
