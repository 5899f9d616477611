//! Vehicle motion model
//!
//! Scalar speed along a heading, not a rigid body. One call to `advance`
//! moves the vehicle by exactly one tick.

use serde::{Deserialize, Serialize};

use super::state::Vehicle;
use super::tick::InputIntent;
use super::world::World;
use crate::config::DuneConfig;
use crate::consts::{MIN_STEER_SPEED, ROCK_NUDGE};
use crate::{heading_dir, normalize_angle};

/// Handling in effect for a single tick, after terrain modifiers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Handling {
    pub max_speed: f32,
    pub friction: f32,
    pub in_deep_sand: bool,
}

/// What the motion step ran into
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotionReport {
    pub handling: Handling,
    pub hit_rock: bool,
}

/// Advance the vehicle one tick.
///
/// Order is fixed: sand scan, rock collision, throttle/brake/friction,
/// speed clamp, steering, translation, lateral clamp.
pub fn advance(
    vehicle: &mut Vehicle,
    intent: &InputIntent,
    world: &World,
    config: &DuneConfig,
) -> MotionReport {
    let handling = scan_deep_sand(vehicle, world, config);
    let hit_rock = resolve_rock_collision(vehicle, world);

    integrate_speed(vehicle, intent, config.vehicle.acceleration, handling.friction);
    clamp_speed(vehicle, handling.max_speed);
    steer(vehicle, intent, config.vehicle.turn_speed);

    vehicle.pos += heading_dir(vehicle.heading) * vehicle.speed;

    let margin = config.world.boundary_margin;
    vehicle.pos.x = vehicle.pos.x.clamp(margin, config.world.width - margin);

    MotionReport { handling, hit_rock }
}

/// Handling for this tick.
///
/// Overlapping pits resolve to the strongest enclosing effect. Every pit in
/// a world carries the same modifiers, so being inside any pit is enough.
pub fn scan_deep_sand(vehicle: &Vehicle, world: &World, config: &DuneConfig) -> Handling {
    let sand = &config.hazards.sand;
    let in_deep_sand = world
        .pits
        .iter()
        .any(|pit| pit.within(vehicle.pos, pit.radius * sand.hot_zone));

    let nominal = &config.vehicle;
    if in_deep_sand {
        Handling {
            max_speed: nominal.max_speed * sand.max_speed_scale,
            friction: nominal.friction * sand.friction_scale,
            in_deep_sand,
        }
    } else {
        Handling {
            max_speed: nominal.max_speed,
            friction: nominal.friction,
            in_deep_sand,
        }
    }
}

/// Stop dead against a rock and back off along the heading so the car
/// doesn't stay wedged inside it. Returns true on a hit.
pub fn resolve_rock_collision(vehicle: &mut Vehicle, world: &World) -> bool {
    let reach = vehicle.width / 4.0;
    let hit = world
        .rocks
        .iter()
        .any(|rock| rock.within(vehicle.pos, rock.radius + reach));

    if hit {
        log::debug!(
            "Rock hit at ({:.1}, {:.1}), speed {:.2}",
            vehicle.pos.x,
            vehicle.pos.y,
            vehicle.speed
        );
        vehicle.speed = 0.0;
        vehicle.pos -= heading_dir(vehicle.heading) * ROCK_NUDGE;
    }
    hit
}

/// Throttle, brake/reverse, or coast. Exactly one applies per tick.
fn integrate_speed(vehicle: &mut Vehicle, intent: &InputIntent, acceleration: f32, friction: f32) {
    if intent.up {
        vehicle.speed += acceleration;
    } else if intent.down {
        vehicle.speed -= acceleration;
    } else {
        if vehicle.speed > 0.0 {
            vehicle.speed -= friction;
        } else if vehicle.speed < 0.0 {
            vehicle.speed += friction;
        }
        // Snap instead of creeping toward zero forever
        if vehicle.speed.abs() < friction {
            vehicle.speed = 0.0;
        }
    }
}

/// Reverse is capped at half the forward limit
fn clamp_speed(vehicle: &mut Vehicle, max_speed: f32) {
    vehicle.speed = vehicle.speed.clamp(-max_speed / 2.0, max_speed);
}

/// Left/right are mirrored in reverse so they match the direction of travel
fn steer(vehicle: &mut Vehicle, intent: &InputIntent, turn_speed: f32) {
    if vehicle.speed.abs() <= MIN_STEER_SPEED {
        return;
    }
    let steer_dir = vehicle.speed.signum();
    if intent.left {
        vehicle.heading -= turn_speed * steer_dir;
    }
    if intent.right {
        vehicle.heading += turn_speed * steer_dir;
    }
    vehicle.heading = normalize_angle(vehicle.heading);
}
