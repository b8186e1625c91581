//! Lighting Operations - Pure DOP Functions
//!
//! A single point light circling the world in the XY plane. The renderer
//! consumes the position; there is no light propagation.

use super::lighting_data::{DayNightCycleData, LightingConfig};
use crate::world::world_operations::world_extents;
use crate::world::WorldData;
use glam::Vec3;
use std::f32::consts::TAU;

/// Start a cycle at angle zero, orbiting the center of `world`
pub fn create_day_night_cycle(config: &LightingConfig, world: &WorldData) -> DayNightCycleData {
    let (size_x, size_y, size_z) = world_extents(world);
    let orbit_center = Vec3::new(size_x as f32, size_y as f32, size_z as f32) / 2.0;

    DayNightCycleData {
        elapsed_seconds: 0.0,
        orbit_center,
        orbit_radius: config.orbit_radius,
        cycle_duration: config.cycle_duration,
        sun_color: config.sun_color,
    }
}

/// Advance the clock, wrapping at the end of each revolution
pub fn advance_cycle(cycle: &mut DayNightCycleData, dt: f32) {
    if cycle.cycle_duration <= 0.0 {
        return;
    }
    cycle.elapsed_seconds = (cycle.elapsed_seconds + dt).rem_euclid(cycle.cycle_duration);
}

/// Sun position `elapsed_seconds` into the orbit
///
/// Angle zero puts the sun level with the center on +X; a quarter cycle
/// later it is directly overhead.
pub fn sun_position(cycle: &DayNightCycleData, elapsed_seconds: f32) -> Vec3 {
    let angle = if cycle.cycle_duration > 0.0 {
        (elapsed_seconds / cycle.cycle_duration) * TAU
    } else {
        0.0
    };

    cycle.orbit_center + Vec3::new(angle.cos(), angle.sin(), 0.0) * cycle.orbit_radius
}
