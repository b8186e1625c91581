//! Lighting Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in lighting_operations.rs

use crate::constants::lighting;
use glam::Vec3;
use serde::Deserialize;

/// Sun orbit parameters, loaded as the `[lighting]` config section
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct LightingConfig {
    pub orbit_radius: f32,
    /// Seconds per full revolution
    pub cycle_duration: f32,
    pub sun_color: Vec3,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            orbit_radius: lighting::LIGHT_ORBIT_RADIUS,
            cycle_duration: lighting::LIGHT_CYCLE_DURATION,
            sun_color: Vec3::from_array(lighting::SUN_COLOR),
        }
    }
}

/// Running day/night state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayNightCycleData {
    /// Seconds into the current revolution, always in `[0, cycle_duration)`
    pub elapsed_seconds: f32,
    /// Point the sun orbits, the center of the world
    pub orbit_center: Vec3,
    pub orbit_radius: f32,
    pub cycle_duration: f32,
    pub sun_color: Vec3,
}
