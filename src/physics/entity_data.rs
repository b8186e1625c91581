//! Physics Entity Data - Pure DOP
//!
//! NO METHODS beyond construction. Stepping happens in physics_operations.rs

use crate::constants::physics;
use glam::{Vec2, Vec3};
use serde::Deserialize;

/// The single simulated body: an axis-aligned box with velocity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DynamicEntityData {
    /// Box center
    pub position: Vec3,
    pub velocity: Vec3,
    pub half_extents: Vec3,
    /// Resting on a block after the last step
    pub grounded: bool,
    pub sneaking: bool,
}

impl DynamicEntityData {
    /// Entity at rest with the given full box size
    pub fn new(position: Vec3, size: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            half_extents: size * 0.5,
            grounded: false,
            sneaking: false,
        }
    }
}

/// Result of one collision pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResult {
    pub position: Vec3,
    pub velocity: Vec3,
    pub grounded: bool,
}

/// Movement intent for one frame, already resolved from keys and camera yaw
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MovementInput {
    /// Desired horizontal direction on the XZ plane (x, z); magnitude is honored
    pub wish_direction: Vec2,
    pub sprint: bool,
    pub sneak: bool,
    pub jump: bool,
}

/// Tunable player physics, loaded as the `[physics]` config section
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravity: f32,
    pub jump_velocity: f32,
    /// Horizontal velocity multiplier per grounded tick
    pub damping_factor: f32,
    pub stop_speed_threshold: f32,
    pub walk_speed: f32,
    pub sprint_speed: f32,
    pub sneak_speed: f32,
    /// Full box size while standing
    pub standing_size: Vec3,
    /// Full box size while sneaking
    pub sneaking_size: Vec3,
    pub spawn_position: Vec3,
    /// Camera anchor relative to the box center while standing
    pub eye_offset: Vec3,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: physics::GRAVITY,
            jump_velocity: physics::JUMP_VELOCITY,
            damping_factor: physics::GROUND_DAMPING,
            stop_speed_threshold: physics::STOP_SPEED_THRESHOLD,
            walk_speed: physics::WALK_SPEED,
            sprint_speed: physics::SPRINT_SPEED,
            sneak_speed: physics::SNEAK_SPEED,
            standing_size: Vec3::from_array(physics::STANDING_SIZE),
            sneaking_size: Vec3::from_array(physics::SNEAKING_SIZE),
            spawn_position: Vec3::from_array(physics::SPAWN_POSITION),
            eye_offset: Vec3::from_array(physics::EYE_OFFSET),
        }
    }
}
