//! Physics Operations - Pure DOP Functions
//!
//! Per-tick stepping of the player entity: intent, jump, gravity, collision
//! and ground friction.

use super::collision_operations::resolve_collision;
use super::entity_data::{DynamicEntityData, MovementInput, PhysicsConfig};
use crate::world::{BlockRegistry, WorldData};
use glam::{Vec2, Vec3};

/// Spawn an entity at the configured spawn point with the standing box
pub fn create_player_entity(config: &PhysicsConfig) -> DynamicEntityData {
    DynamicEntityData::new(config.spawn_position, config.standing_size)
}

/// Advance the entity by one tick
///
/// Gravity is integrated before collision, so an entity at rest is pushed
/// back onto its block every tick and stays grounded.
pub fn step_physics(
    entity: &mut DynamicEntityData,
    dt: f32,
    world: &WorldData,
    registry: &BlockRegistry,
    config: &PhysicsConfig,
) {
    entity.grounded = false;
    entity.velocity.y += config.gravity * dt;

    let result = resolve_collision(
        entity.position,
        entity.velocity,
        entity.half_extents,
        dt,
        world,
        registry,
    );
    entity.position = result.position;
    entity.velocity = result.velocity;
    entity.grounded = result.grounded;

    if entity.grounded {
        entity.velocity.x *= config.damping_factor;
        entity.velocity.z *= config.damping_factor;

        let horizontal = Vec2::new(entity.velocity.x, entity.velocity.z);
        if horizontal.length() < config.stop_speed_threshold {
            entity.velocity.x = 0.0;
            entity.velocity.z = 0.0;
        }
    }
}

/// Apply the jump impulse if the entity stands on something
///
/// # Returns
/// true if the jump happened
pub fn try_jump(entity: &mut DynamicEntityData, config: &PhysicsConfig) -> bool {
    if !entity.grounded {
        return false;
    }

    entity.velocity.y = config.jump_velocity;
    entity.grounded = false;
    log::debug!("[try_jump] Jumped from {:?}", entity.position);
    true
}

/// Replace horizontal velocity with this frame's movement intent
///
/// Sneaking overrides sprint. The box is resized only when the stance
/// changes, and keeps its center when it does.
pub fn apply_movement_input(
    entity: &mut DynamicEntityData,
    input: &MovementInput,
    config: &PhysicsConfig,
) {
    if entity.sneaking != input.sneak {
        let size = if input.sneak {
            config.sneaking_size
        } else {
            config.standing_size
        };
        entity.sneaking = input.sneak;
        entity.half_extents = size * 0.5;
        log::debug!(
            "[apply_movement_input] Sneaking {} at {:?}, box {:?}",
            entity.sneaking,
            entity.position,
            size
        );
    }

    let speed = if input.sneak {
        config.sneak_speed
    } else if input.sprint {
        config.sprint_speed
    } else {
        config.walk_speed
    };
    entity.velocity.x = input.wish_direction.x * speed;
    entity.velocity.z = input.wish_direction.y * speed;
}

/// Camera anchor; the vertical offset scales with the current box height
pub fn eye_position(entity: &DynamicEntityData, config: &PhysicsConfig) -> Vec3 {
    let height_ratio = if config.standing_size.y > 0.0 {
        (entity.half_extents.y * 2.0) / config.standing_size.y
    } else {
        1.0
    };

    entity.position
        + Vec3::new(
            config.eye_offset.x,
            config.eye_offset.y * height_ratio,
            config.eye_offset.z,
        )
}
