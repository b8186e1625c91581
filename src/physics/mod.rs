//! Physics Module - player body against the voxel grid
//!
//! Data lives in entity_data.rs, transformations in the *_operations modules.

pub mod aabb;
pub mod collision_operations;
pub mod entity_data;
pub mod physics_operations;

pub use aabb::AABB;
pub use collision_operations::resolve_collision;
pub use entity_data::{CollisionResult, DynamicEntityData, MovementInput, PhysicsConfig};
pub use physics_operations::{
    apply_movement_input, create_player_entity, eye_position, step_physics, try_jump,
};
