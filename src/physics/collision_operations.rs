//! Collision Operations - Pure DOP Functions
//!
//! Entity box against the voxel grid. Each overlapping opaque voxel pushes
//! the entity out along its shallowest axis, one voxel at a time in
//! enumeration order. There is no simultaneous solve, so corner contacts
//! depend on that order.

use super::aabb::{aabb_from_center_half_extents, aabb_voxel_range};
use super::entity_data::CollisionResult;
use crate::constants::core::HALF_BLOCK;
use crate::constants::physics::GROUND_TOLERANCE;
use crate::world::world_operations::is_opaque;
use crate::world::{BlockRegistry, VoxelPos, WorldData};
use glam::Vec3;

/// Move the box by `velocity * dt` and push it out of every opaque voxel
///
/// Candidates are visited x outer, y middle, z inner. A correction zeroes the
/// velocity on its axis. `grounded` is set when an upward correction put the
/// box on top of a voxel and nothing later moved it off that surface.
pub fn resolve_collision(
    position: Vec3,
    velocity: Vec3,
    half_extents: Vec3,
    dt: f32,
    world: &WorldData,
    registry: &BlockRegistry,
) -> CollisionResult {
    let mut new_position = position + velocity * dt;
    let mut new_velocity = velocity;
    let mut support_top: Option<f32> = None;

    let swept = aabb_from_center_half_extents(new_position, half_extents);
    let (min_voxel, max_voxel) = aabb_voxel_range(&swept);
    let resting = half_extents + Vec3::splat(HALF_BLOCK);

    for x in min_voxel.x..=max_voxel.x {
        for y in min_voxel.y..=max_voxel.y {
            for z in min_voxel.z..=max_voxel.z {
                let voxel = VoxelPos::new(x, y, z);
                if !is_opaque(world, registry, voxel) {
                    continue;
                }

                let center = voxel.as_vec3();
                let distance = new_position - center;
                let penetration = distance.abs() - resting;
                if !(penetration.x < 0.0 && penetration.y < 0.0 && penetration.z < 0.0) {
                    continue;
                }

                let axis = select_resolution_axis(penetration);
                // Exactly centered pushes toward negative
                let sign = if distance[axis] > 0.0 { 1.0 } else { -1.0 };
                new_position[axis] = center[axis] + sign * resting[axis];
                new_velocity[axis] = 0.0;

                if axis == 1 && sign > 0.0 {
                    support_top = Some(center.y + HALF_BLOCK);
                }

                log::debug!(
                    "[resolve_collision] Pushed out of {} along axis {} by {:.4}",
                    voxel,
                    axis,
                    -penetration[axis]
                );
            }
        }
    }

    let grounded = support_top.map_or(false, |top| {
        ((new_position.y - half_extents.y) - top).abs() <= GROUND_TOLERANCE
    });

    CollisionResult {
        position: new_position,
        velocity: new_velocity,
        grounded,
    }
}

/// Axis of least penetration; penetrations are negative, so the largest wins
///
/// X only when it strictly exceeds both others, then Y when it strictly
/// exceeds Z, otherwise Z.
fn select_resolution_axis(penetration: Vec3) -> usize {
    if penetration.x > penetration.y && penetration.x > penetration.z {
        0
    } else if penetration.y > penetration.z {
        1
    } else {
        2
    }
}
