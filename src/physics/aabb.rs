//! Data-Oriented Axis-Aligned Bounding Box System
//!
//! Pure functions for collision detection - no methods, just data transformations.

use crate::constants::core::HALF_BLOCK;
use crate::world::VoxelPos;
use glam::Vec3;

/// Axis-Aligned Bounding Box - pure data structure
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    pub min: Vec3,
    pub max: Vec3,
}

/// Create AABB from center point and half extents
pub fn aabb_from_center_half_extents(center: Vec3, half_extents: Vec3) -> AABB {
    AABB {
        min: center - half_extents,
        max: center + half_extents,
    }
}

/// Box occupied by a voxel; it coincides with the rendered cube, centered on
/// the integer coordinate
pub fn voxel_aabb(pos: VoxelPos) -> AABB {
    aabb_from_center_half_extents(pos.as_vec3(), Vec3::splat(HALF_BLOCK))
}

/// Test if two AABBs overlap with positive volume
///
/// Boxes that only share a face do not intersect, so an entity standing on a
/// block does not count as inside it.
pub fn aabb_intersects(aabb1: &AABB, aabb2: &AABB) -> bool {
    aabb1.min.x < aabb2.max.x
        && aabb1.max.x > aabb2.min.x
        && aabb1.min.y < aabb2.max.y
        && aabb1.max.y > aabb2.min.y
        && aabb1.min.z < aabb2.max.z
        && aabb1.max.z > aabb2.min.z
}

/// Inclusive range of voxels whose cubes could overlap the box
pub fn aabb_voxel_range(aabb: &AABB) -> (VoxelPos, VoxelPos) {
    let offset = Vec3::splat(HALF_BLOCK);
    (
        VoxelPos::containing(aabb.min + offset),
        VoxelPos::containing(aabb.max + offset),
    )
}
