//! World Operations - Pure DOP Functions
//!
//! This is the PUBLIC API for world manipulation.
//! Reads never fail: anything outside the world is air and non-opaque,
//! because edge traversal is routine for meshing, collision and raycasting.

use super::core::{BlockFace, BlockId, BlockRegistry, Ray, RaycastHit, VoxelPos};
use super::data_types::WorldData;
use super::error::{WorldError, WorldResult};
use crate::constants::interaction::DDA_TIE_EPSILON;
use glam::{IVec3, Vec3};

// ============================================================================
// BLOCK OPERATIONS
// ============================================================================

/// Check whether a voxel lies inside the world extents
pub fn is_in_bounds(world: &WorldData, pos: VoxelPos) -> bool {
    world.index_of(pos).is_some()
}

/// Get block at position
///
/// # Returns
/// BlockId at that position, or AIR if out of bounds
pub fn get_block(world: &WorldData, pos: VoxelPos) -> BlockId {
    match world.index_of(pos) {
        Some(index) => world.blocks[index],
        None => BlockId::AIR,
    }
}

/// Whether the voxel blocks sight and movement
///
/// Out of bounds and unregistered ids are never opaque.
pub fn is_opaque(world: &WorldData, registry: &BlockRegistry, pos: VoxelPos) -> bool {
    match world.index_of(pos) {
        Some(index) => registry.is_opaque(world.blocks[index]),
        None => false,
    }
}

/// Set block at position
///
/// Callers validate bounds first; an out-of-range write is rejected and the
/// grid is left untouched. Remeshing is the caller's job.
pub fn set_block(
    world: &mut WorldData,
    pos: VoxelPos,
    block_id: BlockId,
) -> WorldResult<WorldModification> {
    let index = world.index_of(pos).ok_or(WorldError::OutOfBounds {
        x: pos.x,
        y: pos.y,
        z: pos.z,
    })?;

    let old_block = world.blocks[index];
    world.blocks[index] = block_id;

    Ok(WorldModification {
        position: pos,
        old_block,
        new_block: block_id,
        timestamp: world.tick,
    })
}

/// World modification record
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorldModification {
    pub position: VoxelPos,
    pub old_block: BlockId,
    pub new_block: BlockId,
    pub timestamp: u64,
}

/// Fill the inclusive box `min..=max`, clipped to the world
///
/// # Returns
/// Number of voxels written
pub fn fill_region(world: &mut WorldData, min: VoxelPos, max: VoxelPos, block_id: BlockId) -> usize {
    let lo = IVec3::from(min).max(IVec3::ZERO);
    let hi = IVec3::from(max).min(IVec3::new(
        world.size_x as i32 - 1,
        world.size_y as i32 - 1,
        world.size_z as i32 - 1,
    ));

    let mut written = 0;
    for x in lo.x..=hi.x {
        for y in lo.y..=hi.y {
            for z in lo.z..=hi.z {
                if let Some(index) = world.index_of(VoxelPos::new(x, y, z)) {
                    world.blocks[index] = block_id;
                    written += 1;
                }
            }
        }
    }
    written
}

// ============================================================================
// WORLD INFO
// ============================================================================

/// World size in voxels
pub fn world_extents(world: &WorldData) -> (u32, u32, u32) {
    (world.size_x, world.size_y, world.size_z)
}

/// Number of voxels that hold anything other than air
pub fn count_non_air(world: &WorldData) -> usize {
    world.blocks.iter().filter(|b| !b.is_air()).count()
}

/// Log world statistics
pub fn log_world_stats(world: &WorldData) {
    log::info!(
        "[log_world_stats] World {}x{}x{}: {} non-air voxels of {}, tick {}",
        world.size_x,
        world.size_y,
        world.size_z,
        count_non_air(world),
        world.blocks.len(),
        world.tick
    );
}

// ============================================================================
// RAYCASTING
// ============================================================================

/// Raycast through world to find the first non-empty voxel
///
/// Grid (DDA) traversal: the ray steps one boundary crossing at a time, so
/// every voxel it passes through is visited exactly once. The voxel
/// containing the origin is never reported; a ray starting inside a block
/// only hits what it enters afterwards.
///
/// # Arguments
/// * `world` - World data to raycast through
/// * `ray` - Ray to cast (origin + normalized direction)
/// * `max_distance` - Maximum distance to check
///
/// # Returns
/// Some(RaycastHit) if hit, None if no hit
pub fn raycast(world: &WorldData, ray: Ray, max_distance: f32) -> Option<RaycastHit> {
    if ray.direction == Vec3::ZERO {
        log::debug!("[raycast] Zero direction, nothing to hit");
        return None;
    }

    let origin = ray.origin;
    let direction = ray.direction;
    let mut voxel = origin.floor().as_ivec3();

    // Axes the ray does not move along keep infinite distances and are never selected
    let mut step = IVec3::ZERO;
    let mut t_delta = Vec3::splat(f32::INFINITY);
    let mut t_max = Vec3::splat(f32::INFINITY);

    for axis in 0..3 {
        let d = direction[axis];
        if d == 0.0 {
            continue;
        }

        t_delta[axis] = 1.0 / d.abs();
        if d > 0.0 {
            step[axis] = 1;
            t_max[axis] = (voxel[axis] as f32 + 1.0 - origin[axis]) * t_delta[axis];
        } else {
            step[axis] = -1;
            t_max[axis] = (origin[axis] - voxel[axis] as f32) * t_delta[axis];
        }
    }

    let mut traveled = 0.0;
    while traveled < max_distance {
        let axis = select_crossing_axis(t_max);
        traveled = t_max[axis];

        let placement = VoxelPos::from(voxel);
        // Origins far outside saturate to the i32 range; overflow means leaving the world
        let Some(next) = voxel[axis].checked_add(step[axis]) else {
            break;
        };
        voxel[axis] = next;
        t_max[axis] += t_delta[axis];

        let target = VoxelPos::from(voxel);
        if !is_in_bounds(world, target) || traveled >= max_distance {
            break;
        }

        let block = get_block(world, target);
        if !block.is_air() {
            let hit = RaycastHit {
                target,
                placement,
                block,
                distance: traveled,
                face: BlockFace::entered_through(axis, step[axis]),
            };
            log::debug!(
                "[raycast] Hit {} at {} (place at {}) after {:.3}",
                block,
                target,
                placement,
                traveled
            );
            return Some(hit);
        }
    }

    log::debug!("[raycast] No block within {} units", max_distance);
    None
}

/// Pick the axis whose boundary the ray crosses next
///
/// Crossings within `DDA_TIE_EPSILON` of each other count as simultaneous and
/// resolve X, then Y, then Z.
fn select_crossing_axis(t_max: Vec3) -> usize {
    if t_max.x <= t_max.y + DDA_TIE_EPSILON && t_max.x <= t_max.z + DDA_TIE_EPSILON {
        0
    } else if t_max.y <= t_max.z + DDA_TIE_EPSILON {
        1
    } else {
        2
    }
}
