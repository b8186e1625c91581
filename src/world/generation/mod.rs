//! Flat terrain seeding
//!
//! The world is a single dense block, so generation is one pass over its
//! columns: solid ground up to `ground_height`, then a one-voxel surface layer.

use super::core::{BlockId, VoxelPos};
use super::data_types::WorldData;
use super::world_operations::{fill_region, world_extents};
use serde::Deserialize;

/// Layer layout for a flat world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// Highest ground layer (inclusive); layers `0..=ground_height` are ground
    pub ground_height: u32,
    pub ground_block: BlockId,
    /// Single layer placed at `ground_height + 1`; air skips it
    pub surface_block: BlockId,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            ground_height: 4,
            ground_block: BlockId(1135),
            surface_block: BlockId(1139),
        }
    }
}

/// Seed a flat world, overwriting every column
///
/// Layers that fall outside the world are clipped. Returns the number of
/// voxels written.
pub fn seed_flat_world(world: &mut WorldData, terrain: &TerrainConfig) -> usize {
    let (size_x, _, size_z) = world_extents(world);
    let max_x = size_x as i32 - 1;
    let max_z = size_z as i32 - 1;
    let ground_top = terrain.ground_height as i32;

    let mut written = fill_region(
        world,
        VoxelPos::new(0, 0, 0),
        VoxelPos::new(max_x, ground_top, max_z),
        terrain.ground_block,
    );

    if !terrain.surface_block.is_air() {
        written += fill_region(
            world,
            VoxelPos::new(0, ground_top + 1, 0),
            VoxelPos::new(max_x, ground_top + 1, max_z),
            terrain.surface_block,
        );
    }

    log::info!(
        "[seed_flat_world] Seeded {} voxels: ground {} in layers 0..={}, surface {}",
        written,
        terrain.ground_block,
        terrain.ground_height,
        terrain.surface_block
    );
    written
}
