//! World Module
//!
//! A fixed-size dense voxel grid and the pure functions that read and write
//! it.
//!
//! # Architecture Overview
//!
//! - **Core**: Fundamental data types (BlockId, VoxelPos, Ray, BlockRegistry)
//! - **Data types**: `WorldData`, the flat block array
//! - **Operations**: point queries, writes and DDA raycasting
//! - **Generation**: flat terrain seeding
//!
//! Everything outside the grid reads as air, so callers never need to
//! bounds-check before querying.

pub mod core;
pub mod data_types;
pub mod error;
pub mod generation;
pub mod world_operations;

// Re-export core types for convenience
pub use core::{
    load_block_definitions, BlockDefinition, BlockFace, BlockId, BlockRegistry, Ray, RaycastHit,
    VoxelPos,
};
pub use data_types::WorldData;
pub use error::{WorldError, WorldResult};
pub use generation::{seed_flat_world, TerrainConfig};

// Re-export DOP world operations as the primary API
pub use world_operations::{
    count_non_air, fill_region, get_block, is_in_bounds, is_opaque, log_world_stats, raycast,
    set_block, world_extents, WorldModification,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_id_constants() {
        assert_eq!(BlockId::AIR, BlockId(0));
        assert!(BlockId::default().is_air());
    }

    #[test]
    fn test_world_extents_report_construction_size() {
        let world = WorldData::new(5, 3, 7).unwrap();
        assert_eq!(world_extents(&world), (5, 3, 7));
        assert_eq!(world.blocks.len(), 105);
        assert_eq!(count_non_air(&world), 0);
    }
}
