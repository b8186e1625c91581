//! World Data Types - Pure DOP Structures
//!
//! These are the data structures that world_operations functions operate on.
//! The only methods here are constructors and raw index math.

use super::core::{BlockId, VoxelPos};
use super::error::{WorldError, WorldResult};

/// World data - a fixed-size dense grid of block ids
///
/// Storage is a flat array indexed x-major, then y, then z. Every coordinate
/// outside `[0, size)` on any axis reads as air.
#[derive(Clone, Debug)]
pub struct WorldData {
    /// Block IDs, `size_x * size_y * size_z` entries
    pub blocks: Vec<BlockId>,

    /// World size in voxels
    pub size_x: u32,
    pub size_y: u32,
    pub size_z: u32,

    /// World tick counter, stamped on every modification
    pub tick: u64,
}

impl WorldData {
    /// Create an all-air world
    pub fn new(size_x: u32, size_y: u32, size_z: u32) -> WorldResult<Self> {
        if size_x == 0 || size_y == 0 || size_z == 0 {
            return Err(WorldError::InvalidExtents {
                x: size_x,
                y: size_y,
                z: size_z,
            });
        }

        let total_blocks = size_x as usize * size_y as usize * size_z as usize;
        Ok(Self {
            blocks: vec![BlockId::AIR; total_blocks],
            size_x,
            size_y,
            size_z,
            tick: 0,
        })
    }

    /// Flat index of an in-bounds voxel, `None` outside the world
    pub fn index_of(&self, pos: VoxelPos) -> Option<usize> {
        if pos.x < 0
            || pos.y < 0
            || pos.z < 0
            || pos.x as u32 >= self.size_x
            || pos.y as u32 >= self.size_y
            || pos.z as u32 >= self.size_z
        {
            return None;
        }

        let (x, y, z) = (pos.x as usize, pos.y as usize, pos.z as usize);
        Some((x * self.size_y as usize + y) * self.size_z as usize + z)
    }
}
