//! Core world data types and fundamental structures
//!
//! Block ids, positions, rays and the block registry. Everything else in the
//! crate is built on these.

mod block;
mod position;
mod ray;
mod registry;

pub use block::BlockId;
pub use position::VoxelPos;
pub use ray::{BlockFace, Ray, RaycastHit};
pub use registry::{load_block_definitions, BlockDefinition, BlockRegistry};
