//! World Error Handling
//!
//! Reads never fail (out-of-range is air). Only construction and writes do.

/// World-specific result type
pub type WorldResult<T> = Result<T, WorldError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    #[error("Voxel ({x}, {y}, {z}) is outside the world")]
    OutOfBounds { x: i32, y: i32, z: i32 },

    #[error("Invalid world extents {x}x{y}x{z}: every axis must be non-zero")]
    InvalidExtents { x: u32, y: u32, z: u32 },
}
