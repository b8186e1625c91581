//! Error handling for Terraris Engine
//!
//! The simulation hot path (meshing, raycasting, collision) never fails:
//! out-of-range queries degrade to air. Only the edges of the crate return
//! errors: configuration, block definition loading, world construction and
//! out-of-range writes.

use crate::world::error::WorldError;

/// Main error type for Terraris Engine
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Invalid config: {field} = {value} ({reason})")]
    InvalidConfig {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error for {path}: {error}")]
    IoError { path: String, error: String },

    #[error("Deserialization error in {context}: {error}")]
    DeserializationError { context: String, error: String },

    #[error("World error: {0}")]
    World(#[from] WorldError),
}

/// Type alias for Results in Terraris Engine
pub type EngineResult<T> = Result<T, EngineError>;
