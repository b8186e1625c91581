use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a block type
///
/// The grid stores these directly. Ids are not validated against the
/// registry; an unknown id behaves as a non-opaque block with texture 0.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    bytemuck::Pod,
    bytemuck::Zeroable,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct BlockId(pub u16);

impl Default for BlockId {
    fn default() -> Self {
        BlockId::AIR
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            BlockId::AIR => write!(f, "Air"),
            _ => write!(f, "Block({})", self.0),
        }
    }
}

impl BlockId {
    /// Empty space. Always registered, never opaque.
    pub const AIR: BlockId = BlockId(0);

    /// Create a new BlockId from a raw u16 value
    pub const fn new(id: u16) -> Self {
        BlockId(id)
    }

    pub const fn is_air(self) -> bool {
        self.0 == 0
    }

    /// Block id as carried in the vertex stream
    pub fn as_vertex_scalar(self) -> f32 {
        self.0 as f32
    }
}
