//! Interaction Data - Pure DOP
//!
//! NO METHODS beyond construction and queries on outcomes.
//! All transformations happen in interaction_operations.rs

use crate::world::{BlockId, VoxelPos};
use std::fmt;

/// What a click asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    /// Remove the targeted block
    Destroy,
    /// Put the selected block in front of the targeted one
    Place,
    /// Copy the targeted block into the selection
    Pick,
}

/// Player-side interaction state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteractionState {
    /// Block written by `ClickAction::Place`
    pub selected_block: BlockId,
}

impl InteractionState {
    pub fn new(selected_block: BlockId) -> Self {
        Self { selected_block }
    }
}

/// Why a placement was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementRejection {
    /// The placement voxel already holds a block
    Occupied(BlockId),
    /// The ray entered the world from outside, so there is no voxel in front
    OutsideWorld,
    /// The new block would overlap the player's box
    OverlapsOccupant,
}

impl fmt::Display for PlacementRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementRejection::Occupied(block) => write!(f, "spot already holds {}", block),
            PlacementRejection::OutsideWorld => write!(f, "spot is outside the world"),
            PlacementRejection::OverlapsOccupant => write!(f, "spot overlaps the player"),
        }
    }
}

/// Result of one click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionOutcome {
    /// The ray hit nothing within reach
    NoTarget,
    Destroyed {
        position: VoxelPos,
        previous: BlockId,
    },
    Placed {
        position: VoxelPos,
        block: BlockId,
    },
    PlacementBlocked {
        position: VoxelPos,
        reason: PlacementRejection,
    },
    Picked {
        block: BlockId,
    },
}

impl InteractionOutcome {
    /// The grid was modified and the mesh must be rebuilt
    pub fn world_changed(&self) -> bool {
        matches!(
            self,
            InteractionOutcome::Destroyed { .. } | InteractionOutcome::Placed { .. }
        )
    }
}
