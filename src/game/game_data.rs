//! Game Data - Pure DOP
//!
//! Everything one running session owns, plus the per-frame input and report.
//! All transformations happen in game_operations.rs

use crate::config::EngineConfig;
use crate::interaction::{ClickAction, InteractionOutcome, InteractionState};
use crate::lighting::DayNightCycleData;
use crate::physics::{DynamicEntityData, MovementInput};
use crate::renderer::MeshData;
use crate::world::{BlockRegistry, WorldData};
use glam::Vec3;

/// One running session
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: EngineConfig,
    pub world: WorldData,
    pub registry: BlockRegistry,
    pub player: DynamicEntityData,
    pub interaction: InteractionState,
    pub day_night: DayNightCycleData,
    /// Mesh last handed to the upload target
    pub mesh: MeshData,
    /// Frames run so far
    pub tick: u64,
}

/// Input for one frame, already mapped from devices
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    pub movement: MovementInput,
    /// Camera forward vector; the click ray starts at the eye
    pub look_direction: Vec3,
    pub click: Option<ClickAction>,
    /// Steps through the registered blocks; 0 leaves the selection alone
    pub cycle_selection: i32,
}

/// What happened during a frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    pub tick: u64,
    pub jumped: bool,
    pub interaction: Option<InteractionOutcome>,
    /// The mesh was rebuilt and uploaded this frame
    pub mesh_uploaded: bool,
    pub vertex_count: usize,
    pub player_position: Vec3,
    pub grounded: bool,
    pub sun_position: Vec3,
}
