// Terraris Engine - Data-Oriented Programming (DOP) Architecture
//
// Data lives in plain structs (*_data modules); behavior lives in pure
// functions (*_operations modules) that take that data by reference.
//
// For new code, prefer:
// - world_operations for world reads, writes and raycasting
// - mesh_operations for rebuilding the render mesh
// - physics_operations for stepping the player
// - Pure functions over methods

// Constants module
pub mod constants;

// Core engine modules
pub mod config;
pub mod error;

// Essential systems
pub mod game;
pub mod interaction;
pub mod lighting;
pub mod physics;
pub mod renderer;
// World module - dense voxel grid
pub mod world;

pub use config::{load_config, EngineConfig, InteractionConfig, WorldConfig};
pub use error::{EngineError, EngineResult};
pub use game::{create_game_state, run_frame, FrameInput, FrameReport, GameState};
pub use interaction::{ClickAction, InteractionOutcome, InteractionState};
pub use lighting::{sun_position, DayNightCycleData, LightingConfig};
pub use physics::{DynamicEntityData, MovementInput, PhysicsConfig, AABB};
pub use renderer::{
    generate_mesh, CpuVertexBuffer, MeshData, MeshUploadTarget, Vertex, VERTEX_LAYOUT,
};
// === Core World Types ===
pub use world::{
    load_block_definitions, BlockDefinition, BlockFace, BlockId, BlockRegistry, Ray, RaycastHit,
    VoxelPos, WorldData, WorldError,
};
