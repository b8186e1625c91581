//! Game Module - Pure DOP frame loop
//!
//! Owns a session's data and drives one frame at a time. Windowing and input
//! polling stay with the host; it fills a `FrameInput` and passes an upload
//! target for the mesh.

pub mod game_data;
pub mod game_operations;

pub use game_data::{FrameInput, FrameReport, GameState};
pub use game_operations::{create_game_state, run_frame};
