//! Interaction Module - block targeting from the player's view ray

pub mod interaction_data;
pub mod interaction_operations;

pub use interaction_data::{ClickAction, InteractionOutcome, InteractionState, PlacementRejection};
pub use interaction_operations::{click_ray, cycle_selected_block, handle_click};
