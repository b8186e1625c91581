//! Lighting Module - day/night sun orbit

pub mod lighting_data;
pub mod lighting_operations;

pub use lighting_data::{DayNightCycleData, LightingConfig};
pub use lighting_operations::{advance_cycle, create_day_night_cycle, sun_position};
