//! Engine configuration
//!
//! Every section deserializes with defaults, so a TOML file only needs the
//! keys it changes. `validate()` runs before anything is built from a config.

use crate::constants::{core, interaction};
use crate::error::{EngineError, EngineResult};
use crate::lighting::LightingConfig;
use crate::physics::PhysicsConfig;
use crate::world::generation::TerrainConfig;
use crate::world::BlockId;
use glam::Vec3;
use serde::Deserialize;
use std::path::Path;

/// World extents, terrain and block definitions
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub size_x: u32,
    pub size_y: u32,
    pub size_z: u32,
    pub terrain: TerrainConfig,
    /// Block definition JSON; when absent the caller supplies a registry
    pub block_definitions: Option<String>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            size_x: core::WORLD_SIZE_X,
            size_y: core::WORLD_SIZE_Y,
            size_z: core::WORLD_SIZE_Z,
            terrain: TerrainConfig::default(),
            block_definitions: None,
        }
    }
}

/// Block targeting
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Maximum raycast distance for clicks
    pub max_reach: f32,
    /// Block selected for placement at startup
    pub initial_block: BlockId,
    /// Distance the click ray origin moves along the look direction from the eye
    pub ray_forward_offset: f32,
    /// World-space shift of the click ray origin
    pub ray_origin_shift: Vec3,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            max_reach: interaction::MAX_REACH,
            initial_block: BlockId(1135),
            ray_forward_offset: interaction::RAY_FORWARD_OFFSET,
            ray_origin_shift: Vec3::from_array(interaction::RAY_ORIGIN_SHIFT),
        }
    }
}

/// Main engine configuration
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub world: WorldConfig,
    pub physics: PhysicsConfig,
    pub interaction: InteractionConfig,
    pub lighting: LightingConfig,
}

fn invalid(field: &str, value: impl ToString, reason: &str) -> EngineError {
    EngineError::InvalidConfig {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn positive_size(field: &str, size: Vec3) -> EngineResult<()> {
    if size.cmpgt(Vec3::ZERO).all() && size.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, format!("{:?}", size), "every axis must be positive"))
    }
}

impl EngineConfig {
    /// Parse a TOML document; missing keys take their defaults
    pub fn from_toml_str(source: &str) -> EngineResult<Self> {
        toml::from_str(source).map_err(|e| EngineError::DeserializationError {
            context: "engine config".to_string(),
            error: e.to_string(),
        })
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> EngineResult<()> {
        let world = &self.world;
        if world.size_x == 0 || world.size_y == 0 || world.size_z == 0 {
            return Err(invalid(
                "world.size",
                format!("{}x{}x{}", world.size_x, world.size_y, world.size_z),
                "extents cannot be 0",
            ));
        }
        if world.terrain.ground_height >= world.size_y {
            return Err(invalid(
                "world.terrain.ground_height",
                world.terrain.ground_height,
                "ground layers must fit inside the world",
            ));
        }

        let physics = &self.physics;
        if !(physics.gravity < 0.0) {
            return Err(invalid("physics.gravity", physics.gravity, "must pull downward"));
        }
        if !(0.0..1.0).contains(&physics.damping_factor) {
            return Err(invalid(
                "physics.damping_factor",
                physics.damping_factor,
                "must be in [0, 1)",
            ));
        }
        if physics.stop_speed_threshold < 0.0 {
            return Err(invalid(
                "physics.stop_speed_threshold",
                physics.stop_speed_threshold,
                "cannot be negative",
            ));
        }
        positive_size("physics.standing_size", physics.standing_size)?;
        positive_size("physics.sneaking_size", physics.sneaking_size)?;

        let interaction = &self.interaction;
        if !(interaction.max_reach > 0.0 && interaction.max_reach.is_finite()) {
            return Err(invalid(
                "interaction.max_reach",
                interaction.max_reach,
                "must be positive and finite",
            ));
        }
        if !(interaction.ray_forward_offset.is_finite() && interaction.ray_origin_shift.is_finite())
        {
            return Err(invalid(
                "interaction.ray_origin_shift",
                format!(
                    "{} / {:?}",
                    interaction.ray_forward_offset, interaction.ray_origin_shift
                ),
                "click ray offsets must be finite",
            ));
        }
        if interaction.initial_block.is_air() {
            return Err(invalid(
                "interaction.initial_block",
                interaction.initial_block,
                "cannot place air",
            ));
        }

        if !(self.lighting.cycle_duration > 0.0) {
            return Err(invalid(
                "lighting.cycle_duration",
                self.lighting.cycle_duration,
                "must be positive",
            ));
        }

        log::info!(
            "[EngineConfig] Validation: world={}x{}x{}, gravity={}, reach={}",
            world.size_x,
            world.size_y,
            world.size_z,
            physics.gravity,
            interaction.max_reach
        );
        log::info!("[EngineConfig] Configuration validated successfully");
        Ok(())
    }
}

/// Read, parse and validate a TOML config file
pub fn load_config(path: impl AsRef<Path>) -> EngineResult<EngineConfig> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path).map_err(|e| EngineError::IoError {
        path: path.display().to_string(),
        error: e.to_string(),
    })?;

    let config = EngineConfig::from_toml_str(&source)?;
    config.validate()?;
    Ok(config)
}
