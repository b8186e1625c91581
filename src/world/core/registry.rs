use super::BlockId;
use crate::error::{EngineError, EngineResult};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Everything the engine knows about one block type
#[derive(Debug, Clone, PartialEq)]
pub struct BlockDefinition {
    pub id: BlockId,
    pub name: String,
    /// Texture source path, kept for the asset loader. The core never reads it.
    pub texture: String,
    pub is_opaque: bool,
    /// Layer in the block texture array
    pub texture_index: u32,
}

/// On-disk block definition document: `{"blocks": [...]}`
#[derive(Debug, Deserialize)]
struct BlockDefinitionFile {
    blocks: Vec<BlockDefinitionEntry>,
}

#[derive(Debug, Deserialize)]
struct BlockDefinitionEntry {
    id: u16,
    name: String,
    texture: String,
    is_opaque: bool,
}

/// Registry that stores all block types as data
///
/// Air (id 0) is always present. Texture layers are handed out in
/// registration order starting at 0, matching the order in which the asset
/// loader stacks images into the texture array.
#[derive(Debug, Clone)]
pub struct BlockRegistry {
    /// Map from BlockId to definition
    blocks: HashMap<BlockId, BlockDefinition>,
    /// Map from name to BlockId
    name_to_id: HashMap<String, BlockId>,
    /// Ids in registration order (air excluded)
    registration_order: Vec<BlockId>,
    next_texture_index: u32,
}

impl Default for BlockRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockRegistry {
    pub fn new() -> Self {
        let mut blocks = HashMap::new();
        blocks.insert(
            BlockId::AIR,
            BlockDefinition {
                id: BlockId::AIR,
                name: "Air".to_string(),
                texture: String::new(),
                is_opaque: false,
                texture_index: 0,
            },
        );

        Self {
            blocks,
            name_to_id: HashMap::new(),
            registration_order: Vec::new(),
            next_texture_index: 0,
        }
    }

    /// Parse a JSON block definition document
    pub fn from_json_str(json: &str) -> EngineResult<Self> {
        let file: BlockDefinitionFile =
            serde_json::from_str(json).map_err(|e| EngineError::DeserializationError {
                context: "block definitions".to_string(),
                error: e.to_string(),
            })?;

        let mut registry = Self::new();
        for entry in file.blocks {
            registry.register_block(
                BlockId::new(entry.id),
                &entry.name,
                &entry.texture,
                entry.is_opaque,
            )?;
        }

        log::info!(
            "[BlockRegistry::from_json_str] Loaded {} block definitions",
            registry.len()
        );
        Ok(registry)
    }

    /// Register a new block type; assigns the next texture layer
    pub fn register_block(
        &mut self,
        id: BlockId,
        name: &str,
        texture: &str,
        is_opaque: bool,
    ) -> EngineResult<&BlockDefinition> {
        if id.is_air() {
            return Err(EngineError::InvalidConfig {
                field: "blocks.id".to_string(),
                value: id.0.to_string(),
                reason: "id 0 is reserved for air".to_string(),
            });
        }
        if self.blocks.contains_key(&id) {
            return Err(EngineError::InvalidConfig {
                field: "blocks.id".to_string(),
                value: id.0.to_string(),
                reason: format!("duplicate block id (name '{}')", name),
            });
        }

        let texture_index = self.next_texture_index;
        self.next_texture_index += 1;

        log::debug!(
            "[BlockRegistry::register_block] '{}' -> id {}, texture layer {}, opaque {}",
            name,
            id.0,
            texture_index,
            is_opaque
        );

        self.name_to_id.insert(name.to_string(), id);
        self.registration_order.push(id);
        let definition = self.blocks.entry(id).or_insert(BlockDefinition {
            id,
            name: name.to_string(),
            texture: texture.to_string(),
            is_opaque,
            texture_index,
        });
        Ok(definition)
    }

    /// Full definition for an id, if registered
    pub fn lookup(&self, id: BlockId) -> Option<&BlockDefinition> {
        self.blocks.get(&id)
    }

    /// Unknown ids are never opaque
    pub fn is_opaque(&self, id: BlockId) -> bool {
        self.lookup(id).map_or(false, |def| def.is_opaque)
    }

    /// Unknown ids sample layer 0
    pub fn texture_index(&self, id: BlockId) -> u32 {
        self.lookup(id).map_or(0, |def| def.texture_index)
    }

    /// Get a block ID by name
    pub fn get_id(&self, name: &str) -> Option<BlockId> {
        self.name_to_id.get(name).copied()
    }

    /// Registered (non-air) ids in registration order
    pub fn block_ids(&self) -> &[BlockId] {
        &self.registration_order
    }

    /// Number of registered blocks, air excluded
    pub fn len(&self) -> usize {
        self.registration_order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registration_order.is_empty()
    }
}

/// Read and parse a block definition file
pub fn load_block_definitions(path: impl AsRef<Path>) -> EngineResult<BlockRegistry> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|e| EngineError::IoError {
        path: path.display().to_string(),
        error: e.to_string(),
    })?;
    BlockRegistry::from_json_str(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const DEFINITIONS: &str = r#"{
        "blocks": [
            { "id": 1135, "name": "Dirt", "texture": "textures/dirt.png", "is_opaque": true },
            { "id": 1139, "name": "Water", "texture": "textures/water.png", "is_opaque": false },
            { "id": 7, "name": "Stone", "texture": "textures/stone.png", "is_opaque": true }
        ]
    }"#;

    #[test]
    fn test_air_is_implicit() {
        let registry = BlockRegistry::new();
        let air = registry.lookup(BlockId::AIR).expect("air registered");
        assert!(!air.is_opaque);
        assert_eq!(air.texture_index, 0);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_texture_layers_follow_document_order() {
        let registry = BlockRegistry::from_json_str(DEFINITIONS).unwrap();
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.texture_index(BlockId(1135)), 0);
        assert_eq!(registry.texture_index(BlockId(1139)), 1);
        assert_eq!(registry.texture_index(BlockId(7)), 2);
        assert_eq!(registry.get_id("Water"), Some(BlockId(1139)));
        assert_eq!(registry.block_ids(), &[BlockId(1135), BlockId(1139), BlockId(7)]);
    }

    #[test]
    fn test_unknown_ids_fall_back() {
        let registry = BlockRegistry::from_json_str(DEFINITIONS).unwrap();
        assert!(registry.is_opaque(BlockId(1135)));
        assert!(!registry.is_opaque(BlockId(1139)));
        assert!(!registry.is_opaque(BlockId(999)));
        assert_eq!(registry.texture_index(BlockId(999)), 0);
        assert!(registry.lookup(BlockId(999)).is_none());
    }

    #[test]
    fn test_duplicate_and_air_ids_rejected() {
        let mut registry = BlockRegistry::new();
        registry.register_block(BlockId(1), "Dirt", "", true).unwrap();
        assert!(registry.register_block(BlockId(1), "Again", "", true).is_err());
        assert!(registry.register_block(BlockId::AIR, "Void", "", true).is_err());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let err = BlockRegistry::from_json_str(r#"{ "blocks": [ { "id": 1 } ] }"#).unwrap_err();
        assert!(matches!(err, EngineError::DeserializationError { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DEFINITIONS.as_bytes()).unwrap();

        let registry = load_block_definitions(file.path()).unwrap();
        assert_eq!(registry.len(), 3);

        let missing = load_block_definitions(file.path().with_extension("missing"));
        assert!(matches!(missing, Err(EngineError::IoError { .. })));
    }
}
