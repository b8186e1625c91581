//! Mesh Operations - Pure DOP Functions
//!
//! Naive per-face culling: every face of every occupied voxel is emitted
//! unless the neighbor across it is opaque. No face merging.

use super::mesh_data::{MeshData, FACE_TEMPLATES};
use super::vertex::Vertex;
use crate::constants::core::VERTICES_PER_FACE;
use crate::world::world_operations::is_opaque;
use crate::world::{BlockFace, BlockId, BlockRegistry, VoxelPos, WorldData};

/// Build the whole world mesh from scratch
pub fn generate_mesh(world: &WorldData, registry: &BlockRegistry) -> MeshData {
    let mut mesh = MeshData::default();
    regenerate_mesh(&mut mesh, world, registry);
    mesh
}

/// Discard `mesh` contents and rebuild, reusing its allocation
///
/// Traversal is Y outer, X middle, Z inner, so an unchanged world always
/// yields the same vertex order.
pub fn regenerate_mesh(mesh: &mut MeshData, world: &WorldData, registry: &BlockRegistry) {
    mesh.vertices.clear();

    for y in 0..world.size_y as i32 {
        for x in 0..world.size_x as i32 {
            for z in 0..world.size_z as i32 {
                let pos = VoxelPos::new(x, y, z);
                let Some(index) = world.index_of(pos) else {
                    continue;
                };
                let block = world.blocks[index];
                if block.is_air() {
                    continue;
                }
                push_visible_faces(mesh, world, registry, pos, block);
            }
        }
    }

    log::debug!(
        "[regenerate_mesh] Built {} vertices ({} faces)",
        mesh.vertices.len(),
        mesh.vertices.len() / VERTICES_PER_FACE
    );
}

fn push_visible_faces(
    mesh: &mut MeshData,
    world: &WorldData,
    registry: &BlockRegistry,
    pos: VoxelPos,
    block: BlockId,
) {
    let origin = pos.as_vec3().to_array();
    let block_scalar = block.as_vertex_scalar();
    let texture_index = registry.texture_index(block) as f32;

    for face in BlockFace::ALL {
        let template = &FACE_TEMPLATES[face.index()];
        let offset = face.offset();
        if is_opaque(world, registry, pos.offset(offset.x, offset.y, offset.z)) {
            continue;
        }

        for (corner, uv) in template.corners.iter().zip(template.uvs.iter()) {
            mesh.vertices.push(Vertex {
                position: [
                    corner[0] + origin[0],
                    corner[1] + origin[1],
                    corner[2] + origin[2],
                ],
                normal: template.normal,
                tex_coords: *uv,
                block_id: block_scalar,
                texture_index,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::core::FACES_PER_BLOCK;
    use crate::world::world_operations::{fill_region, set_block};

    const STONE: BlockId = BlockId(1);
    const GLASS: BlockId = BlockId(2);

    fn registry() -> BlockRegistry {
        let mut registry = BlockRegistry::new();
        registry.register_block(STONE, "Stone", "stone.png", true).unwrap();
        registry.register_block(GLASS, "Glass", "glass.png", false).unwrap();
        registry
    }

    #[test]
    fn test_isolated_voxel_emits_full_cube() {
        let mut world = WorldData::new(3, 3, 3).unwrap();
        set_block(&mut world, VoxelPos::new(1, 1, 1), STONE).unwrap();

        let mesh = generate_mesh(&world, &registry());
        assert_eq!(mesh.vertex_count(), FACES_PER_BLOCK * VERTICES_PER_FACE);
        assert_eq!(mesh.as_floats().len(), 360);

        // Faces come out in table order
        for (face_index, chunk) in mesh.vertices.chunks(VERTICES_PER_FACE).enumerate() {
            for vertex in chunk {
                assert_eq!(vertex.normal, FACE_TEMPLATES[face_index].normal);
                assert_eq!(vertex.block_id, 1.0);
                assert_eq!(vertex.texture_index, 0.0);
            }
        }
    }

    #[test]
    fn test_positions_are_offset_by_voxel() {
        let mut world = WorldData::new(8, 8, 8).unwrap();
        set_block(&mut world, VoxelPos::new(5, 2, 7), STONE).unwrap();

        let mesh = generate_mesh(&world, &registry());
        for vertex in &mesh.vertices {
            assert!((vertex.position[0] - 5.0).abs() <= 0.5);
            assert!((vertex.position[1] - 2.0).abs() <= 0.5);
            assert!((vertex.position[2] - 7.0).abs() <= 0.5);
        }
    }

    #[test]
    fn test_enclosed_voxel_contributes_nothing() {
        let mut world = WorldData::new(3, 3, 3).unwrap();
        fill_region(&mut world, VoxelPos::new(0, 0, 0), VoxelPos::new(2, 2, 2), STONE);
        let registry = registry();

        let full = generate_mesh(&world, &registry);
        set_block(&mut world, VoxelPos::new(1, 1, 1), BlockId::AIR).unwrap();
        let hollow = generate_mesh(&world, &registry);

        // Only the outer shell is visible either way
        assert_eq!(full.vertex_count(), 9 * 6 * VERTICES_PER_FACE);
        assert_eq!(full.vertex_count(), hollow.vertex_count() - 6 * VERTICES_PER_FACE);
    }

    #[test]
    fn test_world_boundary_faces_are_emitted() {
        let mut world = WorldData::new(1, 1, 1).unwrap();
        set_block(&mut world, VoxelPos::new(0, 0, 0), STONE).unwrap();
        assert_eq!(generate_mesh(&world, &registry()).vertex_count(), 36);
    }

    #[test]
    fn test_transparent_neighbors_do_not_cull() {
        let mut world = WorldData::new(4, 4, 4).unwrap();
        set_block(&mut world, VoxelPos::new(1, 1, 1), STONE).unwrap();
        set_block(&mut world, VoxelPos::new(2, 1, 1), GLASS).unwrap();
        let registry = registry();

        let mesh = generate_mesh(&world, &registry);
        // Stone keeps all 6 faces, glass loses the one facing stone
        assert_eq!(mesh.vertex_count(), (6 + 5) * VERTICES_PER_FACE);
        assert!(mesh
            .vertices
            .iter()
            .filter(|v| v.block_id == 2.0)
            .all(|v| v.texture_index == 1.0));
    }

    #[test]
    fn test_unknown_ids_mesh_with_layer_zero() {
        let mut world = WorldData::new(2, 2, 2).unwrap();
        set_block(&mut world, VoxelPos::new(0, 0, 0), BlockId(900)).unwrap();
        set_block(&mut world, VoxelPos::new(1, 0, 0), BlockId(900)).unwrap();

        let mesh = generate_mesh(&world, &registry());
        // Unknown ids are not opaque, so neither culls the other
        assert_eq!(mesh.vertex_count(), 72);
        assert!(mesh.vertices.iter().all(|v| v.texture_index == 0.0));
    }

    #[test]
    fn test_rebuild_is_deterministic() {
        let mut world = WorldData::new(6, 6, 6).unwrap();
        fill_region(&mut world, VoxelPos::new(0, 0, 0), VoxelPos::new(5, 1, 5), STONE);
        set_block(&mut world, VoxelPos::new(3, 2, 3), GLASS).unwrap();
        set_block(&mut world, VoxelPos::new(0, 4, 5), STONE).unwrap();
        let registry = registry();

        let first = generate_mesh(&world, &registry);
        let second = generate_mesh(&world, &registry);
        assert_eq!(first.as_bytes(), second.as_bytes());
        assert_eq!(first.vertex_count() % VERTICES_PER_FACE, 0);
    }

    #[test]
    fn test_traversal_is_y_then_x_then_z() {
        let mut world = WorldData::new(2, 2, 2).unwrap();
        set_block(&mut world, VoxelPos::new(0, 1, 0), STONE).unwrap();
        set_block(&mut world, VoxelPos::new(1, 0, 0), STONE).unwrap();
        set_block(&mut world, VoxelPos::new(0, 0, 1), STONE).unwrap();

        let mesh = generate_mesh(&world, &registry());
        let centers: Vec<[f32; 3]> = mesh
            .vertices
            .chunks(36)
            .map(|cube| {
                let sum = cube.iter().fold([0.0f32; 3], |acc, v| {
                    [acc[0] + v.position[0], acc[1] + v.position[1], acc[2] + v.position[2]]
                });
                [(sum[0] / 36.0).round(), (sum[1] / 36.0).round(), (sum[2] / 36.0).round()]
            })
            .collect();

        // No two blocks touch, so each contributes a whole cube in visit order
        assert_eq!(centers, vec![[0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);
    }

    #[test]
    fn test_regenerate_replaces_contents() {
        let mut world = WorldData::new(3, 3, 3).unwrap();
        set_block(&mut world, VoxelPos::new(1, 1, 1), STONE).unwrap();
        let registry = registry();

        let mut mesh = generate_mesh(&world, &registry);
        set_block(&mut world, VoxelPos::new(1, 1, 1), BlockId::AIR).unwrap();
        regenerate_mesh(&mut mesh, &world, &registry);
        assert!(mesh.is_empty());
    }
}
