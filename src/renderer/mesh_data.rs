//! Mesh Data - Pure DOP
//!
//! Vertex storage plus the fixed cube-face table the mesher reads from.
//! All transformations happen in mesh_operations.rs

use super::vertex::Vertex;
use crate::world::BlockFace;

/// A rebuilt world mesh: non-indexed triangle list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Flat view, 10 scalars per vertex
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Byte image for buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

/// Geometry for one face of the unit cube centered on the origin
#[derive(Debug, Clone, Copy)]
pub struct FaceTemplate {
    pub face: BlockFace,
    pub normal: [f32; 3],
    /// Two triangles; winding is fixed per face and shared by every voxel
    pub corners: [[f32; 3]; 6],
    pub uvs: [[f32; 2]; 6],
}

/// Face table indexed by `BlockFace::index()`
pub static FACE_TEMPLATES: [FaceTemplate; 6] = [
    FaceTemplate {
        face: BlockFace::Top,
        normal: [0.0, 1.0, 0.0],
        corners: [
            [-0.5, 0.5, -0.5],
            [0.5, 0.5, -0.5],
            [0.5, 0.5, 0.5],
            [0.5, 0.5, 0.5],
            [-0.5, 0.5, 0.5],
            [-0.5, 0.5, -0.5],
        ],
        uvs: [[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [1.0, 0.0], [0.0, 0.0], [0.0, 1.0]],
    },
    FaceTemplate {
        face: BlockFace::Bottom,
        normal: [0.0, -1.0, 0.0],
        corners: [
            [-0.5, -0.5, -0.5],
            [0.5, -0.5, 0.5],
            [0.5, -0.5, -0.5],
            [-0.5, -0.5, -0.5],
            [-0.5, -0.5, 0.5],
            [0.5, -0.5, 0.5],
        ],
        uvs: [[0.0, 1.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0], [1.0, 0.0]],
    },
    FaceTemplate {
        face: BlockFace::Front,
        normal: [0.0, 0.0, 1.0],
        corners: [
            [-0.5, -0.5, 0.5],
            [0.5, -0.5, 0.5],
            [0.5, 0.5, 0.5],
            [0.5, 0.5, 0.5],
            [-0.5, 0.5, 0.5],
            [-0.5, -0.5, 0.5],
        ],
        uvs: [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0]],
    },
    FaceTemplate {
        face: BlockFace::Back,
        normal: [0.0, 0.0, -1.0],
        corners: [
            [-0.5, -0.5, -0.5],
            [0.5, 0.5, -0.5],
            [0.5, -0.5, -0.5],
            [-0.5, -0.5, -0.5],
            [-0.5, 0.5, -0.5],
            [0.5, 0.5, -0.5],
        ],
        uvs: [[0.0, 0.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0], [0.0, 1.0], [1.0, 1.0]],
    },
    FaceTemplate {
        face: BlockFace::Left,
        normal: [-1.0, 0.0, 0.0],
        corners: [
            [-0.5, 0.5, 0.5],
            [-0.5, 0.5, -0.5],
            [-0.5, -0.5, -0.5],
            [-0.5, -0.5, -0.5],
            [-0.5, -0.5, 0.5],
            [-0.5, 0.5, 0.5],
        ],
        uvs: [[1.0, 1.0], [0.0, 1.0], [0.0, 0.0], [0.0, 0.0], [1.0, 0.0], [1.0, 1.0]],
    },
    FaceTemplate {
        face: BlockFace::Right,
        normal: [1.0, 0.0, 0.0],
        corners: [
            [0.5, 0.5, 0.5],
            [0.5, -0.5, -0.5],
            [0.5, 0.5, -0.5],
            [0.5, 0.5, 0.5],
            [0.5, -0.5, 0.5],
            [0.5, -0.5, -0.5],
        ],
        uvs: [[0.0, 1.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0], [1.0, 0.0]],
    },
];
