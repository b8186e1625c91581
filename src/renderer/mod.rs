//! Renderer Module - CPU-side mesh building
//!
//! Turns the voxel grid into a flat vertex list and hands it to an upload
//! target. Shaders, textures and draw calls live outside the core.

pub mod mesh_data;
pub mod mesh_operations;
pub mod upload;
pub mod vertex;

pub use mesh_data::{FaceTemplate, MeshData, FACE_TEMPLATES};
pub use mesh_operations::{generate_mesh, regenerate_mesh};
pub use upload::{CpuVertexBuffer, MeshUploadTarget};
pub use vertex::{Vertex, VertexAttributeDesc, VERTEX_LAYOUT, VERTEX_STRIDE};
