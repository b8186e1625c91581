//! Vertex - the GPU-facing mesh record
//!
//! Ten packed `f32` scalars per vertex, uploaded as-is. The shader side reads
//! the same layout through `VERTEX_LAYOUT`.

use static_assertions::assert_eq_size;

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub tex_coords: [f32; 2],
    /// Raw block id, widened to f32
    pub block_id: f32,
    /// Layer in the block texture array, widened to f32
    pub texture_index: f32,
}

assert_eq_size!(Vertex, [f32; crate::constants::core::VERTEX_ATTRIBUTES]);

/// One shader input: location, byte offset into the vertex, f32 component count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttributeDesc {
    pub location: u32,
    pub offset: usize,
    pub components: u32,
}

/// Byte distance between consecutive vertices
pub const VERTEX_STRIDE: usize = std::mem::size_of::<Vertex>();

/// Attribute locations: 0 position, 1 normal, 2 tex coords, 3 block id, 4 texture index
pub const VERTEX_LAYOUT: [VertexAttributeDesc; 5] = [
    VertexAttributeDesc {
        location: 0,
        offset: 0,
        components: 3,
    },
    VertexAttributeDesc {
        location: 1,
        offset: std::mem::size_of::<[f32; 3]>(),
        components: 3,
    },
    VertexAttributeDesc {
        location: 2,
        offset: std::mem::size_of::<[f32; 6]>(),
        components: 2,
    },
    VertexAttributeDesc {
        location: 3,
        offset: std::mem::size_of::<[f32; 8]>(),
        components: 1,
    },
    VertexAttributeDesc {
        location: 4,
        offset: std::mem::size_of::<[f32; 9]>(),
        components: 1,
    },
];
