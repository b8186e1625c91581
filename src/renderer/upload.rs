//! Mesh upload seam
//!
//! The core never talks to a graphics API. Whatever owns the GPU vertex
//! buffer implements `MeshUploadTarget` and receives the whole mesh on every
//! rebuild.

use super::vertex::Vertex;

/// Receiver for rebuilt meshes
pub trait MeshUploadTarget {
    /// Discard the previous contents and take `vertices` as the new buffer
    fn replace_vertices(&mut self, vertices: &[Vertex]);
}

/// In-memory upload target: keeps the latest byte image
#[derive(Debug, Default, Clone)]
pub struct CpuVertexBuffer {
    bytes: Vec<u8>,
    vertex_count: usize,
    upload_count: u64,
}

impl CpuVertexBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of full replacements received so far
    pub fn upload_count(&self) -> u64 {
        self.upload_count
    }
}

impl MeshUploadTarget for CpuVertexBuffer {
    fn replace_vertices(&mut self, vertices: &[Vertex]) {
        self.bytes.clear();
        self.bytes.extend_from_slice(bytemuck::cast_slice(vertices));
        self.vertex_count = vertices.len();
        self.upload_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_discards_previous_contents() {
        let mut buffer = CpuVertexBuffer::new();
        buffer.replace_vertices(&[Vertex::default(); 6]);
        assert_eq!(buffer.vertex_count(), 6);
        assert_eq!(buffer.bytes().len(), 6 * 40);

        buffer.replace_vertices(&[]);
        assert_eq!(buffer.vertex_count(), 0);
        assert!(buffer.bytes().is_empty());
        assert_eq!(buffer.upload_count(), 2);
    }
}
