//! Accumulates interned vertices and triangle indices during one extraction.

use super::{deduplicator::VertexDeduplicator, mesh::Mesh, vertex::Vertex};

/// Corner order of the two triangles of a quad whose corners run counter-clockwise.
pub const QUAD_INDICES: [usize; 6] = [0, 1, 2, 0, 2, 3];

/// Corner order of the same quad facing the opposite way.
pub const QUAD_INDICES_REVERSED: [usize; 6] = [0, 2, 1, 0, 3, 2];

/// Mesh under construction.
///
/// Every corner goes through a [`VertexDeduplicator`] owned by the builder, so
/// a builder must not outlive the extraction it was created for.
#[derive(Debug, Default)]
pub struct MeshBuilder {
    deduplicator: VertexDeduplicator,
    indices: Vec<u32>,
}

impl MeshBuilder {
    /// Creates an empty builder with a fresh deduplicator.
    pub fn new() -> Self {
        MeshBuilder::default()
    }

    /// Appends one triangle corner.
    pub fn push_vertex(&mut self, vertex: Vertex) {
        let index = self.deduplicator.intern(vertex);
        self.indices.push(index);
    }

    /// Appends two triangles covering a quad.
    ///
    /// # Arguments
    /// * `corners` - The quad's corners in perimeter order
    /// * `pattern` - Which corners form the triangles, usually [`QUAD_INDICES`]
    ///   or [`QUAD_INDICES_REVERSED`]
    pub fn push_quad(&mut self, corners: &[Vertex; 4], pattern: &[usize; 6]) {
        for &corner in pattern {
            self.push_vertex(corners[corner]);
        }
    }

    /// Number of triangle corners pushed so far.
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Finishes the mesh.
    pub fn build(self) -> Mesh {
        Mesh {
            vertices: self.deduplicator.into_vertices(),
            indices: self.indices,
        }
    }
}
