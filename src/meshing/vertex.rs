//! Vertex data structures for voxel meshes.
//!
//! This module defines the vertex format emitted by every meshing strategy and
//! the approximate equality used to deduplicate vertices.

use cgmath::Vector3;

/// Per-component tolerance under which two vertices are considered equal.
pub const VERTEX_EPSILON: f32 = f32::EPSILON;

/// A vertex in a voxel mesh.
///
/// Represents a single corner in 3D space with the color of the voxel face it
/// belongs to. The layout matches what a renderer uploads as one interleaved
/// float buffer.
///
/// # Memory Layout
/// - Position: 3x f32 (12 bytes)
/// - Color: 3x f32 (12 bytes)
///
/// Total size: 24 bytes, 6 floats
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// X, Y and Z coordinate in mesh space
    pub position: [f32; 3],
    /// Normalized red, green and blue
    pub color: [f32; 3],
}

impl Vertex {
    /// Number of floats a single vertex occupies in an interleaved buffer.
    pub const FLOATS: usize = 6;

    /// Creates a new vertex.
    ///
    /// # Arguments
    /// * `position` - The position of the vertex in mesh space
    /// * `color` - The `[r, g, b]` color of the vertex
    ///
    /// # Returns
    /// A new `Vertex` instance
    pub fn new(position: Vector3<f32>, color: [f32; 3]) -> Self {
        Vertex {
            position: position.into(),
            color,
        }
    }

    /// All six components, position first.
    pub fn components(&self) -> [f32; 6] {
        [
            self.position[0],
            self.position[1],
            self.position[2],
            self.color[0],
            self.color[1],
            self.color[2],
        ]
    }

    /// Returns `true` if every component differs from `other`'s by less than
    /// [`VERTEX_EPSILON`].
    pub fn approx_eq(&self, other: &Vertex) -> bool {
        self.components()
            .iter()
            .zip(other.components().iter())
            .all(|(a, b)| (a - b).abs() < VERTEX_EPSILON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approx_eq_tolerates_tiny_differences() {
        let a = Vertex::new(Vector3::new(0.5, 0.25, 0.0), [1.0, 0.5, 0.0]);
        let mut b = a;
        b.position[2] += VERTEX_EPSILON / 2.0;
        assert!(a.approx_eq(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn approx_eq_checks_color() {
        let a = Vertex::new(Vector3::new(1.0, 1.0, 1.0), [1.0, 0.0, 0.0]);
        let b = Vertex::new(Vector3::new(1.0, 1.0, 1.0), [0.0, 1.0, 0.0]);
        assert!(!a.approx_eq(&b));
    }

    #[test]
    fn layout_is_six_floats() {
        assert_eq!(std::mem::size_of::<Vertex>(), Vertex::FLOATS * 4);
    }
}
