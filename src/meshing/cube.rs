//! Unit cube template shared by the per-voxel strategies.
//!
//! Corners are numbered by their offset from the cell's minimum corner:
//!
//! ```text
//!     7 ------ 6
//!    /|       /|        y
//!   3 ------ 2 |        |
//!   | 4 ----|- 5        o-- x
//!   |/      |/         /
//!   0 ------ 1        z
//! ```
//!
//! Each face is two counter-clockwise triangles when seen from outside the cube.

use cgmath::Vector3;

use crate::voxels::Side;

use super::{builder::MeshBuilder, vertex::Vertex};

/// Offsets of the eight cube corners from the minimum corner.
pub const CUBE_CORNERS: [[f32; 3]; 8] = [
    [0.0, 0.0, 0.0],
    [1.0, 0.0, 0.0],
    [1.0, 1.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
    [1.0, 0.0, 1.0],
    [1.0, 1.0, 1.0],
    [0.0, 1.0, 1.0],
];

/// Corner indices of the two triangles of each face, in [`Side`] order.
pub const CUBE_FACE_INDICES: [[usize; 6]; 6] = [
    [2, 6, 5, 5, 1, 2], // +X
    [0, 4, 7, 7, 3, 0], // -X
    [2, 3, 7, 7, 6, 2], // +Y
    [1, 5, 4, 4, 0, 1], // -Y
    [4, 5, 6, 6, 7, 4], // +Z
    [0, 2, 1, 2, 0, 3], // -Z
];

/// Generates the eight corner vertices of the unit cube whose minimum corner is `base`.
pub fn cube_vertices(base: Vector3<f32>, color: [f32; 3]) -> [Vertex; 8] {
    CUBE_CORNERS.map(|corner| Vertex::new(base + Vector3::from(corner), color))
}

/// Emits the two triangles of one face of a cube produced by [`cube_vertices`].
pub fn push_cube_face(builder: &mut MeshBuilder, corners: &[Vertex; 8], side: Side) {
    for corner in CUBE_FACE_INDICES[side as usize] {
        builder.push_vertex(corners[corner]);
    }
}
