//! Greedy meshing implementation for voxel rendering.
//!
//! This module implements the greedy meshing algorithm, which combines adjacent
//! coplanar faces of the same color into larger quads, significantly reducing
//! the number of vertices and triangles needed to render a grid.
//!
//! ## Algorithm
//!
//! 1. For each axis `d` (X, Y, Z), with `u = (d + 1) % 3` and `v = (d + 2) % 3`
//! 2. Sweep a plane from `0` to `size_d` inclusive; the final position captures
//!    the far boundary of the grid
//! 3. For every `(u, v)` cell of the plane, compare the cells on either side of
//!    it and record the visible face, if any, on a [`Mask2D`]
//! 4. Greedily merge matching faces on the mask into rectangles
//! 5. Emit two triangles per rectangle, wound to face the empty side
//!
//! The result covers exactly the faces the culled mesher emits, with far fewer
//! quads wherever same-colored faces are contiguous.

use cgmath::Vector3;
use web_time::Instant;

use crate::voxels::VoxelGrid;

use super::{
    builder::{MeshBuilder, QUAD_INDICES, QUAD_INDICES_REVERSED},
    log_extraction,
    mesh::Mesh,
    vertex::Vertex,
    MeshingStrategy,
};

pub mod mask;

pub use mask::{FaceOrientation, Mask2D, MaskFace, MaskQuad};

/// Generates a greedy-merged mesh of the visible faces of a grid.
///
/// # Arguments
/// * `grid` - The grid to mesh
///
/// # Returns
/// A new `Mesh`, centered on the origin, with two triangles per merged quad.
///
/// # Performance
/// Every axis costs one mask build and merge per slice, `O(size_u * size_v)`
/// each, so the whole pass is linear in the grid volume.
pub fn extract(grid: &VoxelGrid) -> Mesh {
    let start = Instant::now();
    let mut builder = MeshBuilder::new();

    if !grid.is_degenerate() {
        for axis in 0..3 {
            sweep_axis(grid, axis, &mut builder);
        }
    }

    let mesh = builder.build();
    log_extraction(MeshingStrategy::Greedy, grid, &mesh, start);
    mesh
}

/// Sweeps every slice plane perpendicular to `axis`, emitting merged quads.
fn sweep_axis(grid: &VoxelGrid, axis: usize, builder: &mut MeshBuilder) {
    let size = grid.size();
    let u_axis = (axis + 1) % 3;
    let v_axis = (axis + 2) % 3;
    let mut mask = Mask2D::new(size[u_axis], size[v_axis]);

    for slice in 0..=size[axis] {
        fill_mask(grid, axis, slice, &mut mask);

        for quad in mask.take_quads() {
            let mut anchor = [0; 3];
            anchor[axis] = slice;
            anchor[u_axis] = quad.u;
            anchor[v_axis] = quad.v;

            let mut du = [0; 3];
            du[u_axis] = quad.width;
            let mut dv = [0; 3];
            dv[v_axis] = quad.height;

            push_mask_quad(grid, builder, anchor, du, dv, quad.face);
        }
    }
}

/// Records on `mask` the faces crossing the plane at `slice` along `axis`.
///
/// The plane separates the cell at `slice` from its predecessor at `slice - 1`.
/// Either may lie outside the grid, in which case it counts as empty.
fn fill_mask(grid: &VoxelGrid, axis: usize, slice: usize, mask: &mut Mask2D) {
    let size = grid.size();
    let u_axis = (axis + 1) % 3;
    let v_axis = (axis + 2) % 3;

    mask.reset();

    for v in 0..size[v_axis] {
        for u in 0..size[u_axis] {
            let mut position = [0; 3];
            position[u_axis] = u;
            position[v_axis] = v;

            position[axis] = slice;
            let current = if slice < size[axis] {
                grid.get_at(position)
            } else {
                None
            };

            let previous = if slice > 0 {
                position[axis] = slice - 1;
                grid.get_at(position)
            } else {
                None
            };

            let face = match (previous, current) {
                (Some(previous), None) => Some(MaskFace {
                    color: previous.color(),
                    orientation: FaceOrientation::Back,
                }),
                (None, Some(current)) => Some(MaskFace {
                    color: current.color(),
                    orientation: FaceOrientation::Front,
                }),
                _ => None,
            };

            mask.set(u, v, face);
        }
    }
}

/// Emits the two triangles of a merged quad.
///
/// Corners run `anchor`, `anchor + du`, `anchor + du + dv`, `anchor + dv`. Since
/// `u × v` points along the sweep axis, that order is counter-clockwise seen
/// from the positive side, which is where a back face looks.
fn push_mask_quad(
    grid: &VoxelGrid,
    builder: &mut MeshBuilder,
    anchor: [usize; 3],
    du: [usize; 3],
    dv: [usize; 3],
    face: MaskFace,
) {
    let center = grid.center();
    let to_vector = |p: [usize; 3]| Vector3::new(p[0] as f32, p[1] as f32, p[2] as f32);

    let origin = to_vector(anchor) - center;
    let du = to_vector(du);
    let dv = to_vector(dv);

    let corners = [origin, origin + du, origin + du + dv, origin + dv]
        .map(|corner| Vertex::new(corner, face.color));

    let pattern = match face.orientation {
        FaceOrientation::Back => &QUAD_INDICES,
        FaceOrientation::Front => &QUAD_INDICES_REVERSED,
    };

    builder.push_quad(&corners, pattern);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voxels::VoxelCell;

    #[test]
    fn filled_cube_is_six_quads() {
        for size in 1..8 {
            let grid = VoxelGrid::filled(size, VoxelCell::WHITE);
            let mesh = extract(&grid);
            assert_eq!(mesh.quad_count(), 6, "size {}", size);
            assert_eq!(mesh.vertices.len(), 8, "size {}", size);
        }
    }

    #[test]
    fn filled_box_is_six_quads() {
        let mut grid = VoxelGrid::new(2, 5, 3);
        grid.fill_cuboid(VoxelCell::WHITE);

        let mesh = extract(&grid);
        assert_eq!(mesh.quad_count(), 6);
        assert!((mesh.surface_area() - 62.0).abs() < 1e-6);
    }

    #[test]
    fn colors_are_not_merged() {
        let mut grid = VoxelGrid::new(2, 1, 1);
        grid.set(0, 0, 0, Some(VoxelCell::new(1.0, 0.0, 0.0))).unwrap();
        grid.set(1, 0, 0, Some(VoxelCell::new(0.0, 0.0, 1.0))).unwrap();

        // Four long sides split in two, plus the two end caps; the colors also
        // meet across the shared face, which stays hidden.
        assert_eq!(extract(&grid).quad_count(), 10);
    }

    #[test]
    fn quads_face_empty_space() {
        let mut grid = VoxelGrid::new(1, 1, 1);
        grid.set(0, 0, 0, Some(VoxelCell::WHITE)).unwrap();
        let mesh = extract(&grid);

        for triangle in mesh.indices.chunks(3) {
            let [a, b, c] = [triangle[0], triangle[1], triangle[2]]
                .map(|index| Vector3::from(mesh.vertices[index as usize].position));
            let normal = (b - a).cross(c - a);
            let centroid = (a + b + c) / 3.0;
            // The cube is centered on the origin, so outward normals point
            // the same way as the triangle's centroid.
            assert!(cgmath::dot(normal, centroid) > 0.0);
        }
    }

    #[test]
    fn degenerate_grid_is_empty() {
        assert!(extract(&VoxelGrid::new(3, 0, 3)).is_empty());
    }
}
