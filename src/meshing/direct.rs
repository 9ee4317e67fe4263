//! Direct meshing: one full cube per occupied voxel.
//!
//! Every face of every occupied cell is emitted whether or not a neighbor hides
//! it. This is the simplest possible mesher and serves as the correctness
//! baseline for the other strategies. Corners shared by touching cubes of the
//! same color still collapse into a single vertex through the deduplicator.

use web_time::Instant;

use crate::voxels::{Side, VoxelGrid};

use super::{
    builder::MeshBuilder,
    cell_origin,
    cube::{cube_vertices, push_cube_face},
    log_extraction,
    mesh::Mesh,
    MeshingStrategy,
};

/// Generates a mesh with all six faces of every occupied cell.
///
/// # Arguments
/// * `grid` - The grid to mesh
///
/// # Returns
/// A new `Mesh` holding 12 triangles per occupied cell, centered on the origin.
pub fn extract(grid: &VoxelGrid) -> Mesh {
    let start = Instant::now();
    let center = grid.center();
    let mut builder = MeshBuilder::new();

    for (position, cell) in grid.occupied() {
        let corners = cube_vertices(cell_origin(position, center), cell.color());
        for side in Side::all() {
            push_cube_face(&mut builder, &corners, side);
        }
    }

    let mesh = builder.build();
    log_extraction(MeshingStrategy::Direct, grid, &mesh, start);
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voxels::VoxelCell;

    #[test]
    fn single_voxel_is_a_closed_cube() {
        let mut grid = VoxelGrid::new(1, 1, 1);
        grid.set(0, 0, 0, Some(VoxelCell::WHITE)).unwrap();

        let mesh = extract(&grid);
        assert_eq!(mesh.vertices.len(), 8);
        assert_eq!(mesh.indices.len(), 36);
        assert_eq!(mesh.quad_count(), 6);
    }

    #[test]
    fn mesh_is_centered() {
        let grid = VoxelGrid::filled(2, VoxelCell::WHITE);
        let mesh = extract(&grid);

        for vertex in &mesh.vertices {
            for component in vertex.position {
                assert!((-1.0..=1.0).contains(&component));
            }
        }
        assert!(mesh
            .vertices
            .iter()
            .any(|vertex| vertex.position == [-1.0, -1.0, -1.0]));
    }

    #[test]
    fn touching_cubes_share_corners() {
        let mut grid = VoxelGrid::new(2, 1, 1);
        grid.fill_cuboid(VoxelCell::WHITE);

        let mesh = extract(&grid);
        // Two cubes share the four corners of their common face.
        assert_eq!(mesh.vertices.len(), 12);
        assert_eq!(mesh.quad_count(), 12);
    }

    #[test]
    fn differently_colored_neighbors_keep_their_corners() {
        let mut grid = VoxelGrid::new(2, 1, 1);
        grid.set(0, 0, 0, Some(VoxelCell::new(1.0, 0.0, 0.0))).unwrap();
        grid.set(1, 0, 0, Some(VoxelCell::new(0.0, 0.0, 1.0))).unwrap();

        assert_eq!(extract(&grid).vertices.len(), 16);
    }
}
