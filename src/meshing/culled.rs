//! Culled meshing: only faces that border empty space.
//!
//! For each occupied cell, each of the six faces is emitted only if the
//! neighbor across it is empty or the face lies on the grid boundary. Interior
//! faces never appear. Neighbors are probed per cell through a padded
//! [`Occupancy`] bitmap, so boundary faces need no special casing.

use web_time::Instant;

use crate::voxels::{Occupancy, Side, VoxelGrid};

use super::{
    builder::MeshBuilder,
    cell_origin,
    cube::{cube_vertices, push_cube_face},
    log_extraction,
    mesh::Mesh,
    MeshingStrategy,
};

/// Generates a mesh of the visible unit faces of a grid.
///
/// # Arguments
/// * `grid` - The grid to mesh
///
/// # Returns
/// A new `Mesh` with two triangles per exposed cell face, centered on the origin.
pub fn extract(grid: &VoxelGrid) -> Mesh {
    let start = Instant::now();
    let center = grid.center();
    let occupancy = Occupancy::new(grid);
    let mut builder = MeshBuilder::new();

    for (position @ [x, y, z], cell) in grid.occupied() {
        let exposed = occupancy.exposed_sides(x, y, z);
        if !exposed.contains(&true) {
            continue;
        }

        let corners = cube_vertices(cell_origin(position, center), cell.color());
        for side in Side::all() {
            if exposed[side as usize] {
                push_cube_face(&mut builder, &corners, side);
            }
        }
    }

    let mesh = builder.build();
    log_extraction(MeshingStrategy::Culled, grid, &mesh, start);
    mesh
}
