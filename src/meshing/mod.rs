//! Mesh generation for voxel grids.
//!
//! This module converts a [`VoxelGrid`] into a triangle mesh ready for upload to
//! a renderer. Three strategies are provided, each trading extraction work for
//! output size.
//!
//! # Architecture
//! - [`Mesh`]: The output, a deduplicated vertex buffer plus a triangle index list
//! - [`Vertex`]: Position and color of one mesh corner
//! - [`VertexDeduplicator`]: Interns corners under approximate equality
//! - [`MeshBuilder`]: Accumulates quads during one extraction
//! - [`MeshingStrategy`]: Dispatch between [`direct`], [`culled`] and [`greedy`]
//!
//! # Usage
//! ```no_run
//! use voxel_mesher::{meshing::MeshingStrategy, voxels::{VoxelCell, VoxelGrid}};
//!
//! let grid = VoxelGrid::spherical(16, VoxelCell::WHITE);
//! let mesh = grid.extract(MeshingStrategy::Greedy);
//! println!("{} triangles", mesh.triangle_count());
//! ```
//!
//! # Coordinates
//! Cell `(x, y, z)` spans `[x, x + 1] x [y, y + 1] x [z, z + 1]` before the
//! whole mesh is shifted by the grid center, so the output is centered on the
//! origin regardless of strategy.
//!
//! # Performance Considerations
//! - Direct emits 12 triangles per occupied cell and is meant as a baseline
//! - Culled skips faces hidden by a neighbor
//! - Greedy additionally merges coplanar same-colored faces into rectangles

use cgmath::Vector3;
use log::{debug, info, warn};
use web_time::Instant;

use crate::voxels::VoxelGrid;

pub mod builder;
pub mod cube;
pub mod culled;
pub mod deduplicator;
pub mod direct;
pub mod greedy;
pub mod mesh;
pub mod strategy;
pub mod vertex;

pub use builder::MeshBuilder;
pub use deduplicator::VertexDeduplicator;
pub use mesh::Mesh;
pub use strategy::MeshingStrategy;
pub use vertex::Vertex;

impl VoxelGrid {
    /// Meshes the grid with one full cube per occupied cell.
    pub fn extract_direct(&self) -> Mesh {
        direct::extract(self)
    }

    /// Meshes the grid emitting only faces that border empty space.
    pub fn extract_culled(&self) -> Mesh {
        culled::extract(self)
    }

    /// Meshes the grid merging visible faces into maximal rectangles.
    pub fn extract_greedy(&self) -> Mesh {
        greedy::extract(self)
    }

    /// Meshes the grid with `strategy`.
    ///
    /// Extraction only reads the grid. Running it twice over an unchanged grid
    /// yields identical meshes.
    pub fn extract(&self, strategy: MeshingStrategy) -> Mesh {
        strategy.extract(self)
    }
}

/// Mesh-space position of the minimum corner of the cell at `position`.
pub(crate) fn cell_origin(position: [usize; 3], center: Vector3<f32>) -> Vector3<f32> {
    Vector3::new(
        position[0] as f32,
        position[1] as f32,
        position[2] as f32,
    ) - center
}

/// Reports the outcome of one extraction.
pub(crate) fn log_extraction(
    strategy: MeshingStrategy,
    grid: &VoxelGrid,
    mesh: &Mesh,
    start: Instant,
) {
    if grid.is_degenerate() {
        let [size_x, size_y, size_z] = grid.size();
        warn!(
            "{} meshing of degenerate {}x{}x{} grid produced an empty mesh",
            strategy.name(),
            size_x,
            size_y,
            size_z
        );
        return;
    }

    info!(
        "{} meshing produced {} vertices, {} triangles ({} quads)",
        strategy.name(),
        mesh.vertices.len(),
        mesh.triangle_count(),
        mesh.quad_count()
    );
    debug!("{} meshing took {:?}", strategy.name(), start.elapsed());
}
