#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Voxel Mesher
//!
//! Converts dense voxel grids into triangle meshes for rendering.
//!
//! A [`VoxelGrid`] holds an optional colored cell at every integer position
//! inside fixed bounds. Any grid can be meshed with one of three strategies,
//! all of which cover the same visible surface:
//!
//! * **Direct** - a full cube for every occupied cell
//! * **Culled** - only the faces that border empty space
//! * **Greedy** - visible faces merged into maximal same-colored rectangles
//!
//! ## Key Modules
//!
//! * `voxels` - Cells, the grid and its fill primitives
//! * `meshing` - Vertex interning, the mesh type and the strategies
//! * `config` - Scene descriptions for the binary
//! * `error` - The crate error type
//!
//! ## Usage
//!
//! ```rust
//! use voxel_mesher::{MeshingStrategy, VoxelCell, VoxelGrid};
//!
//! let mut grid = VoxelGrid::new(8, 8, 8);
//! grid.fill_ellipsoid(VoxelCell::new(0.8, 0.3, 0.1));
//!
//! let culled = grid.extract(MeshingStrategy::Culled);
//! let greedy = grid.extract(MeshingStrategy::Greedy);
//! assert!(greedy.triangle_count() <= culled.triangle_count());
//! ```
//!
//! ## Logging
//!
//! The library reports through the `log` facade and never installs a logger.
//! The binary installs `env_logger`, configured from `RUST_LOG`.

use std::env;

use log::info;

pub mod config;
pub mod error;
pub mod meshing;
pub mod voxels;

pub use config::{FillMethod, SceneConfig};
pub use error::{Result, VoxelError};
pub use meshing::{Mesh, MeshingStrategy, Vertex};
pub use voxels::{VoxelCell, VoxelGrid};

/// Runs the command line tool.
///
/// Loads the scene named by the first argument, or the default scene when no
/// argument is given, then builds, meshes and optionally exports it.
///
/// # Errors
/// Any error from loading the scene or writing the OBJ export.
pub fn run() -> Result<()> {
    let mut log_builder = env_logger::Builder::new();
    // A logger installed by an embedding application takes precedence.
    let _ = log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .try_init();

    info!("Logger initialized");

    let config = match env::args().nth(1) {
        Some(path) => SceneConfig::from_path(path)?,
        None => {
            info!("No scene given, using the default scene");
            SceneConfig::default()
        }
    };

    let grid = config.build_grid();
    let [size_x, size_y, size_z] = grid.size();
    info!(
        "Built {}x{}x{} grid with {} occupied cells",
        size_x,
        size_y,
        size_z,
        grid.occupied_count()
    );

    let mesh = grid.extract(config.strategy);
    info!(
        "Mesh: {} vertices, {} triangles, surface area {:.1}",
        mesh.vertices.len(),
        mesh.triangle_count(),
        mesh.surface_area()
    );

    if let Some(path) = &config.obj_output {
        mesh.save_obj(path)?;
    }

    Ok(())
}
