//! # Voxels
//!
//! This module contains the volumetric side of the crate: the value stored per
//! cell and the dense grid that holds them.
//!
//! ## Architecture
//!
//! * **Cell**: [`VoxelCell`], the color of one occupied position
//! * **Side**: [`Side`], the six faces of a cell
//! * **Grid**: [`VoxelGrid`], a fixed-size 3D array of optional cells with
//!   bounds-checked access, region fills, occupied-cell iteration and a padded
//!   occupancy bitmap for neighbor probing
//!
//! ## Data Flow
//!
//! 1. The application creates a grid with fixed dimensions
//! 2. Cells are written directly or through fill primitives
//! 3. A meshing strategy reads the grid and produces a fresh mesh
//!
//! ## Thread Safety
//!
//! The grid does no internal locking. Extraction only needs `&VoxelGrid`, so the
//! borrow checker already rules out mutation while a mesh is being built.

pub mod cell;
pub mod grid;
pub mod side;

pub use cell::VoxelCell;
pub use grid::{grid_iteration::OccupiedCells, occupancy::Occupancy, VoxelGrid};
pub use side::Side;
