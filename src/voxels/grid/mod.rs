//! # Voxel Grid Module
//!
//! This module provides the `VoxelGrid` struct, a dense, fixed-size 3D array of
//! optional voxel cells, together with its fill primitives and iteration helpers.
//!
//! ## Storage
//!
//! Cells are stored in a single flat vector, x fastest, then y, then z:
//!
//! ```text
//! index = x + size_x * (y + size_y * z)
//! ```
//!
//! The vector always holds exactly `size_x * size_y * size_z` entries and the
//! dimensions never change after construction.
//!
//! ## Bounds
//!
//! Upper bounds are exclusive. Reading any coordinate with `x >= size_x` (and
//! likewise for y and z) returns `None` without touching the backing storage.
//! Writing such a coordinate returns [`VoxelError::OutOfRange`].

use cgmath::Vector3;
use log::{trace, warn};

use crate::error::{Result, VoxelError};

use super::cell::VoxelCell;

mod grid_fill;
pub mod grid_iteration;
pub mod occupancy;

pub use grid_fill::{NOISE_SEED, NOISE_THRESHOLD};

/// A dense 3D grid of optional voxel cells.
///
/// The grid is mutated through [`VoxelGrid::set`] and the fill primitives, and
/// is only read during mesh extraction.
#[derive(Clone, Debug, PartialEq)]
pub struct VoxelGrid {
    size_x: usize,
    size_y: usize,
    size_z: usize,
    /// Row-major cell storage, `None` meaning empty space.
    cells: Vec<Option<VoxelCell>>,
}

impl VoxelGrid {
    /// Creates a new, completely empty grid.
    ///
    /// Zero-sized dimensions are accepted; such a grid holds no cells and every
    /// extraction over it yields an empty mesh.
    ///
    /// # Arguments
    /// * `size_x`, `size_y`, `size_z` - Grid extents in cells
    ///
    /// # Returns
    /// A new `VoxelGrid` with every cell empty.
    pub fn new(size_x: usize, size_y: usize, size_z: usize) -> Self {
        if size_x == 0 || size_y == 0 || size_z == 0 {
            warn!(
                "Created degenerate {}x{}x{} grid, it can hold no voxels",
                size_x, size_y, size_z
            );
        }

        VoxelGrid {
            size_x,
            size_y,
            size_z,
            cells: vec![None; size_x * size_y * size_z],
        }
    }

    /// Creates an `n`x`n`x`n` grid with every cell set to `cell`.
    pub fn filled(size: usize, cell: VoxelCell) -> Self {
        let mut grid = VoxelGrid::new(size, size, size);
        grid.fill_cuboid(cell);
        grid
    }

    /// Creates a cubic grid of side `diameter` holding the inscribed sphere.
    pub fn spherical(diameter: usize, cell: VoxelCell) -> Self {
        let mut grid = VoxelGrid::new(diameter, diameter, diameter);
        grid.fill_ellipsoid(cell);
        grid
    }

    /// Creates an `n`x`n`x`n` grid whose occupancy follows Perlin noise.
    pub fn noise(size: usize, cell: VoxelCell, frequency: f64) -> Self {
        let mut grid = VoxelGrid::new(size, size, size);
        grid.fill_noise(cell, frequency);
        grid
    }

    /// Returns the grid extents as `[size_x, size_y, size_z]`.
    pub fn size(&self) -> [usize; 3] {
        [self.size_x, self.size_y, self.size_z]
    }

    /// Returns the total number of cells the grid can hold.
    pub fn volume(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if any dimension is zero.
    pub fn is_degenerate(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the largest of the three extents.
    ///
    /// Renderers use this to frame a camera around the whole grid.
    pub fn max_extent(&self) -> usize {
        self.size_x.max(self.size_y).max(self.size_z)
    }

    /// Returns the geometric center of the grid in cell units.
    ///
    /// Meshes are emitted with this point translated to the origin.
    pub fn center(&self) -> Vector3<f32> {
        Vector3::new(
            self.size_x as f32 / 2.0,
            self.size_y as f32 / 2.0,
            self.size_z as f32 / 2.0,
        )
    }

    /// Counts the occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns `true` if `(x, y, z)` addresses a cell inside the grid.
    pub fn contains(&self, x: usize, y: usize, z: usize) -> bool {
        x < self.size_x && y < self.size_y && z < self.size_z
    }

    /// Gets the cell at the given coordinates.
    ///
    /// # Arguments
    /// * `x`, `y`, `z` - Cell coordinates
    ///
    /// # Returns
    /// The stored cell, or `None` if the cell is empty or the coordinates lie
    /// outside the grid.
    pub fn get(&self, x: usize, y: usize, z: usize) -> Option<VoxelCell> {
        if !self.contains(x, y, z) {
            return None;
        }

        self.cells[self.index(x, y, z)]
    }

    /// Gets the cell at a coordinate given as an array.
    pub fn get_at(&self, position: [usize; 3]) -> Option<VoxelCell> {
        self.get(position[0], position[1], position[2])
    }

    /// Overwrites a single cell.
    ///
    /// # Arguments
    /// * `x`, `y`, `z` - Cell coordinates
    /// * `cell` - The new value, `None` to clear the cell
    ///
    /// # Errors
    /// Returns [`VoxelError::OutOfRange`] if the coordinates lie outside the
    /// grid. The grid is not modified in that case.
    pub fn set(&mut self, x: usize, y: usize, z: usize, cell: Option<VoxelCell>) -> Result<()> {
        if !self.contains(x, y, z) {
            return Err(VoxelError::OutOfRange {
                x,
                y,
                z,
                size_x: self.size_x,
                size_y: self.size_y,
                size_z: self.size_z,
            });
        }

        let index = self.index(x, y, z);
        self.cells[index] = cell;
        trace!("Placed voxel at ({}, {}, {})", x, y, z);
        Ok(())
    }

    /// Read-only view of the flat cell storage in index order.
    pub fn cells(&self) -> &[Option<VoxelCell>] {
        &self.cells
    }

    /// Converts in-range coordinates into a storage index.
    fn index(&self, x: usize, y: usize, z: usize) -> usize {
        x + self.size_x * (y + self.size_y * z)
    }

    /// Converts a storage index back into coordinates.
    fn position(&self, index: usize) -> [usize; 3] {
        let x = index % self.size_x;
        let y = (index / self.size_x) % self.size_y;
        let z = index / (self.size_x * self.size_y);
        [x, y, z]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: VoxelCell = VoxelCell {
        r: 1.0,
        g: 0.0,
        b: 0.0,
    };

    #[test]
    fn new_grid_is_empty() {
        let grid = VoxelGrid::new(3, 4, 5);
        assert_eq!(grid.volume(), 60);
        assert_eq!(grid.occupied_count(), 0);
        assert_eq!(grid.get(1, 2, 3), None);
    }

    #[test]
    fn set_then_get() {
        let mut grid = VoxelGrid::new(3, 4, 5);
        grid.set(2, 3, 4, Some(RED)).unwrap();
        assert_eq!(grid.get(2, 3, 4), Some(RED));
        assert_eq!(grid.occupied_count(), 1);

        grid.set(2, 3, 4, None).unwrap();
        assert_eq!(grid.get(2, 3, 4), None);
    }

    #[test]
    fn index_is_x_fastest() {
        let mut grid = VoxelGrid::new(3, 4, 5);
        grid.set(1, 2, 3, Some(RED)).unwrap();
        let index = 1 + 3 * (2 + 4 * 3);
        assert_eq!(grid.cells()[index], Some(RED));
        assert_eq!(grid.position(index), [1, 2, 3]);
    }

    #[test]
    fn upper_bound_is_exclusive() {
        let mut grid = VoxelGrid::new(2, 2, 2);
        grid.fill_cuboid(RED);

        assert_eq!(grid.get(2, 0, 0), None);
        assert_eq!(grid.get(0, 2, 0), None);
        assert_eq!(grid.get(0, 0, 2), None);
        assert_eq!(grid.get(usize::MAX, 0, 0), None);
        assert_eq!(grid.get(1, 1, 1), Some(RED));
    }

    #[test]
    fn out_of_range_set_fails_without_mutation() {
        let mut grid = VoxelGrid::new(2, 2, 2);
        let before = grid.clone();

        let result = grid.set(2, 0, 0, Some(RED));
        assert!(matches!(
            result,
            Err(VoxelError::OutOfRange { x: 2, y: 0, z: 0, .. })
        ));
        assert_eq!(grid, before);
    }

    #[test]
    fn degenerate_grid_reads_empty() {
        let mut grid = VoxelGrid::new(0, 4, 4);
        assert!(grid.is_degenerate());
        assert_eq!(grid.get(0, 0, 0), None);
        assert!(grid.set(0, 0, 0, Some(RED)).is_err());
    }

    #[test]
    fn max_extent_and_center() {
        let grid = VoxelGrid::new(3, 8, 5);
        assert_eq!(grid.max_extent(), 8);
        assert_eq!(grid.center(), Vector3::new(1.5, 4.0, 2.5));
    }
}
