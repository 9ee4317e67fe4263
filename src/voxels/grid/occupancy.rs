//! # Occupancy Module
//!
//! A compact solidity bitmap of a [`VoxelGrid`], used for neighbor probing.
//!
//! ## Padding
//!
//! The bitmap stores one extra, always-empty layer of cells on every side of the
//! grid, so it is `(size + 2)` cells wide along each axis. Every in-grid cell
//! therefore has six addressable neighbors, and a face on the grid boundary
//! always sees an empty neighbor without a single bounds check.
//!
//! ### Performance Characteristics
//! - **Solidity Check**: O(1), one bit lookup
//! - **Memory Usage**: 1 bit per padded cell

use bitvec::vec::BitVec;

use crate::voxels::side::Side;

use super::VoxelGrid;

/// A padded 1-bit-per-cell occupancy snapshot of a grid.
pub struct Occupancy {
    /// Padded extent along X
    dimension_x: usize,
    /// Number of bits in one padded XY plane
    plane_size: usize,
    /// Bit per padded cell, set when the cell is occupied.
    ///
    /// Stored in the same x-fastest order as the grid, shifted by one along each axis.
    solid_array: BitVec,
}

impl Occupancy {
    /// Takes a snapshot of which cells of `grid` are occupied.
    pub fn new(grid: &VoxelGrid) -> Self {
        let [size_x, size_y, size_z] = grid.size();
        let dimension_x = size_x + 2;
        let plane_size = dimension_x * (size_y + 2);

        let mut occupancy = Occupancy {
            dimension_x,
            plane_size,
            solid_array: BitVec::repeat(false, plane_size * (size_z + 2)),
        };

        for ([x, y, z], _) in grid.occupied() {
            let offset = occupancy.offset(x + 1, y + 1, z + 1);
            occupancy.solid_array.set(offset, true);
        }

        occupancy
    }

    /// Checks if the cell at grid coordinates `(x, y, z)` is occupied.
    ///
    /// Coordinates are unpadded grid coordinates and must lie inside the grid.
    pub fn is_solid(&self, x: usize, y: usize, z: usize) -> bool {
        self.is_solid_padded(x + 1, y + 1, z + 1)
    }

    /// Determines which faces of the cell at `(x, y, z)` border empty space.
    ///
    /// # Arguments
    /// * `x`, `y`, `z` - Grid coordinates of an in-grid cell
    ///
    /// # Returns
    /// An array of 6 booleans in [`Side`] order, `true` where the neighbor across
    /// that side is empty or outside the grid and the face is therefore visible.
    pub fn exposed_sides(&self, x: usize, y: usize, z: usize) -> [bool; 6] {
        // Shift into padded space, where every neighbor exists.
        let i = x + 1;
        let j = y + 1;
        let k = z + 1;

        let mut exposed = [false; 6];
        exposed[Side::PositiveX as usize] = !self.is_solid_padded(i + 1, j, k);
        exposed[Side::NegativeX as usize] = !self.is_solid_padded(i - 1, j, k);
        exposed[Side::PositiveY as usize] = !self.is_solid_padded(i, j + 1, k);
        exposed[Side::NegativeY as usize] = !self.is_solid_padded(i, j - 1, k);
        exposed[Side::PositiveZ as usize] = !self.is_solid_padded(i, j, k + 1);
        exposed[Side::NegativeZ as usize] = !self.is_solid_padded(i, j, k - 1);
        exposed
    }

    fn is_solid_padded(&self, i: usize, j: usize, k: usize) -> bool {
        self.solid_array[self.offset(i, j, k)]
    }

    fn offset(&self, i: usize, j: usize, k: usize) -> usize {
        i + self.dimension_x * j + self.plane_size * k
    }
}
