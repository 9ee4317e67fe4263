//! # Grid Iteration Module
//!
//! An iterator over the occupied cells of a [`VoxelGrid`], yielding each cell
//! together with its position. Empty cells are skipped.
//!
//! Cells are visited in storage order (x fastest, then y, then z), so two walks
//! over the same grid always produce the same sequence. Mesh extraction relies
//! on this to emit vertices in a stable order.

use crate::voxels::cell::VoxelCell;

use super::VoxelGrid;

/// An iterator over all occupied cells in a grid.
pub struct OccupiedCells<'a> {
    /// Reference to the grid being walked
    grid_ref: &'a VoxelGrid,
    /// Next storage index to inspect
    current_offset: usize,
}

impl<'a> OccupiedCells<'a> {
    /// Creates an iterator positioned before the first cell of `grid_ref`.
    pub fn new(grid_ref: &'a VoxelGrid) -> Self {
        OccupiedCells {
            grid_ref,
            current_offset: 0,
        }
    }
}

impl Iterator for OccupiedCells<'_> {
    type Item = ([usize; 3], VoxelCell);

    fn next(&mut self) -> Option<Self::Item> {
        let cells = self.grid_ref.cells();

        while self.current_offset < cells.len() {
            let offset = self.current_offset;
            self.current_offset += 1;

            if let Some(cell) = cells[offset] {
                return Some((self.grid_ref.position(offset), cell));
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.grid_ref.volume() - self.current_offset;
        (0, Some(remaining))
    }
}

impl VoxelGrid {
    /// Returns an iterator over every occupied cell and its position.
    pub fn occupied(&self) -> OccupiedCells<'_> {
        OccupiedCells::new(self)
    }
}
