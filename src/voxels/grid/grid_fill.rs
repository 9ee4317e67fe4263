//! # Grid Fill Module
//!
//! Region-fill primitives for [`VoxelGrid`]. Each primitive writes `cell` into
//! every position its shape selects, leaves all other positions untouched, and
//! returns how many cells it wrote.
//!
//! All primitives are deterministic: the noise fill depends only on the noise
//! function and frequency, and the random fill only on its seed.

use log::info;
use noise::{NoiseFn, Perlin};

use crate::voxels::cell::VoxelCell;

use super::VoxelGrid;

/// Noise samples strictly above this value mark a cell as occupied.
///
/// The field is sampled raw, in `[-1, 1]`, so roughly half of space is solid.
pub const NOISE_THRESHOLD: f64 = 0.0;

/// Seed of the Perlin generator used by [`VoxelGrid::fill_noise`].
pub const NOISE_SEED: u32 = 0;

impl VoxelGrid {
    /// Sets every cell in the grid.
    ///
    /// # Returns
    /// The number of cells filled, which is always the grid volume.
    pub fn fill_cuboid(&mut self, cell: VoxelCell) -> usize {
        self.fill_where(cell, "cuboid", |_, _, _| true)
    }

    /// Sets the cells inside the ellipsoid inscribed in the grid.
    ///
    /// A cell at `(x, y, z)` is filled when
    /// `((x-cx)/rx)² + ((y-cy)/ry)² + ((z-cz)/rz)² <= 1`, where the centers and
    /// radii are all half of the corresponding grid extent.
    ///
    /// # Returns
    /// The number of cells filled.
    pub fn fill_ellipsoid(&mut self, cell: VoxelCell) -> usize {
        let center = self.center();
        let radius = center;

        self.fill_where(cell, "ellipsoid", |x, y, z| {
            let dx = (x as f32 - center.x) / radius.x;
            let dy = (y as f32 - center.y) / radius.y;
            let dz = (z as f32 - center.z) / radius.z;
            dx * dx + dy * dy + dz * dz <= 1.0
        })
    }

    /// Sets the cells where Perlin noise sampled at `position * frequency`
    /// exceeds [`NOISE_THRESHOLD`].
    ///
    /// # Returns
    /// The number of cells filled.
    pub fn fill_noise(&mut self, cell: VoxelCell, frequency: f64) -> usize {
        let perlin = Perlin::new(NOISE_SEED);
        self.fill_noise_with(&perlin, cell, frequency)
    }

    /// Like [`VoxelGrid::fill_noise`], but samples a caller-provided noise function.
    pub fn fill_noise_with<N: NoiseFn<f64, 3>>(
        &mut self,
        noise: &N,
        cell: VoxelCell,
        frequency: f64,
    ) -> usize {
        self.fill_where(cell, "noise", |x, y, z| {
            let sample = noise.get([
                x as f64 * frequency,
                y as f64 * frequency,
                z as f64 * frequency,
            ]);
            sample > NOISE_THRESHOLD
        })
    }

    /// Sets every cell whose coordinate sum is even.
    ///
    /// No two filled cells share a face, which makes this pattern useful for
    /// checking that culling never removes anything it should not.
    ///
    /// # Returns
    /// The number of cells filled.
    pub fn fill_checkerboard(&mut self, cell: VoxelCell) -> usize {
        self.fill_where(cell, "checkerboard", |x, y, z| (x + y + z) % 2 == 0)
    }

    /// Sets each cell independently with probability `density`.
    ///
    /// # Arguments
    /// * `cell` - The value to write
    /// * `density` - Fill probability, clamped into `[0, 1]`
    /// * `seed` - Seed of the pseudo-random sequence; equal seeds fill equal cells
    ///
    /// # Returns
    /// The number of cells filled.
    pub fn fill_random(&mut self, cell: VoxelCell, density: f64, seed: u64) -> usize {
        let density = density.clamp(0.0, 1.0);
        let mut rng = fastrand::Rng::with_seed(seed);

        self.fill_where(cell, "random", |_, _, _| rng.f64() < density)
    }

    /// Visits every cell in storage order and writes `cell` where `predicate` holds.
    fn fill_where<F>(&mut self, cell: VoxelCell, shape: &str, mut predicate: F) -> usize
    where
        F: FnMut(usize, usize, usize) -> bool,
    {
        let mut counter = 0;

        for index in 0..self.cells.len() {
            let [x, y, z] = self.position(index);
            if predicate(x, y, z) {
                self.cells[index] = Some(cell);
                counter += 1;
            }
        }

        info!("Filled a total of {} voxels ({})", counter, shape);

        counter
    }
}
