//! # Voxel Cell Module
//!
//! This module defines the value stored at each occupied grid position.
//! Empty space is not a cell at all: the grid stores `Option<VoxelCell>` and
//! `None` means air.

use serde::{Deserialize, Serialize};

/// A single occupied voxel, carrying nothing but its color.
///
/// Cells have no identity beyond the grid position they are stored at, so they
/// are plain `Copy` values. Components are normalized to `[0, 1]`.
///
/// # Memory Layout
/// The `#[repr(C)]` attribute keeps the three floats contiguous so a cell can be
/// reinterpreted as `[f32; 3]` when building vertex colors.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Default, Serialize, Deserialize, bytemuck::Pod, bytemuck::Zeroable)]
pub struct VoxelCell {
    /// Red component
    pub r: f32,
    /// Green component
    pub g: f32,
    /// Blue component
    pub b: f32,
}

impl VoxelCell {
    /// Plain white, the color used when nothing else is specified.
    pub const WHITE: VoxelCell = VoxelCell {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    /// Creates a new cell of the given color.
    ///
    /// # Arguments
    /// * `r`, `g`, `b` - Color components, clamped into `[0, 1]`
    ///
    /// # Returns
    /// A new `VoxelCell` with the clamped color.
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        VoxelCell {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
        }
    }

    /// Creates a cell from 8-bit palette components, as found in voxel model files.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        VoxelCell {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Returns the color as an `[r, g, b]` array.
    pub fn color(&self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[f32; 3]> for VoxelCell {
    fn from(color: [f32; 3]) -> Self {
        VoxelCell::new(color[0], color[1], color[2])
    }
}
