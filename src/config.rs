//! # Scene Configuration
//!
//! Describes the grid the binary builds and how it is meshed. A scene is read
//! from JSON, for example:
//!
//! ```json
//! {
//!     "size": [64, 32, 64],
//!     "color": [0.4, 0.7, 0.3],
//!     "fill": { "method": "noise", "frequency": 0.08 },
//!     "strategy": "greedy",
//!     "obj_output": "terrain.obj"
//! }
//! ```
//!
//! Every field is optional and falls back to [`SceneConfig::default`].

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::info;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, VoxelError},
    meshing::MeshingStrategy,
    voxels::{VoxelCell, VoxelGrid},
};

/// Shape the grid is populated with.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "lowercase")]
pub enum FillMethod {
    /// Every cell
    Cuboid,
    /// The ellipsoid inscribed in the grid
    Ellipsoid,
    /// Cells where Perlin noise sampled at `frequency` is positive
    Noise {
        /// Sample spacing per cell
        frequency: f64,
    },
    /// Alternating cells, no two occupied cells sharing a face
    Checkerboard,
    /// Each cell occupied with probability `density`
    Random {
        /// Probability in `[0, 1]`
        density: f64,
        /// Generator seed, so scenes are reproducible
        seed: u64,
    },
}

/// A complete scene: grid, contents and meshing setup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Grid extents `[x, y, z]` in cells
    pub size: [usize; 3],
    /// `[r, g, b]` of every filled cell, each in `[0, 1]`
    pub color: [f32; 3],
    /// How the grid is populated
    pub fill: FillMethod,
    /// How the grid is meshed
    pub strategy: MeshingStrategy,
    /// Where to write the mesh as Wavefront OBJ, if anywhere
    pub obj_output: Option<PathBuf>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        SceneConfig {
            size: [32, 32, 32],
            color: [1.0, 1.0, 1.0],
            fill: FillMethod::Ellipsoid,
            strategy: MeshingStrategy::Greedy,
            obj_output: None,
        }
    }
}

impl SceneConfig {
    /// Parses and validates a scene from JSON text.
    ///
    /// # Errors
    /// [`VoxelError::Config`] if the text is not a valid scene, or
    /// [`VoxelError::InvalidConfig`] if it holds unusable values.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SceneConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates the scene file at `path`.
    ///
    /// # Errors
    /// [`VoxelError::Io`] if the file cannot be read, otherwise as
    /// [`SceneConfig::from_json_str`].
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        let config = SceneConfig::from_json_str(&text)?;
        info!("Loaded scene config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Checks the values serde cannot.
    ///
    /// # Errors
    /// [`VoxelError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if self.color.iter().any(|channel| !channel.is_finite()) {
            return Err(VoxelError::InvalidConfig(format!(
                "color {:?} has a non-finite channel",
                self.color
            )));
        }

        match self.fill {
            FillMethod::Noise { frequency } if !(frequency.is_finite() && frequency > 0.0) => {
                Err(VoxelError::InvalidConfig(format!(
                    "noise frequency must be positive, got {}",
                    frequency
                )))
            }
            FillMethod::Random { density, .. } if !(0.0..=1.0).contains(&density) => {
                Err(VoxelError::InvalidConfig(format!(
                    "random density must lie in [0, 1], got {}",
                    density
                )))
            }
            _ => Ok(()),
        }
    }

    /// Creates the grid this scene describes.
    pub fn build_grid(&self) -> VoxelGrid {
        let [size_x, size_y, size_z] = self.size;
        let mut grid = VoxelGrid::new(size_x, size_y, size_z);
        let cell = VoxelCell::from(self.color);

        match self.fill {
            FillMethod::Cuboid => grid.fill_cuboid(cell),
            FillMethod::Ellipsoid => grid.fill_ellipsoid(cell),
            FillMethod::Noise { frequency } => grid.fill_noise(cell, frequency),
            FillMethod::Checkerboard => grid.fill_checkerboard(cell),
            FillMethod::Random { density, seed } => grid.fill_random(cell, density, seed),
        };

        grid
    }
}
