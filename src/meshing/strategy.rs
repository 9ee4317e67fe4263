//! Selection between the meshing strategies.

use serde::{Deserialize, Serialize};

use crate::voxels::VoxelGrid;

use super::{culled, direct, greedy, mesh::Mesh};

/// How a grid is turned into a mesh.
///
/// All strategies cover the same visible surface. They differ in how many
/// faces they emit and how much work they do to avoid emitting them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeshingStrategy {
    /// Six faces for every occupied cell
    Direct,
    /// Only faces bordering empty space
    Culled,
    /// Visible faces merged into maximal same-colored rectangles
    #[default]
    Greedy,
}

impl MeshingStrategy {
    /// Every strategy, from least to most optimized.
    pub const ALL: [MeshingStrategy; 3] = [
        MeshingStrategy::Direct,
        MeshingStrategy::Culled,
        MeshingStrategy::Greedy,
    ];

    /// Lowercase name, matching the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            MeshingStrategy::Direct => "direct",
            MeshingStrategy::Culled => "culled",
            MeshingStrategy::Greedy => "greedy",
        }
    }

    /// Runs this strategy over `grid`.
    pub fn extract(self, grid: &VoxelGrid) -> Mesh {
        match self {
            MeshingStrategy::Direct => direct::extract(grid),
            MeshingStrategy::Culled => culled::extract(grid),
            MeshingStrategy::Greedy => greedy::extract(grid),
        }
    }
}
