//! # Error Module
//!
//! Errors surfaced by grid mutation, scene configuration and mesh export.
//!
//! Reads never fail: a coordinate outside the grid simply reads as empty space.
//! Extraction never fails either; a degenerate grid produces an empty mesh.

use thiserror::Error;

/// The error type for every fallible operation in this crate.
#[derive(Debug, Error)]
pub enum VoxelError {
    /// A write addressed a cell outside the grid bounds.
    ///
    /// The grid is left untouched when this is returned.
    #[error("cell ({x}, {y}, {z}) is outside the {size_x}x{size_y}x{size_z} grid")]
    OutOfRange {
        /// Requested X coordinate
        x: usize,
        /// Requested Y coordinate
        y: usize,
        /// Requested Z coordinate
        z: usize,
        /// Grid extent along X
        size_x: usize,
        /// Grid extent along Y
        size_y: usize,
        /// Grid extent along Z
        size_z: usize,
    },

    /// Reading a scene file or writing a mesh export failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The scene description is not valid JSON for [`crate::config::SceneConfig`].
    #[error("malformed scene config: {0}")]
    Config(#[from] serde_json::Error),

    /// The scene description parsed but holds values that cannot be used.
    #[error("invalid scene config: {0}")]
    InvalidConfig(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, VoxelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_cell_and_grid() {
        let error = VoxelError::OutOfRange {
            x: 4,
            y: 0,
            z: 1,
            size_x: 4,
            size_y: 2,
            size_z: 2,
        };

        assert_eq!(error.to_string(), "cell (4, 0, 1) is outside the 4x2x2 grid");
    }

    #[test]
    fn json_errors_convert() {
        let json_error = serde_json::from_str::<u32>("not json").unwrap_err();
        let error: VoxelError = json_error.into();
        assert!(matches!(error, VoxelError::Config(_)));
    }
}
