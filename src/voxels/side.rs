//! # Side Module
//!
//! This module defines the six axis-aligned faces of a voxel cell.

/// Represents the six possible faces of a voxel cell.
///
/// Each variant is assigned a unique integer value so per-side data can live in
/// plain `[T; 6]` arrays indexed with `side as usize`.
///
/// The order is: [+X, -X, +Y, -Y, +Z, -Z]
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum Side {
    /// The face pointing towards positive X
    PositiveX = 0,

    /// The face pointing towards negative X
    NegativeX = 1,

    /// The face pointing towards positive Y
    PositiveY = 2,

    /// The face pointing towards negative Y
    NegativeY = 3,

    /// The face pointing towards positive Z
    PositiveZ = 4,

    /// The face pointing towards negative Z
    NegativeZ = 5,
}

impl Side {
    /// Returns all six sides in index order.
    pub fn all() -> [Side; 6] {
        [
            Side::PositiveX,
            Side::NegativeX,
            Side::PositiveY,
            Side::NegativeY,
            Side::PositiveZ,
            Side::NegativeZ,
        ]
    }
}
