//! Per-slice face mask for greedy meshing.
//!
//! A [`Mask2D`] covers one slice plane of the sweep. Each cell holds at most one
//! visible face crossing that plane, and [`Mask2D::take_quads`] run-length
//! merges matching faces into rectangles.

/// Which way a mask face points along the sweep axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FaceOrientation {
    /// Face of the cell after the plane, pointing back towards the predecessor.
    Front,
    /// Face of the cell before the plane, pointing forward into empty space.
    Back,
}

/// A visible face recorded on the mask.
///
/// Two faces merge only if every field is equal, so faces of equal color but
/// opposite orientation are never combined.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaskFace {
    /// `[r, g, b]` of the voxel owning the face
    pub color: [f32; 3],
    /// Direction the face points in
    pub orientation: FaceOrientation,
}

/// A merged rectangle of identical faces.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaskQuad {
    /// First column covered
    pub u: usize,
    /// First row covered
    pub v: usize,
    /// Columns covered
    pub width: usize,
    /// Rows covered
    pub height: usize,
    /// The face every covered cell held
    pub face: MaskFace,
}

/// Scratch buffer of optional faces for one slice plane, stored row-major.
#[derive(Clone, Debug)]
pub struct Mask2D {
    width: usize,
    height: usize,
    faces: Vec<Option<MaskFace>>,
}

impl Mask2D {
    /// Creates an empty mask of `width` columns and `height` rows.
    pub fn new(width: usize, height: usize) -> Self {
        Mask2D {
            width,
            height,
            faces: vec![None; width * height],
        }
    }

    /// Clears every cell so the mask can be reused for the next slice.
    pub fn reset(&mut self) {
        self.faces.fill(None);
    }

    /// Gets the face at column `u`, row `v`.
    pub fn get(&self, u: usize, v: usize) -> Option<MaskFace> {
        self.faces[self.index(u, v)]
    }

    /// Records (or clears) the face at column `u`, row `v`.
    pub fn set(&mut self, u: usize, v: usize, face: Option<MaskFace>) {
        let index = self.index(u, v);
        self.faces[index] = face;
    }

    /// Returns `true` if no cell holds a face.
    pub fn is_clear(&self) -> bool {
        self.faces.iter().all(Option::is_none)
    }

    /// Greedily merges the mask into rectangles, consuming every face.
    ///
    /// Cells are scanned row by row. From each remaining face the rectangle is
    /// first grown along the row while faces match, then grown row by row while
    /// the whole span matches. Covered cells are cleared before the scan moves
    /// past the rectangle, so each face ends up in exactly one quad.
    ///
    /// # Returns
    /// The merged rectangles in scan order. The mask is clear afterwards.
    pub fn take_quads(&mut self) -> Vec<MaskQuad> {
        let mut quads = Vec::new();

        for v in 0..self.height {
            let mut u = 0;
            while u < self.width {
                let Some(face) = self.get(u, v) else {
                    u += 1;
                    continue;
                };

                let mut width = 1;
                while u + width < self.width && self.get(u + width, v) == Some(face) {
                    width += 1;
                }

                let mut height = 1;
                'grow: while v + height < self.height {
                    for k in 0..width {
                        if self.get(u + k, v + height) != Some(face) {
                            break 'grow;
                        }
                    }
                    height += 1;
                }

                self.clear_rect(u, v, width, height);
                quads.push(MaskQuad {
                    u,
                    v,
                    width,
                    height,
                    face,
                });

                u += width;
            }
        }

        quads
    }

    fn clear_rect(&mut self, u: usize, v: usize, width: usize, height: usize) {
        for row in v..v + height {
            let start = self.index(u, row);
            self.faces[start..start + width].fill(None);
        }
    }

    fn index(&self, u: usize, v: usize) -> usize {
        u + self.width * v
    }
}
