//! Mesh data structures and operations for voxel rendering.
//!
//! This module provides the output of every meshing strategy: a vertex buffer
//! and a triangle index buffer, plus the views a renderer needs to upload them
//! and a Wavefront OBJ export.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use cgmath::{InnerSpace, Vector3};
use log::info;

use crate::error::Result;

use super::vertex::Vertex;

/// A triangulated surface produced from a voxel grid.
///
/// `indices` is a triangle list: every three entries form one triangle whose
/// counter-clockwise winding faces away from the voxels it bounds. Vertices are
/// stored in first-seen order and contain no two entries equal under
/// [`Vertex::approx_eq`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    /// Distinct vertices
    pub vertices: Vec<Vertex>,
    /// Triangle corners as indices into `vertices`
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Creates a new, empty mesh.
    pub fn new() -> Self {
        Mesh::default()
    }

    /// Returns `true` if the mesh holds no geometry.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Number of quads in the mesh, every strategy emitting two triangles per quad.
    pub fn quad_count(&self) -> usize {
        self.indices.len() / 6
    }

    /// Total area of all triangles, in square cell units.
    pub fn surface_area(&self) -> f64 {
        self.indices
            .chunks_exact(3)
            .map(|triangle| {
                let [a, b, c] = [triangle[0], triangle[1], triangle[2]]
                    .map(|index| Vector3::from(self.vertices[index as usize].position));
                (b - a).cross(c - a).magnitude() as f64 / 2.0
            })
            .sum()
    }

    /// The vertex buffer as interleaved floats, [`Vertex::FLOATS`] per vertex.
    ///
    /// Each vertex contributes `x, y, z, r, g, b` in that order.
    pub fn vertex_data(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// The vertex buffer as raw bytes, ready for upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// The index buffer as raw bytes, ready for upload as 32-bit indices.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Writes the mesh as Wavefront OBJ.
    ///
    /// Vertices are written as `v x y z r g b` lines and triangles as 1-based
    /// `f a b c` lines. An incomplete trailing triangle is skipped.
    ///
    /// # Errors
    /// Propagates any error from `writer`.
    pub fn write_obj<W: Write>(&self, writer: &mut W) -> Result<()> {
        for vertex in &self.vertices {
            let [x, y, z] = vertex.position;
            let [r, g, b] = vertex.color;
            writeln!(writer, "v {} {} {} {} {} {}", x, y, z, r, g, b)?;
        }

        for triangle in self.indices.chunks_exact(3) {
            writeln!(
                writer,
                "f {} {} {}",
                triangle[0] + 1,
                triangle[1] + 1,
                triangle[2] + 1
            )?;
        }

        Ok(())
    }

    /// Writes the mesh as Wavefront OBJ to the file at `path`.
    ///
    /// # Errors
    /// Returns [`crate::error::VoxelError::Io`] if the file cannot be created or written.
    pub fn save_obj<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path.as_ref())?);
        self.write_obj(&mut writer)?;
        writer.flush()?;

        info!(
            "Saved mesh with {} vertices to {}",
            self.vertices.len(),
            path.as_ref().display()
        );

        Ok(())
    }
}
