//! Vertex interning for mesh extraction.
//!
//! Every strategy pushes each emitted corner through a [`VertexDeduplicator`],
//! so a corner shared by several faces appears once in the output.
//!
//! ## Hashing under approximate equality
//!
//! Vertices are equal when every component differs by less than
//! [`VERTEX_EPSILON`]. Hashing raw float bits would disagree with that
//! predicate, so components are instead quantized into buckets of width
//! [`BUCKET_WIDTH`]. A component lying within epsilon of a bucket edge may have
//! equal partners in the adjacent bucket, so lookups also probe that neighbor.
//! Candidates found this way are confirmed with [`Vertex::approx_eq`].
//!
//! Buckets are centered on multiples of the bucket width, which keeps the
//! integer and half-integer coordinates produced by voxel meshing far from
//! bucket edges, so the common case probes exactly one bucket.

use std::collections::HashMap;

use super::vertex::{Vertex, VERTEX_EPSILON};

/// Width of one quantization bucket along each component.
pub const BUCKET_WIDTH: f32 = 1.0 / 256.0;

type BucketKey = [i64; 6];

/// Maps vertices to output indices under epsilon equality.
///
/// One deduplicator is used per extraction. Indices are handed out in first-seen
/// order, so interning the same vertex sequence twice yields the same indices.
#[derive(Debug, Default)]
pub struct VertexDeduplicator {
    /// Distinct vertices in first-seen order
    vertices: Vec<Vertex>,
    /// Indices of the vertices stored under each bucket, ascending
    buckets: HashMap<BucketKey, Vec<u32>>,
}

impl VertexDeduplicator {
    /// Creates an empty deduplicator.
    pub fn new() -> Self {
        VertexDeduplicator::default()
    }

    /// Returns the index of `vertex`, appending it if no equal vertex is known.
    ///
    /// When several stored vertices are within epsilon of `vertex`, the one
    /// interned first wins.
    ///
    /// # Arguments
    /// * `vertex` - The vertex to look up
    ///
    /// # Returns
    /// The output index of `vertex` or of its stored equal.
    pub fn intern(&mut self, vertex: Vertex) -> u32 {
        if let Some(index) = self.find(&vertex) {
            return index;
        }

        let index = self.vertices.len() as u32;
        self.vertices.push(vertex);
        self.buckets
            .entry(Self::bucket_key(&vertex))
            .or_default()
            .push(index);
        index
    }

    /// Looks up `vertex` without inserting it.
    pub fn find(&self, vertex: &Vertex) -> Option<u32> {
        let mut best: Option<u32> = None;

        for key in Self::candidate_keys(vertex) {
            let Some(indices) = self.buckets.get(&key) else {
                continue;
            };

            let found = indices
                .iter()
                .copied()
                .find(|&index| self.vertices[index as usize].approx_eq(vertex));

            if let Some(index) = found {
                best = Some(best.map_or(index, |current| current.min(index)));
            }
        }

        best
    }

    /// Number of distinct vertices interned so far.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if nothing has been interned.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The distinct vertices in index order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Consumes the deduplicator, returning the distinct vertices in index order.
    pub fn into_vertices(self) -> Vec<Vertex> {
        self.vertices
    }

    fn bucket_of(component: f32) -> i64 {
        (component / BUCKET_WIDTH + 0.5).floor() as i64
    }

    fn bucket_key(vertex: &Vertex) -> BucketKey {
        vertex.components().map(Self::bucket_of)
    }

    /// Every bucket that may hold a vertex within epsilon of `vertex`.
    fn candidate_keys(vertex: &Vertex) -> Vec<BucketKey> {
        let home = Self::bucket_key(vertex);
        let mut keys = vec![home];

        for (axis, component) in vertex.components().into_iter().enumerate() {
            // Generous margin so rounding in the edge test can only add probes.
            let lower = Self::bucket_of(component - 2.0 * VERTEX_EPSILON);
            let upper = Self::bucket_of(component + 2.0 * VERTEX_EPSILON);

            for neighbor in [lower, upper] {
                if neighbor == home[axis] {
                    continue;
                }
                let extra: Vec<BucketKey> = keys
                    .iter()
                    .map(|key| {
                        let mut key = *key;
                        key[axis] = neighbor;
                        key
                    })
                    .collect();
                keys.extend(extra);
            }
        }

        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Vector3;

    fn vertex(x: f32, y: f32, z: f32) -> Vertex {
        Vertex::new(Vector3::new(x, y, z), [1.0, 1.0, 1.0])
    }

    #[test]
    fn equal_vertices_share_an_index() {
        let mut dedup = VertexDeduplicator::new();
        let a = dedup.intern(vertex(1.0, 2.0, 3.0));
        let b = dedup.intern(vertex(-1.0, 2.0, 3.0));
        let c = dedup.intern(vertex(1.0, 2.0, 3.0));

        assert_eq!(a, 0);
        assert_eq!(b, 1);
        assert_eq!(c, a);
        assert_eq!(dedup.len(), 2);
    }

    #[test]
    fn near_vertices_share_an_index() {
        let mut dedup = VertexDeduplicator::new();
        let base = vertex(0.5, 0.5, 0.5);
        let mut nudged = base;
        nudged.position[0] += VERTEX_EPSILON * 0.5;
        nudged.color[1] -= VERTEX_EPSILON * 0.5;

        assert_eq!(dedup.intern(base), dedup.intern(nudged));
        assert_eq!(dedup.len(), 1);
    }

    #[test]
    fn near_vertices_across_bucket_edge_share_an_index() {
        let mut dedup = VertexDeduplicator::new();
        let edge = BUCKET_WIDTH * 0.5;
        let below = vertex(edge - VERTEX_EPSILON * 0.25, 0.0, 0.0);
        let above = vertex(edge + VERTEX_EPSILON * 0.25, 0.0, 0.0);
        assert!(below.approx_eq(&above));

        assert_eq!(dedup.intern(below), dedup.intern(above));
    }

    #[test]
    fn distinct_colors_stay_distinct() {
        let mut dedup = VertexDeduplicator::new();
        let white = vertex(0.0, 0.0, 0.0);
        let red = Vertex::new(Vector3::new(0.0, 0.0, 0.0), [1.0, 0.0, 0.0]);

        assert_ne!(dedup.intern(white), dedup.intern(red));
    }

    #[test]
    fn find_does_not_insert() {
        let mut dedup = VertexDeduplicator::new();
        assert_eq!(dedup.find(&vertex(0.0, 0.0, 0.0)), None);
        assert!(dedup.is_empty());

        dedup.intern(vertex(0.0, 0.0, 0.0));
        assert_eq!(dedup.find(&vertex(0.0, 0.0, 0.0)), Some(0));
    }

    #[test]
    fn no_duplicates_under_epsilon() {
        let mut dedup = VertexDeduplicator::new();
        for i in 0..64 {
            let offset = (i % 4) as f32 * VERTEX_EPSILON * 0.1;
            dedup.intern(vertex((i / 4) as f32 + offset, 0.0, 0.0));
        }

        let vertices = dedup.vertices();
        assert_eq!(vertices.len(), 16);
        for (i, a) in vertices.iter().enumerate() {
            for b in &vertices[i + 1..] {
                assert!(!a.approx_eq(b));
            }
        }
    }
}
