//! # Polygon
//!
//! Owned point buffer that can be built up vertex by vertex and triangulated
//! on demand. The triangulation is computed on first request and kept until
//! the polygon is modified.

use crate::error::TriangulationResult;
use crate::triangulate::triangulate_polygon;
use config::constants::{FLOATS_PER_TRIANGLE, FLOATS_PER_VERTEX};
use std::sync::OnceLock;

/// A planar polygon with a lazily computed triangulation.
///
/// # Examples
/// ```
/// use planar_triangulate::Polygon;
///
/// let mut polygon = Polygon::new();
/// polygon.push_2d(0.0, 0.0);
/// polygon.push_2d(2.0, 0.0);
/// polygon.push_2d(2.0, 2.0);
/// polygon.push_2d(0.0, 2.0);
///
/// assert_eq!(polygon.triangle_count().unwrap(), 2);
/// assert_eq!(polygon.triangulation().unwrap().len(), 18);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Polygon {
    data: Vec<f32>,
    triangles: OnceLock<TriangulationResult<Vec<f32>>>,
}

impl Polygon {
    /// Creates an empty polygon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty polygon with room for `vertices` points.
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            data: Vec::with_capacity(vertices * FLOATS_PER_VERTEX),
            triangles: OnceLock::new(),
        }
    }

    /// Appends a vertex.
    pub fn push(&mut self, x: f32, y: f32, z: f32) {
        self.data.extend_from_slice(&[x, y, z]);
        self.triangles.take();
    }

    /// Appends a vertex on the `z = 0` plane.
    pub fn push_2d(&mut self, x: f32, y: f32) {
        self.push(x, y, 0.0);
    }

    /// Removes every vertex.
    pub fn clear(&mut self) {
        self.data.clear();
        self.triangles.take();
    }

    /// Number of complete vertices.
    pub fn len(&self) -> usize {
        self.data.len() / FLOATS_PER_VERTEX
    }

    /// Whether the polygon has no vertex.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Flat `(x, y, z)` buffer.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Triangle buffer of the polygon, computed on first call.
    ///
    /// A failed triangulation is cached as well; the same error is returned
    /// until the polygon changes.
    pub fn triangulation(&self) -> TriangulationResult<&[f32]> {
        self.triangles
            .get_or_init(|| triangulate_polygon(&self.data))
            .as_deref()
            .map_err(Clone::clone)
    }

    /// Number of triangles in [`Polygon::triangulation`].
    pub fn triangle_count(&self) -> TriangulationResult<usize> {
        Ok(self.triangulation()?.len() / FLOATS_PER_TRIANGLE)
    }

    /// Whether the triangulation has already been computed.
    pub fn is_triangulated(&self) -> bool {
        self.triangles.get().is_some()
    }

    /// Gives back the point buffer.
    pub fn into_inner(self) -> Vec<f32> {
        self.data
    }
}

impl From<Vec<f32>> for Polygon {
    fn from(data: Vec<f32>) -> Self {
        Self {
            data,
            triangles: OnceLock::new(),
        }
    }
}

impl From<&[f32]> for Polygon {
    fn from(data: &[f32]) -> Self {
        Self::from(data.to_vec())
    }
}

impl AsRef<[f32]> for Polygon {
    fn as_ref(&self) -> &[f32] {
        &self.data
    }
}
