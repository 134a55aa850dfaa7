//! # Planar Vertex Set
//!
//! Turns a flat `(x, y, z)` buffer into vertices carrying both their original
//! coordinates (emitted verbatim) and a 2D working position on the polygon's
//! supporting plane (used by every orientation and ordering test).
//!
//! ## Projection
//!
//! The Newell normal of the polygon picks the axis to drop: the component
//! with the largest magnitude. The two remaining coordinates are kept in
//! cyclic order (`Z -> (x, y)`, `X -> (y, z)`, `Y -> (z, x)`) and the first one
//! is negated when the normal points down that axis. Dropping an axis is
//! exact, and the sign fix makes every working polygon counter-clockwise.

use crate::error::{TriangulationError, TriangulationResult};
use config::constants::FLOATS_PER_VERTEX;
use robust::{orient2d, Coord};

pub use glam::{DVec2 as Vec2, DVec3 as Vec3};

// =============================================================================
// PLANAR VERTEX
// =============================================================================

/// A polygon vertex with its original and projected coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanarVertex {
    /// Position in the input buffer
    pub id: usize,
    /// Original x coordinate
    pub x: f32,
    /// Original y coordinate
    pub y: f32,
    /// Original z coordinate
    pub z: f32,
    /// Working position on the supporting plane
    pub projected: Vec2,
}

impl PlanarVertex {
    /// Projected x coordinate.
    pub fn xp(&self) -> f64 {
        self.projected.x
    }

    /// Projected y coordinate.
    pub fn yp(&self) -> f64 {
        self.projected.y
    }

    /// Appends the original coordinates to an output buffer.
    pub fn append_to(&self, out: &mut Vec<f32>) {
        out.extend_from_slice(&[self.x, self.y, self.z]);
    }
}

// =============================================================================
// PROJECTION
// =============================================================================

/// Axis discarded when projecting onto the working plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DroppedAxis {
    /// Keep `(y, z)`
    X,
    /// Keep `(z, x)`
    Y,
    /// Keep `(x, y)`
    Z,
}

/// Mapping from 3D input coordinates to the 2D working plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Projection {
    /// Axis that is discarded
    pub dropped: DroppedAxis,
    /// Whether the first working coordinate is negated
    pub mirrored: bool,
}

impl Projection {
    /// Identity projection onto the XY plane.
    pub const XY: Self = Self {
        dropped: DroppedAxis::Z,
        mirrored: false,
    };

    /// Picks the projection for a polygon with the given (Newell) normal.
    ///
    /// Returns `None` for a zero or non-finite normal. Ties between
    /// components prefer Z, then Y.
    ///
    /// # Examples
    /// ```
    /// use planar_triangulate::planar::{DroppedAxis, Projection, Vec3};
    ///
    /// let p = Projection::from_normal(Vec3::new(0.0, 0.0, -2.0)).unwrap();
    /// assert_eq!(p.dropped, DroppedAxis::Z);
    /// assert!(p.mirrored);
    /// ```
    pub fn from_normal(normal: Vec3) -> Option<Self> {
        if !normal.is_finite() || normal == Vec3::ZERO {
            return None;
        }
        let a = normal.abs();
        let (dropped, component) = if a.z >= a.x && a.z >= a.y {
            (DroppedAxis::Z, normal.z)
        } else if a.y >= a.x {
            (DroppedAxis::Y, normal.y)
        } else {
            (DroppedAxis::X, normal.x)
        };
        Some(Self {
            dropped,
            mirrored: component < 0.0,
        })
    }

    /// Projects a 3D point onto the working plane.
    pub fn project(&self, p: Vec3) -> Vec2 {
        let v = match self.dropped {
            DroppedAxis::X => Vec2::new(p.y, p.z),
            DroppedAxis::Y => Vec2::new(p.z, p.x),
            DroppedAxis::Z => Vec2::new(p.x, p.y),
        };
        if self.mirrored {
            Vec2::new(-v.x, v.y)
        } else {
            v
        }
    }
}

/// Newell normal of a closed loop: twice its vector area.
///
/// Its direction follows the right-hand rule over the loop's winding.
pub fn newell_normal(points: &[Vec3]) -> Vec3 {
    let Some(&origin) = points.first() else {
        return Vec3::ZERO;
    };
    let n = points.len();
    (0..n).fold(Vec3::ZERO, |acc, i| {
        acc + (points[i] - origin).cross(points[(i + 1) % n] - origin)
    })
}

// =============================================================================
// PREDICATES
// =============================================================================

/// Orientation of `r` relative to the directed line `p -> q`.
///
/// Positive when `r` lies to the left, zero when collinear, negative when to
/// the right. Evaluated with adaptive precision so the sign is exact.
///
/// # Examples
/// ```
/// use planar_triangulate::planar::{left, Vec2};
///
/// let p = Vec2::new(0.0, 0.0);
/// let q = Vec2::new(1.0, 0.0);
/// assert!(left(p, q, Vec2::new(0.5, 1.0)) > 0.0);
/// assert!(left(p, q, Vec2::new(0.5, -1.0)) < 0.0);
/// assert_eq!(left(p, q, Vec2::new(2.0, 0.0)), 0.0);
/// ```
pub fn left(p: Vec2, q: Vec2, r: Vec2) -> f64 {
    orient2d(
        Coord { x: p.x, y: p.y },
        Coord { x: q.x, y: q.y },
        Coord { x: r.x, y: r.y },
    )
}

/// Signed area of a closed 2D loop (shoelace formula).
///
/// Positive for counter-clockwise loops.
pub fn signed_area(points: &[Vec2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let twice: f64 = (0..n)
        .map(|i| points[i].perp_dot(points[(i + 1) % n]))
        .sum();
    twice / 2.0
}

// =============================================================================
// VERTEX SET
// =============================================================================

/// The vertices of one input polygon, projected onto its plane.
#[derive(Debug, Clone)]
pub struct PlanarVertexSet {
    vertices: Vec<PlanarVertex>,
    projection: Projection,
}

impl PlanarVertexSet {
    /// Builds the vertex set from a flat `(x, y, z)` buffer.
    ///
    /// Sets with fewer than three vertices use the identity projection.
    ///
    /// # Errors
    ///
    /// - [`TriangulationError::InvalidLength`] if `points.len()` is not a
    ///   multiple of 3
    /// - [`TriangulationError::NonFiniteCoordinate`] for NaN or infinities
    /// - [`TriangulationError::DegeneratePlane`] when three or more points are
    ///   all collinear
    ///
    /// # Examples
    /// ```
    /// use planar_triangulate::planar::PlanarVertexSet;
    ///
    /// let set = PlanarVertexSet::from_points(&[
    ///     0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0,
    /// ])
    /// .unwrap();
    /// assert_eq!(set.len(), 4);
    /// assert!(set.needs_triangulation());
    /// ```
    pub fn from_points(points: &[f32]) -> TriangulationResult<Self> {
        if points.len() % FLOATS_PER_VERTEX != 0 {
            return Err(TriangulationError::InvalidLength(points.len()));
        }

        let mut originals = Vec::with_capacity(points.len() / FLOATS_PER_VERTEX);
        for (id, xyz) in points.chunks_exact(FLOATS_PER_VERTEX).enumerate() {
            if !xyz.iter().all(|c| c.is_finite()) {
                return Err(TriangulationError::NonFiniteCoordinate(id));
            }
            originals.push([xyz[0], xyz[1], xyz[2]]);
        }

        let projection = if originals.len() < 3 {
            Projection::XY
        } else {
            let positions: Vec<Vec3> = originals
                .iter()
                .map(|&[x, y, z]| Vec3::new(f64::from(x), f64::from(y), f64::from(z)))
                .collect();
            Projection::from_normal(newell_normal(&positions))
                .ok_or(TriangulationError::DegeneratePlane)?
        };

        let vertices = originals
            .into_iter()
            .enumerate()
            .map(|(id, [x, y, z])| PlanarVertex {
                id,
                x,
                y,
                z,
                projected: projection.project(Vec3::new(
                    f64::from(x),
                    f64::from(y),
                    f64::from(z),
                )),
            })
            .collect();

        Ok(Self {
            vertices,
            projection,
        })
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the set holds no vertex.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Whether the polygon is large enough to need triangulation.
    pub fn needs_triangulation(&self) -> bool {
        self.vertices.len() >= config::constants::MIN_TRIANGULATION_VERTICES
    }

    /// All vertices in input order.
    pub fn vertices(&self) -> &[PlanarVertex] {
        &self.vertices
    }

    /// Projection used for the working coordinates.
    pub fn projection(&self) -> Projection {
        self.projection
    }

    /// Signed area of the polygon in the working plane.
    ///
    /// Non-negative for any input the set accepted.
    pub fn working_area(&self) -> f64 {
        let projected: Vec<Vec2> = self.vertices.iter().map(|v| v.projected).collect();
        signed_area(&projected)
    }
}
