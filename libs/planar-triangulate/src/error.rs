//! # Error Types
//!
//! Error types for triangulation. All errors are explicit and surface
//! synchronously to the caller of [`crate::triangulate_polygon`].
//!
//! ## Error Policy
//!
//! - Malformed input is rejected up front when it is cheap to detect
//! - Broken internal invariants abort the whole polygon, never a partial result
//! - Errors carry the vertex ids needed to locate the problem

use crate::dcel::DcelError;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while triangulating a polygon.
///
/// ## Example
///
/// ```rust
/// use planar_triangulate::{triangulate_polygon, TriangulationError};
///
/// match triangulate_polygon(&[0.0, 0.0, 0.0, 1.0]) {
///     Ok(tris) => println!("{} triangles", tris.len() / 9),
///     Err(TriangulationError::InvalidLength(len)) => eprintln!("bad length {len}"),
///     Err(e) => eprintln!("Other error: {e}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TriangulationError {
    /// The point buffer does not hold whole (x, y, z) triples.
    #[error("Point buffer length {0} is not a multiple of 3")]
    InvalidLength(usize),

    /// A coordinate is NaN or infinite.
    #[error("Vertex {0} has a non-finite coordinate")]
    NonFiniteCoordinate(usize),

    /// All points are collinear, so no supporting plane exists.
    #[error("Polygon has no supporting plane (all points are collinear)")]
    DegeneratePlane,

    /// Two vertices project onto the same working position, which leaves the
    /// sweep order undefined.
    #[error("Vertices {first} and {second} share the same position")]
    DuplicateVertex {
        /// Input index of the first vertex
        first: usize,
        /// Input index of the second vertex
        second: usize,
    },

    /// A DCEL mutation was rejected.
    #[error("Topology error: {0}")]
    Topology(#[from] DcelError),

    /// An internal algorithm invariant did not hold.
    ///
    /// This indicates either a bug or input violating the simple-polygon
    /// precondition (e.g. self-intersections).
    #[error("Internal invariant violated: {0}")]
    InvariantViolation(String),
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for triangulation operations.
pub type TriangulationResult<T> = Result<T, TriangulationError>;

// =============================================================================
// TESTS
// =============================================================================
