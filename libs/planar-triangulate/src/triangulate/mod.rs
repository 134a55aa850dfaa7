//! # Polygon Triangulation
//!
//! Entry point tying the pipeline together:
//!
//! ```text
//! flat points -> PlanarVertexSet -> Dcel + SweepLine
//!             -> decompose_monotone (only if split/merge vertices exist)
//!             -> triangulate_monotone per face -> flat triangles
//! ```
//!
//! The call is all-or-nothing: any error discards the partial output.

use crate::dcel::Dcel;
use crate::decompose::decompose_monotone;
use crate::error::{TriangulationError, TriangulationResult};
use crate::monotone::triangulate_monotone;
use crate::planar::PlanarVertexSet;
use crate::sweep::SweepLine;
use config::constants::{triangle_buffer_len, FLOATS_PER_VERTEX, MIN_TRIANGULATION_VERTICES};
use log::debug;

/// Triangulates a simple planar polygon.
///
/// `points` holds `(x, y, z)` triples in boundary order, either winding,
/// without a repeated closing vertex. The result holds `N - 2` triangles of
/// nine floats each, every vertex copied bit-for-bit from the input.
/// Polygons with fewer than four vertices are returned unchanged.
///
/// # Errors
///
/// - [`TriangulationError::InvalidLength`] if `points.len()` is not a
///   multiple of 3
/// - [`TriangulationError::NonFiniteCoordinate`],
///   [`TriangulationError::DegeneratePlane`] or
///   [`TriangulationError::DuplicateVertex`] for unusable input
/// - [`TriangulationError::InvariantViolation`] or
///   [`TriangulationError::Topology`] when the polygon is not simple
///
/// # Examples
/// ```
/// use planar_triangulate::triangulate_polygon;
///
/// let square = [
///     0.0, 0.0, 0.0, //
///     1.0, 0.0, 0.0, //
///     1.0, 1.0, 0.0, //
///     0.0, 1.0, 0.0,
/// ];
/// let tris = triangulate_polygon(&square).unwrap();
/// assert_eq!(tris.len(), 18);
/// ```
pub fn triangulate_polygon(points: &[f32]) -> TriangulationResult<Vec<f32>> {
    if points.len() % FLOATS_PER_VERTEX != 0 {
        return Err(TriangulationError::InvalidLength(points.len()));
    }
    let n = points.len() / FLOATS_PER_VERTEX;
    if n < MIN_TRIANGULATION_VERTICES {
        return Ok(points.to_vec());
    }

    let set = PlanarVertexSet::from_points(points)?;
    let mut dcel = Dcel::new(set.vertices());
    let mut sweep = SweepLine::create(&dcel)?;
    let mut out = Vec::with_capacity(triangle_buffer_len(n));

    let diagonals = decompose_monotone(&mut dcel, &sweep)?;
    if diagonals == 0 {
        triangulate_monotone(&mut dcel, &sweep, &mut out)?;
    } else {
        let mut faces = 0;
        while let Some(mut face) = dcel.remove_sub_polygon() {
            sweep.rebuild(&face)?;
            triangulate_monotone(&mut face, &sweep, &mut out)?;
            faces += 1;
        }
        debug!("triangulate: drained {faces} monotone faces");
    }

    let expected = triangle_buffer_len(n);
    if out.len() != expected {
        return Err(TriangulationError::InvariantViolation(format!(
            "expected {} triangle floats, produced {}",
            expected,
            out.len()
        )));
    }
    debug!(
        "triangulate: {} vertices -> {} triangles ({} diagonals)",
        n,
        n - 2,
        diagonals
    );
    Ok(out)
}
