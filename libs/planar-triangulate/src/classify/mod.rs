//! # Vertex Classification
//!
//! Labels polygon vertices by the sweep position of their two boundary
//! neighbours and the turn they make. A polygon without split or merge
//! vertices is already monotone with respect to the sweep direction.

use crate::dcel::Dcel;
use crate::sweep::SweepLine;

/// Role of a vertex in the plane sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexType {
    /// Both neighbours below, convex interior angle
    Start,
    /// Both neighbours above, convex interior angle
    End,
    /// Both neighbours below, reflex interior angle
    Split,
    /// Both neighbours above, reflex interior angle
    Merge,
    /// One neighbour above, one below
    Regular,
}

impl VertexType {
    /// Whether this vertex breaks monotonicity.
    pub fn is_split_or_merge(self) -> bool {
        matches!(self, VertexType::Split | VertexType::Merge)
    }
}

/// Classifies a vertex from the ranks of itself and its boundary neighbours
/// and `turn = left(prev, v, next)`.
///
/// A non-negative turn counts as convex.
///
/// # Examples
/// ```
/// use planar_triangulate::classify::{classify, VertexType};
///
/// // Both neighbours swept later, left turn
/// assert_eq!(classify(0, 2, 1, 1.0), VertexType::Start);
/// assert_eq!(classify(3, 1, 2, -1.0), VertexType::Merge);
/// assert_eq!(classify(1, 0, 2, -5.0), VertexType::Regular);
/// ```
pub fn classify(rank: usize, prev_rank: usize, next_rank: usize, turn: f64) -> VertexType {
    let convex = turn >= 0.0;
    match (prev_rank > rank, next_rank > rank) {
        (true, true) if convex => VertexType::Start,
        (true, true) => VertexType::Split,
        (false, false) if convex => VertexType::End,
        (false, false) => VertexType::Merge,
        _ => VertexType::Regular,
    }
}

/// Types of every local vertex of `dcel`, indexed by local vertex.
pub fn classify_all(dcel: &Dcel<'_>, sweep: &SweepLine) -> Vec<VertexType> {
    let mut types = vec![VertexType::Regular; dcel.vertex_count()];
    for rank in 0..sweep.len() {
        types[sweep.vertex(rank)] = dcel.discover_type(sweep, rank);
    }
    types
}

#[cfg(test)]
mod tests;
