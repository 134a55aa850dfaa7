//! # Sweep Line
//!
//! Total order over the vertices of a DCEL: top to bottom by working `y`,
//! left to right by working `x` on ties. Both the order and its inverse
//! (vertex -> rank) are kept.

use crate::dcel::Dcel;
use crate::error::{TriangulationError, TriangulationResult};
use crate::planar::Vec2;
use std::cmp::Ordering;

/// Sweep ordering key: `a` before `b` when it is higher, or level and to
/// the left.
///
/// # Examples
/// ```
/// use std::cmp::Ordering;
/// use planar_triangulate::planar::Vec2;
/// use planar_triangulate::sweep::sweep_cmp;
///
/// let top = Vec2::new(5.0, 2.0);
/// let low = Vec2::new(0.0, 1.0);
/// assert_eq!(sweep_cmp(top, low), Ordering::Less);
/// assert_eq!(sweep_cmp(Vec2::new(0.0, 1.0), Vec2::new(3.0, 1.0)), Ordering::Less);
/// ```
pub fn sweep_cmp(a: Vec2, b: Vec2) -> Ordering {
    b.y.partial_cmp(&a.y)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal))
}

/// Vertex order for a plane sweep.
#[derive(Debug, Clone, Default)]
pub struct SweepLine {
    /// Local vertex at each rank
    order: Vec<usize>,
    /// Rank of each local vertex
    ranks: Vec<usize>,
}

impl SweepLine {
    /// Builds the sweep order of `dcel`.
    ///
    /// # Errors
    ///
    /// [`TriangulationError::DuplicateVertex`] when two vertices share both
    /// working coordinates.
    pub fn create(dcel: &Dcel<'_>) -> TriangulationResult<Self> {
        let mut sweep = Self::default();
        sweep.rebuild(dcel)?;
        Ok(sweep)
    }

    /// Recomputes the order for `dcel` in place, reusing the buffers.
    pub fn rebuild(&mut self, dcel: &Dcel<'_>) -> TriangulationResult<()> {
        let n = dcel.vertex_count();
        self.order.clear();
        self.order.extend(0..n);
        self.order
            .sort_unstable_by(|&a, &b| sweep_cmp(dcel.point(a), dcel.point(b)));

        if let Some(pair) = self
            .order
            .windows(2)
            .find(|pair| sweep_cmp(dcel.point(pair[0]), dcel.point(pair[1])) == Ordering::Equal)
        {
            let (a, b) = (dcel.original_id(pair[0]), dcel.original_id(pair[1]));
            return Err(TriangulationError::DuplicateVertex {
                first: a.min(b),
                second: a.max(b),
            });
        }

        self.ranks.clear();
        self.ranks.resize(n, 0);
        for (rank, &v) in self.order.iter().enumerate() {
            self.ranks[v] = rank;
        }
        Ok(())
    }

    /// Number of vertices in the order.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the order is empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Local vertex at `rank`.
    pub fn vertex(&self, rank: usize) -> usize {
        self.order[rank]
    }

    /// Rank of local vertex `v`.
    pub fn rank_of(&self, v: usize) -> usize {
        self.ranks[v]
    }

    /// Whether `a` is swept before `b`.
    pub fn is_before(&self, a: usize, b: usize) -> bool {
        self.ranks[a] < self.ranks[b]
    }

    /// Vertices in sweep order.
    pub fn as_slice(&self) -> &[usize] {
        &self.order
    }

    /// Iterates vertices in sweep order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.order.iter().copied()
    }

    /// Capacity of the scratch buffers.
    pub fn capacity(&self) -> usize {
        self.order.capacity().min(self.ranks.capacity())
    }
}
