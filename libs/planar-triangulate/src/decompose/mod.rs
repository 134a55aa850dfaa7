//! # Monotone Decomposition
//!
//! Plane sweep that inserts diagonals into the DCEL until every face is
//! monotone with respect to the sweep direction.
//!
//! ## Algorithm
//!
//! 1. Visit vertices top to bottom in sweep order
//! 2. Keep the boundary edges crossing the sweep line that have the polygon
//!    interior on their right, sorted left to right
//! 3. Give each of those edges a helper: the lowest vertex seen so far that
//!    can see the edge horizontally
//! 4. Split vertices connect up to a helper, merge vertices are connected
//!    down from the next vertex that takes over their helper role
//!
//! Edge ids are boundary edge indices: edge `i` runs from local vertex `i`
//! to its boundary successor. Only edges pointing down the sweep are ever
//! active. The active set is an ordered tree, so the whole pass stays
//! O(n log n) even when most edges cross the sweep line at once.

use crate::classify::{classify_all, VertexType};
use crate::dcel::Dcel;
use crate::error::{TriangulationError, TriangulationResult};
use crate::planar::{left, Vec2};
use crate::sweep::{sweep_cmp, SweepLine};
use log::{debug, trace};
use std::cmp::Ordering;
use std::collections::BTreeSet;

// =============================================================================
// ACTIVE EDGES
// =============================================================================

/// Id of a query key that stands for a single vertex.
const POINT: usize = usize::MAX;

/// Sort key of an active edge.
///
/// Active edges never cross, so their left-to-right order along the sweep
/// line does not change while they are active. Two keys are compared at the
/// upper endpoint of whichever edge starts later, which lies within the
/// vertical extent of the other edge.
#[derive(Debug, Clone, Copy)]
struct EdgeKey {
    upper: Vec2,
    lower: Vec2,
    id: usize,
}

impl EdgeKey {
    /// Key of boundary edge `e`, which runs down from local vertex `e`.
    fn edge(dcel: &Dcel<'_>, e: usize) -> Self {
        Self {
            upper: dcel.point(e),
            lower: dcel.point(dcel.next_vertex(e)),
            id: e,
        }
    }

    /// Query key at vertex `v`. Only edges strictly left of `v` order
    /// before it.
    fn point(dcel: &Dcel<'_>, v: usize) -> Self {
        let p = dcel.point(v);
        Self {
            upper: p,
            lower: p,
            id: POINT,
        }
    }

    /// Order of this edge against point `p`.
    fn side_of(&self, p: Vec2) -> Ordering {
        if left(self.upper, self.lower, p) > 0.0 {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }

    /// Order of `self` against `other`, where `other` starts no higher.
    fn order_against(&self, other: &Self) -> Ordering {
        // Active edges point down: a point on the left of the directed edge
        // lies to the right of it on the sweep line.
        let mut turn = left(self.upper, self.lower, other.upper);
        if turn == 0.0 {
            turn = left(self.upper, self.lower, other.lower);
        }
        if turn > 0.0 {
            Ordering::Less
        } else if turn < 0.0 {
            Ordering::Greater
        } else {
            self.id.cmp(&other.id)
        }
    }
}

impl Ord for EdgeKey {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.id == other.id {
            return Ordering::Equal;
        }
        if other.id == POINT {
            return self.side_of(other.upper);
        }
        if self.id == POINT {
            return other.side_of(self.upper).reverse();
        }
        match sweep_cmp(self.upper, other.upper) {
            Ordering::Greater => other.order_against(self).reverse(),
            _ => self.order_against(other),
        }
    }
}

impl PartialOrd for EdgeKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for EdgeKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for EdgeKey {}

/// Boundary edges currently crossing the sweep line, left to right.
///
/// Backed by a `BTreeSet`, so insertion, removal and the left-neighbour
/// query each cost O(log k) for k active edges.
#[derive(Debug, Clone, Default)]
pub struct ActiveEdges {
    edges: BTreeSet<EdgeKey>,
}

impl ActiveEdges {
    /// Creates an empty status.
    pub fn new() -> Self {
        Self::default()
    }

    /// Active edge ids, left to right.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.edges.iter().map(|key| key.id)
    }

    /// Number of active edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether no edge is active.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Starts tracking edge `e`, whose upper endpoint is local vertex `e`.
    pub fn insert(&mut self, dcel: &Dcel<'_>, e: usize) {
        self.edges.insert(EdgeKey::edge(dcel, e));
    }

    /// Stops tracking edge `e`.
    ///
    /// # Errors
    ///
    /// [`TriangulationError::InvariantViolation`] when `e` is not active.
    pub fn remove(&mut self, dcel: &Dcel<'_>, e: usize) -> TriangulationResult<()> {
        if self.edges.remove(&EdgeKey::edge(dcel, e)) {
            Ok(())
        } else {
            Err(TriangulationError::InvariantViolation(format!(
                "edge {e} is not active"
            )))
        }
    }

    /// The active edge immediately left of vertex `v`.
    pub fn find_left_edge(&self, dcel: &Dcel<'_>, v: usize) -> TriangulationResult<usize> {
        self.edges
            .range(..EdgeKey::point(dcel, v))
            .next_back()
            .map(|key| key.id)
            .ok_or_else(|| {
                TriangulationError::InvariantViolation(format!(
                    "no active edge left of vertex {}",
                    dcel.original_id(v)
                ))
            })
    }
}

// =============================================================================
// DECOMPOSER
// =============================================================================

/// Sweep state of one decomposition pass.
struct Decomposer<'d, 'a> {
    dcel: &'d mut Dcel<'a>,
    types: Vec<VertexType>,
    helpers: Vec<Option<usize>>,
    active: ActiveEdges,
    diagonals: usize,
}

impl<'d, 'a> Decomposer<'d, 'a> {
    fn helper(&self, e: usize) -> TriangulationResult<usize> {
        self.helpers[e].ok_or_else(|| {
            TriangulationError::InvariantViolation(format!("edge {e} has no helper"))
        })
    }

    fn start_edge(&mut self, e: usize, helper: usize) {
        self.active.insert(self.dcel, e);
        self.helpers[e] = Some(helper);
    }

    fn retire_edge(&mut self, e: usize) -> TriangulationResult<()> {
        self.active.remove(self.dcel, e)?;
        self.helpers[e] = None;
        Ok(())
    }

    fn connect(&mut self, a: usize, b: usize) -> TriangulationResult<()> {
        self.dcel.connect(a, b)?;
        self.diagonals += 1;
        trace!(
            "decompose: diagonal {}-{}",
            self.dcel.original_id(a),
            self.dcel.original_id(b)
        );
        Ok(())
    }

    /// Connects `v` to the helper of `e` when that helper is a merge vertex.
    fn fix_up(&mut self, v: usize, e: usize) -> TriangulationResult<()> {
        let helper = self.helper(e)?;
        if self.types[helper] == VertexType::Merge {
            self.connect(v, helper)?;
        }
        Ok(())
    }

    fn handle(&mut self, v: usize, ranks: (usize, usize)) -> TriangulationResult<()> {
        let incoming = self.dcel.prev_vertex(v);
        match self.types[v] {
            VertexType::Start => self.start_edge(v, v),
            VertexType::End => {
                self.fix_up(v, incoming)?;
                self.retire_edge(incoming)?;
            }
            VertexType::Split => {
                let e = self.dcel.find_left_edge(&self.active, v)?;
                let helper = self.helper(e)?;
                self.connect(v, helper)?;
                self.helpers[e] = Some(v);
                self.start_edge(v, v);
            }
            VertexType::Merge => {
                self.fix_up(v, incoming)?;
                self.retire_edge(incoming)?;
                let e = self.dcel.find_left_edge(&self.active, v)?;
                self.fix_up(v, e)?;
                self.helpers[e] = Some(v);
            }
            VertexType::Regular => {
                let (rank, prev_rank) = ranks;
                if prev_rank < rank {
                    // Boundary runs downward here: interior lies to the right
                    self.fix_up(v, incoming)?;
                    self.retire_edge(incoming)?;
                    self.start_edge(v, v);
                } else {
                    let e = self.dcel.find_left_edge(&self.active, v)?;
                    self.fix_up(v, e)?;
                    self.helpers[e] = Some(v);
                }
            }
        }
        Ok(())
    }
}

/// Splits the polygon held by `dcel` into monotone faces.
///
/// Returns the number of diagonals inserted; zero means the polygon was
/// already monotone and `dcel` is unchanged.
///
/// # Errors
///
/// [`TriangulationError::InvariantViolation`] when the sweep status becomes
/// inconsistent, which only happens for non-simple input.
pub fn decompose_monotone(dcel: &mut Dcel<'_>, sweep: &SweepLine) -> TriangulationResult<usize> {
    let n = dcel.vertex_count();
    let types = classify_all(dcel, sweep);
    let mut state = Decomposer {
        dcel,
        types,
        helpers: vec![None; n],
        active: ActiveEdges::new(),
        diagonals: 0,
    };

    for (rank, v) in sweep.iter().enumerate() {
        let prev_rank = sweep.rank_of(state.dcel.prev_vertex(v));
        state.handle(v, (rank, prev_rank))?;
    }

    if !state.active.is_empty() {
        return Err(TriangulationError::InvariantViolation(format!(
            "{} edges still active after the sweep",
            state.active.len()
        )));
    }

    debug!(
        "decompose: {} vertices, {} diagonals, {} faces",
        n,
        state.diagonals,
        state.dcel.face_count()
    );
    Ok(state.diagonals)
}
