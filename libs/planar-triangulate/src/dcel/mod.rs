//! # Doubly-Connected Edge List
//!
//! Index-based half-edge structure over the vertices of one polygon. The
//! vertex records are borrowed from the owning [`PlanarVertexSet`]; the DCEL
//! only stores local vertex indices and the local -> original id map.
//!
//! ## Layout
//!
//! - Boundary edge `i` runs from local vertex `i` to `i + 1 mod k`. It only has
//!   an interior half-edge; the outer face is not represented.
//! - A diagonal owns two twin half-edges, one in each face it separates.
//! - Every open face is a counter-clockwise cycle of half-edges.
//!
//! [`PlanarVertexSet`]: crate::planar::PlanarVertexSet

use crate::classify::{classify, VertexType};
use crate::decompose::ActiveEdges;
use crate::error::TriangulationResult;
use crate::planar::{left, PlanarVertex, Vec2};
use crate::sweep::SweepLine;
use log::trace;
use thiserror::Error;

// =============================================================================
// IDENTIFIERS
// =============================================================================

/// Unique identifier for half-edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HalfEdgeId(pub usize);

/// Unique identifier for faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceId(pub usize);

// =============================================================================
// RECORDS
// =============================================================================

/// Half-edge record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HalfEdge {
    /// Local vertex this half-edge starts from
    pub origin: usize,
    /// Opposite half-edge, present for diagonals only
    pub twin: Option<HalfEdgeId>,
    /// Next half-edge around the face
    pub next: HalfEdgeId,
    /// Previous half-edge around the face
    pub prev: HalfEdgeId,
    /// Face on the left of this half-edge
    pub face: FaceId,
}

/// Face record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
    /// One half-edge of the face cycle
    pub first: HalfEdgeId,
    /// Number of half-edges (and vertices) in the cycle
    pub len: usize,
    /// False once the face has been extracted
    pub open: bool,
}

// =============================================================================
// ERRORS
// =============================================================================

/// Topology errors raised by DCEL mutations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DcelError {
    /// Vertex index out of range
    #[error("Invalid vertex reference: {0}")]
    InvalidVertex(usize),

    /// Diagonal from a vertex to itself
    #[error("Cannot connect vertex {0} to itself")]
    SameVertex(usize),

    /// Vertices already joined by an edge
    #[error("Vertices {a} and {b} are already connected")]
    AlreadyConnected {
        /// First endpoint
        a: usize,
        /// Second endpoint
        b: usize,
    },

    /// No open face has both vertices on its boundary
    #[error("Vertices {a} and {b} share no open face")]
    NoSharedFace {
        /// First endpoint
        a: usize,
        /// Second endpoint
        b: usize,
    },

    /// Half-edge links are inconsistent
    #[error("Inconsistent half-edge topology at {0:?}")]
    InconsistentTopology(HalfEdgeId),
}

/// Result type for DCEL operations
pub type DcelResult<T> = Result<T, DcelError>;

// =============================================================================
// DCEL
// =============================================================================

/// Half-edge graph over one polygon (or one extracted face of it).
#[derive(Debug, Clone)]
pub struct Dcel<'a> {
    /// Vertex records of the whole input polygon
    vertices: &'a [PlanarVertex],
    /// Local vertex -> index into `vertices`
    ids: Vec<usize>,
    /// Half-edge storage
    half_edges: Vec<HalfEdge>,
    /// Face storage, never shrinks
    faces: Vec<Face>,
    /// Faces not yet extracted
    open_faces: Vec<FaceId>,
    /// Outgoing half-edges per local vertex
    outgoing: Vec<Vec<HalfEdgeId>>,
}

impl<'a> Dcel<'a> {
    /// Builds the boundary-only DCEL of a whole vertex set.
    pub fn new(vertices: &'a [PlanarVertex]) -> Self {
        Self::from_ids(vertices, (0..vertices.len()).collect())
    }

    /// Builds a boundary-only DCEL over `ids`, taken as a closed
    /// counter-clockwise loop. Local vertex `i` is `vertices[ids[i]]`.
    pub fn from_ids(vertices: &'a [PlanarVertex], ids: Vec<usize>) -> Self {
        let k = ids.len();
        let half_edges = (0..k)
            .map(|i| HalfEdge {
                origin: i,
                twin: None,
                next: HalfEdgeId((i + 1) % k),
                prev: HalfEdgeId((i + k - 1) % k),
                face: FaceId(0),
            })
            .collect();
        let (faces, open_faces) = if k == 0 {
            (Vec::new(), Vec::new())
        } else {
            (
                vec![Face {
                    first: HalfEdgeId(0),
                    len: k,
                    open: true,
                }],
                vec![FaceId(0)],
            )
        };
        Self {
            vertices,
            ids,
            half_edges,
            faces,
            open_faces,
            outgoing: (0..k).map(|i| vec![HalfEdgeId(i)]).collect(),
        }
    }

    // -------------------------------------------------------------------------
    // Vertex access
    // -------------------------------------------------------------------------

    /// Number of local vertices.
    pub fn vertex_count(&self) -> usize {
        self.ids.len()
    }

    /// Number of open (not yet extracted) faces.
    pub fn face_count(&self) -> usize {
        self.open_faces.len()
    }

    /// Number of half-edges, diagonals included.
    pub fn half_edge_count(&self) -> usize {
        self.half_edges.len()
    }

    /// Vertex record of a local vertex.
    pub fn find_by_id(&self, v: usize) -> DcelResult<&PlanarVertex> {
        self.ids
            .get(v)
            .and_then(|&id| self.vertices.get(id))
            .ok_or(DcelError::InvalidVertex(v))
    }

    /// Input index of a local vertex.
    ///
    /// `v` must be a valid local index.
    pub fn original_id(&self, v: usize) -> usize {
        self.vertices[self.ids[v]].id
    }

    /// Working position of a local vertex.
    ///
    /// `v` must be a valid local index.
    pub fn point(&self, v: usize) -> Vec2 {
        self.vertices[self.ids[v]].projected
    }

    /// Boundary successor of a local vertex.
    pub fn next_vertex(&self, v: usize) -> usize {
        (v + 1) % self.ids.len()
    }

    /// Boundary predecessor of a local vertex.
    pub fn prev_vertex(&self, v: usize) -> usize {
        (v + self.ids.len() - 1) % self.ids.len()
    }

    /// Orientation test on local vertices (see [`crate::planar::left`]).
    pub fn left(&self, p: usize, q: usize, r: usize) -> f64 {
        left(self.point(p), self.point(q), self.point(r))
    }

    /// Classifies the vertex at sweep rank `rank` by its boundary neighbours.
    pub fn discover_type(&self, sweep: &SweepLine, rank: usize) -> VertexType {
        let v = sweep.vertex(rank);
        let prev = self.prev_vertex(v);
        let next = self.next_vertex(v);
        classify(
            rank,
            sweep.rank_of(prev),
            sweep.rank_of(next),
            self.left(prev, v, next),
        )
    }

    /// Active boundary edge immediately left of local vertex `v`.
    ///
    /// See [`ActiveEdges::find_left_edge`].
    pub fn find_left_edge(&self, active: &ActiveEdges, v: usize) -> TriangulationResult<usize> {
        active.find_left_edge(self, v)
    }

    // -------------------------------------------------------------------------
    // Half-edge access
    // -------------------------------------------------------------------------

    /// Local vertex a half-edge points to.
    fn destination(&self, h: HalfEdgeId) -> usize {
        self.half_edges[self.half_edges[h.0].next.0].origin
    }

    fn check_vertex(&self, v: usize) -> DcelResult<()> {
        if v < self.ids.len() {
            Ok(())
        } else {
            Err(DcelError::InvalidVertex(v))
        }
    }

    /// True iff a boundary edge or a diagonal joins `a` and `b`.
    pub fn is_connected(&self, a: usize, b: usize) -> bool {
        if a >= self.ids.len() || b >= self.ids.len() {
            return false;
        }
        self.outgoing[a].iter().any(|&h| self.destination(h) == b)
            || self.outgoing[b].iter().any(|&h| self.destination(h) == a)
    }

    /// Outgoing half-edges of `a` and `b` lying on the same open face.
    fn shared_corner(&self, a: usize, b: usize) -> Option<(HalfEdgeId, HalfEdgeId)> {
        self.outgoing[a].iter().find_map(|&ha| {
            let face = self.half_edges[ha.0].face;
            if !self.faces[face.0].open {
                return None;
            }
            self.outgoing[b]
                .iter()
                .find(|&&hb| self.half_edges[hb.0].face == face)
                .map(|&hb| (ha, hb))
        })
    }

    // -------------------------------------------------------------------------
    // Mutation
    // -------------------------------------------------------------------------

    /// Adds the diagonal `a - b`, splitting the face both vertices lie on.
    ///
    /// The face keeps its id on the longer side; the shorter cycle is
    /// relabelled with a new face id, which bounds the relabelling work.
    ///
    /// # Errors
    ///
    /// Fails when `a == b`, either index is out of range, the vertices are
    /// already connected, or they share no open face.
    pub fn connect(&mut self, a: usize, b: usize) -> DcelResult<()> {
        self.check_vertex(a)?;
        self.check_vertex(b)?;
        if a == b {
            return Err(DcelError::SameVertex(a));
        }
        if self.is_connected(a, b) {
            return Err(DcelError::AlreadyConnected { a, b });
        }
        let (ha, hb) = self
            .shared_corner(a, b)
            .ok_or(DcelError::NoSharedFace { a, b })?;

        let face = self.half_edges[ha.0].face;
        let pa = self.half_edges[ha.0].prev;
        let pb = self.half_edges[hb.0].prev;
        let d1 = HalfEdgeId(self.half_edges.len());
        let d2 = HalfEdgeId(d1.0 + 1);

        // d1 closes the cycle a -> b -> ... -> a, d2 the cycle b -> a -> ... -> b
        self.half_edges.push(HalfEdge {
            origin: a,
            twin: Some(d2),
            next: hb,
            prev: pa,
            face,
        });
        self.half_edges.push(HalfEdge {
            origin: b,
            twin: Some(d1),
            next: ha,
            prev: pb,
            face,
        });
        self.half_edges[pa.0].next = d1;
        self.half_edges[hb.0].prev = d1;
        self.half_edges[pb.0].next = d2;
        self.half_edges[ha.0].prev = d2;
        self.outgoing[a].push(d1);
        self.outgoing[b].push(d2);

        let (short, short_len) = self.shorter_cycle(d1, d2);
        let long = if short == d1 { d2 } else { d1 };
        let total = self.faces[face.0].len + 2;

        let new_face = FaceId(self.faces.len());
        self.faces[face.0] = Face {
            first: long,
            len: total - short_len,
            open: true,
        };
        self.faces.push(Face {
            first: short,
            len: short_len,
            open: true,
        });
        self.open_faces.push(new_face);

        let mut h = short;
        loop {
            self.half_edges[h.0].face = new_face;
            h = self.half_edges[h.0].next;
            if h == short {
                break;
            }
        }

        trace!(
            "dcel: diagonal {}-{} split face {:?} ({} + {} vertices)",
            self.original_id(a),
            self.original_id(b),
            face,
            total - short_len,
            short_len
        );
        Ok(())
    }

    /// Walks both cycles in lockstep; returns the start and length of the
    /// shorter one.
    fn shorter_cycle(&self, d1: HalfEdgeId, d2: HalfEdgeId) -> (HalfEdgeId, usize) {
        let (mut x, mut y) = (d1, d2);
        let mut steps = 1;
        loop {
            x = self.half_edges[x.0].next;
            y = self.half_edges[y.0].next;
            if x == d1 {
                return (d1, steps);
            }
            if y == d2 {
                return (d2, steps);
            }
            steps += 1;
        }
    }

    // -------------------------------------------------------------------------
    // Faces
    // -------------------------------------------------------------------------

    /// Ids of the open faces.
    pub fn faces(&self) -> &[FaceId] {
        &self.open_faces
    }

    /// Local vertices around a face, in counter-clockwise order.
    pub fn face_vertices(&self, face: FaceId) -> Vec<usize> {
        let Some(record) = self.faces.get(face.0) else {
            return Vec::new();
        };
        let mut out = Vec::with_capacity(record.len);
        let mut h = record.first;
        loop {
            out.push(self.half_edges[h.0].origin);
            h = self.half_edges[h.0].next;
            if h == record.first || out.len() > self.half_edges.len() {
                break;
            }
        }
        out
    }

    /// Removes one open face and returns it as a standalone boundary-only
    /// DCEL carrying the original vertex ids. `None` once every face has
    /// been extracted.
    pub fn remove_sub_polygon(&mut self) -> Option<Dcel<'a>> {
        let face = self.open_faces.pop()?;
        self.faces[face.0].open = false;
        let ids = self
            .face_vertices(face)
            .into_iter()
            .map(|v| self.ids[v])
            .collect();
        Some(Dcel::from_ids(self.vertices, ids))
    }

    // -------------------------------------------------------------------------
    // Serialization
    // -------------------------------------------------------------------------

    /// Original coordinates of the boundary, in local order.
    pub fn to_array(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(3 * self.ids.len());
        self.append_to(&mut out);
        out
    }

    /// Appends the original coordinates of the boundary to `out`.
    pub fn append_to(&self, out: &mut Vec<f32>) {
        for &id in &self.ids {
            self.vertices[id].append_to(out);
        }
    }

    // -------------------------------------------------------------------------
    // Validation
    // -------------------------------------------------------------------------

    /// Checks twin, next/prev and face-length consistency.
    pub fn validate(&self) -> DcelResult<()> {
        for (i, he) in self.half_edges.iter().enumerate() {
            let id = HalfEdgeId(i);
            let next = self
                .half_edges
                .get(he.next.0)
                .ok_or(DcelError::InconsistentTopology(id))?;
            if next.prev != id {
                return Err(DcelError::InconsistentTopology(id));
            }
            if let Some(twin) = he.twin {
                let twin_he = self
                    .half_edges
                    .get(twin.0)
                    .ok_or(DcelError::InconsistentTopology(id))?;
                if twin_he.twin != Some(id) || self.destination(twin) != he.origin {
                    return Err(DcelError::InconsistentTopology(id));
                }
            }
        }
        for &face in &self.open_faces {
            let record = self.faces[face.0];
            let cycle = self.face_vertices(face);
            if cycle.len() != record.len {
                return Err(DcelError::InconsistentTopology(record.first));
            }
            let mut h = record.first;
            for _ in 0..record.len {
                if self.half_edges[h.0].face != face {
                    return Err(DcelError::InconsistentTopology(h));
                }
                h = self.half_edges[h.0].next;
            }
        }
        Ok(())
    }
}
