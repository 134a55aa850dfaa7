//! # Monotone Triangulation
//!
//! Linear-time triangulation of one monotone face with a stack of vertices
//! that still need diagonals. Diagonals are recorded in the DCEL as they are
//! found, so the face count doubles as a completeness check.

use crate::dcel::Dcel;
use crate::error::{TriangulationError, TriangulationResult};
use crate::sweep::SweepLine;
use log::trace;

/// Side of the face a vertex lies on, split at the top and bottom vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chain {
    /// Reached walking forward from the top vertex
    Left,
    /// Reached walking backward from the top vertex
    Right,
}

/// Chain of every local vertex of a monotone face.
///
/// The top and bottom vertices are tagged [`Chain::Left`].
pub fn chains(dcel: &Dcel<'_>, sweep: &SweepLine) -> Vec<Chain> {
    let k = dcel.vertex_count();
    let mut tags = vec![Chain::Right; k];
    if k == 0 {
        return tags;
    }
    let (top, bottom) = (sweep.vertex(0), sweep.vertex(k - 1));
    let mut v = top;
    loop {
        tags[v] = Chain::Left;
        if v == bottom {
            break;
        }
        v = dcel.next_vertex(v);
    }
    tags
}

/// Appends triangle `(a, b, c)` to `out`, counter-clockwise in the working
/// plane.
fn emit(dcel: &Dcel<'_>, out: &mut Vec<f32>, a: usize, b: usize, c: usize) -> TriangulationResult<()> {
    let (b, c) = if dcel.left(a, b, c) < 0.0 { (c, b) } else { (b, c) };
    for v in [a, b, c] {
        dcel.find_by_id(v)?.append_to(out);
    }
    Ok(())
}

fn underflow(v: usize) -> TriangulationError {
    TriangulationError::InvariantViolation(format!("vertex stack underflow at local vertex {v}"))
}

/// Triangulates the single monotone face of `dcel`, appending the triangles
/// to `out` as original coordinates.
///
/// `sweep` must be the sweep order of `dcel`. Returns the number of
/// triangles written, always `k - 2` for a face of `k` vertices.
///
/// # Errors
///
/// [`TriangulationError::InvariantViolation`] when the face turns out not
/// to be monotone, and [`TriangulationError::Topology`] when a diagonal
/// cannot be inserted.
pub fn triangulate_monotone(
    dcel: &mut Dcel<'_>,
    sweep: &SweepLine,
    out: &mut Vec<f32>,
) -> TriangulationResult<usize> {
    let k = dcel.vertex_count();
    if k < 3 {
        return Ok(0);
    }
    if k == 3 {
        dcel.append_to(out);
        return Ok(1);
    }

    let chain = chains(dcel, sweep);
    let order = sweep.as_slice();
    let mut stack = Vec::with_capacity(k);
    stack.push(order[0]);
    stack.push(order[1]);

    for &v in &order[2..k - 1] {
        let top = *stack.last().ok_or_else(|| underflow(v))?;
        if chain[v] != chain[top] {
            // Fan from v over the whole reflex chain on the other side
            for pair in stack.windows(2) {
                emit(dcel, out, pair[0], pair[1], v)?;
            }
            for &s in &stack[1..] {
                dcel.connect(v, s)?;
            }
            stack.clear();
            stack.push(top);
            stack.push(v);
        } else {
            let mut last = stack.pop().ok_or_else(|| underflow(v))?;
            while let Some(&below) = stack.last() {
                let turn = match chain[v] {
                    Chain::Left => dcel.left(below, last, v),
                    Chain::Right => dcel.left(v, last, below),
                };
                if turn <= 0.0 {
                    break;
                }
                dcel.connect(v, below)?;
                emit(dcel, out, below, last, v)?;
                last = below;
                stack.pop();
            }
            stack.push(last);
            stack.push(v);
        }
    }

    let bottom = order[k - 1];
    if stack.len() < 2 {
        return Err(underflow(bottom));
    }
    for pair in stack.windows(2) {
        emit(dcel, out, pair[0], pair[1], bottom)?;
    }
    for &s in &stack[1..stack.len() - 1] {
        dcel.connect(bottom, s)?;
    }

    if dcel.face_count() != k - 2 {
        return Err(TriangulationError::InvariantViolation(format!(
            "face of {k} vertices split into {} faces",
            dcel.face_count()
        )));
    }
    trace!("monotone: {} triangles", k - 2);
    Ok(k - 2)
}
