//! Shared fixtures and checks for the integration tests.

#![allow(dead_code)]

use std::collections::HashSet;

/// Flattens 2D points onto `z = 0`.
pub fn flat(points: &[(f32, f32)]) -> Vec<f32> {
    points.iter().flat_map(|&(x, y)| [x, y, 0.0]).collect()
}

/// Reverses the vertex order of a flat buffer.
pub fn reversed(points: &[f32]) -> Vec<f32> {
    points.chunks_exact(3).rev().flatten().copied().collect()
}

/// Twice the vector area of a closed loop (Newell normal).
pub fn newell(points: &[f32]) -> [f64; 3] {
    let v: Vec<[f64; 3]> = points
        .chunks_exact(3)
        .map(|p| [f64::from(p[0]), f64::from(p[1]), f64::from(p[2])])
        .collect();
    let mut n = [0.0; 3];
    for i in 0..v.len() {
        let (a, b) = (v[i], v[(i + 1) % v.len()]);
        n[0] += (a[1] - b[1]) * (a[2] + b[2]);
        n[1] += (a[2] - b[2]) * (a[0] + b[0]);
        n[2] += (a[0] - b[0]) * (a[1] + b[1]);
    }
    n
}

fn norm(v: [f64; 3]) -> f64 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}

/// Area of a planar polygon in 3D.
pub fn polygon_area(points: &[f32]) -> f64 {
    norm(newell(points)) / 2.0
}

/// Area of each triangle in a flat triangle buffer.
pub fn triangle_areas(tris: &[f32]) -> Vec<f64> {
    tris.chunks_exact(9)
        .map(|t| {
            let p: Vec<[f64; 3]> = t
                .chunks_exact(3)
                .map(|c| [f64::from(c[0]), f64::from(c[1]), f64::from(c[2])])
                .collect();
            let u = [p[1][0] - p[0][0], p[1][1] - p[0][1], p[1][2] - p[0][2]];
            let w = [p[2][0] - p[0][0], p[2][1] - p[0][1], p[2][2] - p[0][2]];
            norm([
                u[1] * w[2] - u[2] * w[1],
                u[2] * w[0] - u[0] * w[2],
                u[0] * w[1] - u[1] * w[0],
            ]) / 2.0
        })
        .collect()
}

/// Signed XY area of each triangle.
pub fn signed_xy_areas(tris: &[f32]) -> Vec<f64> {
    tris.chunks_exact(9)
        .map(|t| {
            let (ax, ay) = (f64::from(t[0]), f64::from(t[1]));
            let (bx, by) = (f64::from(t[3]), f64::from(t[4]));
            let (cx, cy) = (f64::from(t[6]), f64::from(t[7]));
            ((bx - ax) * (cy - ay) - (by - ay) * (cx - ax)) / 2.0
        })
        .collect()
}

/// Bit patterns of every vertex in a flat buffer.
pub fn vertex_bits(points: &[f32]) -> HashSet<[u32; 3]> {
    points
        .chunks_exact(3)
        .map(|p| [p[0].to_bits(), p[1].to_bits(), p[2].to_bits()])
        .collect()
}

/// Regular `n`-gon around the origin, counter-clockwise.
pub fn regular(n: usize, radius: f32) -> Vec<f32> {
    (0..n)
        .flat_map(|i| {
            let a = i as f32 / n as f32 * std::f32::consts::TAU;
            [radius * a.cos(), radius * a.sin(), 0.0]
        })
        .collect()
}

/// Star with `spikes` outer points, alternating between two radii.
pub fn star(spikes: usize, outer: f32, inner: f32) -> Vec<f32> {
    let n = 2 * spikes;
    (0..n)
        .flat_map(|i| {
            let a = 0.1 + i as f32 / n as f32 * std::f32::consts::TAU;
            let r = if i % 2 == 0 { outer } else { inner };
            [r * a.cos(), r * a.sin(), 0.0]
        })
        .collect()
}

/// Band following an Archimedean spiral for two full turns.
pub fn spiral() -> Vec<f32> {
    let steps = 63;
    let radius = |t: f32| 1.0 + 0.25 * t;
    let angle = |i: usize| i as f32 * 0.2;
    let mut points = Vec::with_capacity(6 * steps);
    for i in 0..steps {
        let (t, r) = (angle(i), radius(angle(i)) + 0.6);
        points.extend_from_slice(&[r * t.cos(), r * t.sin(), 0.0]);
    }
    for i in (0..steps).rev() {
        let (t, r) = (angle(i), radius(angle(i)));
        points.extend_from_slice(&[r * t.cos(), r * t.sin(), 0.0]);
    }
    points
}

/// Square with a notch rising from the bottom edge and one hanging from the
/// top edge.
pub fn notched() -> Vec<f32> {
    flat(&[(0.0, 0.0), (2.0, 1.0), (4.0, 0.0), (4.0, 4.0), (2.0, 3.0), (0.0, 4.0)])
}

/// Comb with three teeth hanging from a top bar.
pub fn comb() -> Vec<f32> {
    wide_comb(3)
}

/// Comb with `teeth` unit-wide teeth hanging from a top bar. Every tooth
/// edge crosses the sweep line at `y = 1` at once.
pub fn wide_comb(teeth: usize) -> Vec<f32> {
    let mut points = Vec::with_capacity(4 * teeth);
    for i in 0..teeth {
        let x = 2.0 * i as f32;
        points.extend_from_slice(&[(x, 0.0), (x + 1.0, 0.0)]);
        if i + 1 < teeth {
            points.extend_from_slice(&[(x + 1.0, 2.0), (x + 2.0, 2.0)]);
        }
    }
    let right = 2.0 * teeth as f32 - 1.0;
    points.extend_from_slice(&[(right, 4.0), (0.0, 4.0)]);
    flat(&points)
}

/// Checks the properties every successful triangulation of a simple polygon
/// must have.
pub fn assert_valid_triangulation(points: &[f32], tris: &[f32]) {
    let n = points.len() / 3;
    assert_eq!(tris.len(), 9 * (n - 2), "triangle count");

    let input = vertex_bits(points);
    let output = vertex_bits(tris);
    assert!(output.is_subset(&input), "output vertex not taken from input");
    assert_eq!(output.len(), input.len(), "input vertex left unused");

    let expected = polygon_area(points);
    let actual: f64 = triangle_areas(tris).iter().sum();
    assert!(
        (expected - actual).abs() <= 1e-4 * expected.max(1.0),
        "area {actual} differs from polygon area {expected}"
    );
}
