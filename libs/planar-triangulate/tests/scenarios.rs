//! Named triangulation scenarios, from the unit square to tilted planes.

mod common;

use approx::assert_relative_eq;
use common::*;
use planar_triangulate::{triangulate_polygon, Polygon, TriangulationError};

#[test]
fn unit_square_gives_two_triangles() {
    let points = flat(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
    let tris = triangulate_polygon(&points).unwrap();
    assert_eq!(tris.len(), 18);
    assert_relative_eq!(triangle_areas(&tris).iter().sum::<f64>(), 1.0, epsilon = 1e-12);
}

#[test]
fn arrow_polygon_splits_at_notch() {
    // (2, 1) has both neighbours below it and a reflex angle
    let points = flat(&[(0.0, 0.0), (2.0, 1.0), (4.0, 0.0), (2.0, 4.0)]);
    let tris = triangulate_polygon(&points).unwrap();
    assert_valid_triangulation(&points, &tris);
    assert_relative_eq!(triangle_areas(&tris).iter().sum::<f64>(), 6.0, epsilon = 1e-12);
}

#[test]
fn notched_square_through_decomposer() {
    let points = notched();
    let tris = triangulate_polygon(&points).unwrap();
    assert_eq!(tris.len(), 36);
    assert_relative_eq!(triangle_areas(&tris).iter().sum::<f64>(), 12.0, epsilon = 1e-12);
}

#[test]
fn comb_teeth_are_filled() {
    let points = comb();
    let tris = triangulate_polygon(&points).unwrap();
    assert_valid_triangulation(&points, &tris);
    assert_relative_eq!(triangle_areas(&tris).iter().sum::<f64>(), 16.0, epsilon = 1e-12);
}

#[test]
fn wide_comb_with_thousands_of_teeth() {
    let teeth = 4000;
    let points = wide_comb(teeth);
    let tris = triangulate_polygon(&points).unwrap();
    assert_valid_triangulation(&points, &tris);
    // Bar of 4 x (2t - 1) minus t - 1 notches of 1 x 2
    let area = (6 * teeth - 2) as f64;
    assert_relative_eq!(triangle_areas(&tris).iter().sum::<f64>(), area, epsilon = 1e-6);
}

#[test]
fn tilted_plane_keeps_original_coordinates() {
    // Notched square on a plane through the x axis, tilted 53 degrees
    let points: Vec<f32> = notched()
        .chunks_exact(3)
        .flat_map(|p| [p[0], 0.6 * p[1], 0.8 * p[1]])
        .collect();
    let tris = triangulate_polygon(&points).unwrap();
    assert_valid_triangulation(&points, &tris);
    assert_relative_eq!(triangle_areas(&tris).iter().sum::<f64>(), 12.0, epsilon = 1e-4);
}

#[test]
fn vertical_plane() {
    let points: Vec<f32> = comb()
        .chunks_exact(3)
        .flat_map(|p| [3.0, p[0], p[1]])
        .collect();
    let tris = triangulate_polygon(&points).unwrap();
    assert_valid_triangulation(&points, &tris);
    assert!(tris.chunks_exact(3).all(|v| v[0] == 3.0));
}

#[test]
fn clockwise_input() {
    let points = reversed(&comb());
    let tris = triangulate_polygon(&points).unwrap();
    assert_valid_triangulation(&points, &tris);
    assert!(signed_xy_areas(&tris).iter().all(|&a| a <= 0.0));
}

#[test]
fn spiral_band() {
    let points = spiral();
    let tris = triangulate_polygon(&points).unwrap();
    assert_valid_triangulation(&points, &tris);
}

#[test]
fn collinear_vertices_on_an_edge() {
    // Extra vertices along the bottom and right edges
    let points = flat(&[
        (0.0, 0.0),
        (1.0, 0.0),
        (2.0, 0.0),
        (3.0, 0.0),
        (3.0, 1.5),
        (3.0, 3.0),
        (0.0, 3.0),
    ]);
    let tris = triangulate_polygon(&points).unwrap();
    assert_valid_triangulation(&points, &tris);
}

#[test]
fn malformed_input_is_rejected() {
    assert_eq!(
        triangulate_polygon(&[0.0; 10]),
        Err(TriangulationError::InvalidLength(10))
    );
    let line = flat(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]);
    assert_eq!(triangulate_polygon(&line), Err(TriangulationError::DegeneratePlane));
    let mut points = notched();
    points[4] = f32::INFINITY;
    assert_eq!(
        triangulate_polygon(&points),
        Err(TriangulationError::NonFiniteCoordinate(1))
    );
}

#[test]
fn polygon_builder_matches_free_function() {
    let mut polygon = Polygon::new();
    for p in star(5, 2.0, 0.7).chunks_exact(3) {
        polygon.push(p[0], p[1], p[2]);
    }
    let direct = triangulate_polygon(polygon.data()).unwrap();
    assert_eq!(polygon.triangulation().unwrap(), direct.as_slice());
    assert_eq!(polygon.triangle_count().unwrap(), 8);
}
