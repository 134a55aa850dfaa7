use super::*;
use crate::planar::PlanarVertexSet;

fn types_of(points: &[f32]) -> Vec<VertexType> {
    let set = PlanarVertexSet::from_points(points).unwrap();
    let dcel = Dcel::new(set.vertices());
    let sweep = SweepLine::create(&dcel).unwrap();
    classify_all(&dcel, &sweep)
}

#[test]
fn test_square_types() {
    let types = types_of(&[
        0.0, 0.0, 0.0, //
        1.0, 0.0, 0.0, //
        1.0, 1.0, 0.0, //
        0.0, 1.0, 0.0,
    ]);
    assert_eq!(
        types,
        vec![
            VertexType::Regular,
            VertexType::End,
            VertexType::Regular,
            VertexType::Start
        ]
    );
}

#[test]
fn test_notched_polygon_has_split_and_merge() {
    // Notch pointing up from the bottom edge and down from the top edge
    let types = types_of(&[
        0.0, 0.0, 0.0, //
        2.0, 1.0, 0.0, //
        4.0, 0.0, 0.0, //
        4.0, 4.0, 0.0, //
        2.0, 3.0, 0.0, //
        0.0, 4.0, 0.0,
    ]);
    assert_eq!(types[1], VertexType::Split);
    assert_eq!(types[4], VertexType::Merge);
    assert_eq!(types[3], VertexType::Start);
    assert_eq!(types[5], VertexType::Start);
    assert_eq!(types[0], VertexType::End);
    assert_eq!(types[2], VertexType::End);
}

#[test]
fn test_winding_does_not_change_types() {
    let ccw = [
        0.0, 0.0, 0.0, //
        2.0, 1.0, 0.0, //
        4.0, 0.0, 0.0, //
        4.0, 4.0, 0.0, //
        2.0, 3.0, 0.0, //
        0.0, 4.0, 0.0,
    ];
    let cw: Vec<f32> = ccw.chunks_exact(3).rev().flatten().copied().collect();
    let types = types_of(&cw);
    // Reversed input: vertex 4 is (2, 1), vertex 1 is (2, 3)
    assert!(types.iter().filter(|t| t.is_split_or_merge()).count() == 2);
    assert!(types[4].is_split_or_merge());
    assert!(types[1].is_split_or_merge());
}

#[test]
fn test_convex_polygon_is_monotone() {
    let types = types_of(&[
        2.0, 0.0, 0.0, //
        4.0, 1.0, 0.0, //
        4.0, 3.0, 0.0, //
        2.0, 4.0, 0.0, //
        0.0, 3.0, 0.0, //
        0.0, 1.0, 0.0,
    ]);
    assert!(!types.iter().any(|t| t.is_split_or_merge()));
    assert_eq!(types.iter().filter(|&&t| t == VertexType::Start).count(), 1);
    assert_eq!(types.iter().filter(|&&t| t == VertexType::End).count(), 1);
}

#[test]
fn test_classify_reflex_top_is_split() {
    assert_eq!(classify(2, 3, 4, -0.5), VertexType::Split);
    assert_eq!(classify(2, 0, 1, 0.5), VertexType::End);
    // Collinear counts as convex
    assert_eq!(classify(0, 1, 2, 0.0), VertexType::Start);
}
