//! # Batch Triangulation
//!
//! Triangulates many independent polygons. Each polygon gets its own vertex
//! set, DCEL and sweep line, so batches above the configured threshold are
//! spread over the rayon thread pool.
//!
//! # Determinism
//!
//! Results come back in input order and do not depend on thread count or
//! scheduling: every entry is a pure function of its own polygon.

use crate::error::TriangulationResult;
use crate::triangulate::triangulate_polygon;
use config::constants::BatchConfig;
use log::debug;
use rayon::prelude::*;

/// Triangulates every polygon with the default [`BatchConfig`].
///
/// # Examples
/// ```
/// use planar_triangulate::triangulate_batch;
///
/// let square = vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0];
/// let bad = vec![0.0, 1.0];
/// let results = triangulate_batch(&[square, bad]);
/// assert_eq!(results[0].as_ref().map(Vec::len), Ok(18));
/// assert!(results[1].is_err());
/// ```
pub fn triangulate_batch<P>(polygons: &[P]) -> Vec<TriangulationResult<Vec<f32>>>
where
    P: AsRef<[f32]> + Sync,
{
    triangulate_batch_with(polygons, &BatchConfig::default())
}

/// Triangulates every polygon, one result per input in the same order.
///
/// One polygon failing does not affect the others.
pub fn triangulate_batch_with<P>(
    polygons: &[P],
    config: &BatchConfig,
) -> Vec<TriangulationResult<Vec<f32>>>
where
    P: AsRef<[f32]> + Sync,
{
    if config.is_parallel(polygons.len()) {
        debug!("batch: {} polygons on the thread pool", polygons.len());
        polygons
            .par_iter()
            .map(|p| triangulate_polygon(p.as_ref()))
            .collect()
    } else {
        polygons
            .iter()
            .map(|p| triangulate_polygon(p.as_ref()))
            .collect()
    }
}
