//! # Planar Triangulate
//!
//! Triangulation of simple planar polygons given as flat `(x, y, z)`
//! buffers. The polygon may lie on any plane in 3D and use either winding.
//!
//! ## Architecture
//!
//! ```text
//! points → planar (projection) → sweep + classify
//!        → decompose (DCEL diagonals at split/merge vertices)
//!        → monotone (stack triangulation per face) → triangles
//! ```
//!
//! ## Algorithms
//!
//! - **Projection**: Newell normal, dominant axis dropped
//! - **Orientation**: Adaptive-precision `orient2d`
//! - **Decomposition**: Plane sweep with edge helpers, O(n log n)
//! - **Triangulation**: Reflex-chain stack per monotone face, O(n)
//!
//! ## Usage
//!
//! ```rust
//! use planar_triangulate::triangulate_polygon;
//!
//! // Square with a notch cut into its bottom edge
//! let points = [
//!     0.0, 0.0, 0.0, 2.0, 1.0, 0.0, 4.0, 0.0, 0.0, //
//!     4.0, 4.0, 0.0, 0.0, 4.0, 0.0,
//! ];
//! let triangles = triangulate_polygon(&points).unwrap();
//! assert_eq!(triangles.len() / 9, 3);
//! ```

pub mod batch;
pub mod classify;
pub mod dcel;
pub mod decompose;
pub mod error;
pub mod monotone;
pub mod planar;
pub mod polygon;
pub mod sweep;
pub mod triangulate;

pub use batch::{triangulate_batch, triangulate_batch_with};
pub use classify::VertexType;
pub use config::constants::BatchConfig;
pub use dcel::{Dcel, DcelError};
pub use error::{TriangulationError, TriangulationResult};
pub use polygon::Polygon;
pub use triangulate::triangulate_polygon;
