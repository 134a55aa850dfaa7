//! # Configuration Constants
//!
//! Centralized values shared by the triangulation kernel. Buffer layout,
//! degenerate-input thresholds and batch scheduling parameters are defined
//! here so the kernel never scatters literals.
//!
//! ## Categories
//!
//! - **Layout**: Float counts per vertex and per triangle
//! - **Thresholds**: Smallest polygon that needs triangulation
//! - **Scheduling**: When batch work is handed to the thread pool

use std::fmt;

// =============================================================================
// LAYOUT CONSTANTS
// =============================================================================

/// Number of floats describing one input or output vertex (x, y, z).
///
/// # Examples
/// ```
/// use config::constants::FLOATS_PER_VERTEX;
/// let points = [0.0_f32, 0.0, 0.0, 1.0, 0.0, 0.0];
/// assert_eq!(points.len() / FLOATS_PER_VERTEX, 2);
/// ```
pub const FLOATS_PER_VERTEX: usize = 3;

/// Number of floats describing one emitted triangle.
///
/// # Examples
/// ```
/// use config::constants::{FLOATS_PER_TRIANGLE, FLOATS_PER_VERTEX};
/// assert_eq!(FLOATS_PER_TRIANGLE, 3 * FLOATS_PER_VERTEX);
/// ```
pub const FLOATS_PER_TRIANGLE: usize = 3 * FLOATS_PER_VERTEX;

// =============================================================================
// THRESHOLD CONSTANTS
// =============================================================================

/// Smallest vertex count that actually gets triangulated.
///
/// Anything below this is already a triangle (or degenerate) and is handed
/// back to the caller untouched.
///
/// # Examples
/// ```
/// use config::constants::MIN_TRIANGULATION_VERTICES;
/// let triangle_vertices = 3;
/// assert!(triangle_vertices < MIN_TRIANGULATION_VERTICES);
/// ```
pub const MIN_TRIANGULATION_VERTICES: usize = 4;

// =============================================================================
// SCHEDULING CONSTANTS
// =============================================================================

/// Batch size from which independent polygons are triangulated on the
/// rayon thread pool instead of the calling thread.
///
/// # Examples
/// ```
/// use config::constants::PARALLEL_BATCH_THRESHOLD;
/// assert!(PARALLEL_BATCH_THRESHOLD >= 1);
/// ```
pub const PARALLEL_BATCH_THRESHOLD: usize = 16;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Exact length of the triangle buffer for a simple polygon with
/// `vertex_count` vertices: `9 * (n - 2)` floats.
///
/// Returns 0 for fewer than three vertices.
///
/// # Examples
/// ```
/// use config::constants::triangle_buffer_len;
/// assert_eq!(triangle_buffer_len(4), 18);
/// assert_eq!(triangle_buffer_len(2), 0);
/// ```
pub fn triangle_buffer_len(vertex_count: usize) -> usize {
    vertex_count.saturating_sub(2) * FLOATS_PER_TRIANGLE
}

// =============================================================================
// BATCH CONFIGURATION
// =============================================================================

/// Scheduling settings for batch triangulation.
///
/// # Examples
/// ```
/// use config::constants::BatchConfig;
/// let config = BatchConfig::default();
/// assert!(config.parallel_threshold > 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchConfig {
    /// Minimum number of polygons before work is spread over threads.
    pub parallel_threshold: usize,
}

impl BatchConfig {
    /// Builds a configuration, rejecting a zero threshold.
    ///
    /// # Examples
    /// ```
    /// use config::constants::BatchConfig;
    /// let cfg = BatchConfig::new(4).expect("valid config");
    /// assert_eq!(cfg.parallel_threshold, 4);
    /// assert!(BatchConfig::new(0).is_err());
    /// ```
    pub fn new(parallel_threshold: usize) -> Result<Self, ConfigError> {
        if parallel_threshold == 0 {
            return Err(ConfigError::InvalidThreshold(parallel_threshold));
        }
        Ok(Self { parallel_threshold })
    }

    /// Configuration that never leaves the calling thread.
    pub fn sequential() -> Self {
        Self {
            parallel_threshold: usize::MAX,
        }
    }

    /// Whether a batch of `len` polygons should run on the thread pool.
    pub fn is_parallel(&self, len: usize) -> bool {
        len >= self.parallel_threshold
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: PARALLEL_BATCH_THRESHOLD,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the parallel threshold is zero.
    InvalidThreshold(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidThreshold(value) => {
                write!(f, "parallel_threshold must be >= 1: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
