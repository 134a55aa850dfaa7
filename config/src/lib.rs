//! # Config Crate
//!
//! Centralized configuration constants for the planar triangulation kernel.
//! Buffer layout and scheduling parameters are defined here to keep the
//! kernel free of magic numbers.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{triangle_buffer_len, MIN_TRIANGULATION_VERTICES};
//!
//! let vertex_count = 6;
//! assert!(vertex_count >= MIN_TRIANGULATION_VERTICES);
//! assert_eq!(triangle_buffer_len(vertex_count), 36);
//! ```

pub mod constants;
