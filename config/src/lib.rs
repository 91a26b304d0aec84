//! # Config Crate
//!
//! Centralized configuration constants for the mesh voxelizer.
//! All magic numbers and tunable parameters are defined here so the
//! engine crate never scatters literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_CHUNK_SIZE, MAX_GRID_CELLS};
//!
//! let cells: usize = 64 * 64 * 64;
//! assert!(cells <= MAX_GRID_CELLS);
//! assert!(DEFAULT_CHUNK_SIZE > 0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Baked-Asset Compatible**: Defaults match the behavior of existing baked point clouds

pub mod constants;
