//! # Configuration Constants
//!
//! Centralized constants for the voxelization pipeline.
//!
//! ## Categories
//!
//! - **Scheduling**: Work partitioning for the parallel overlap sweep
//! - **Limits**: Maximum values for safety bounds
//! - **Defaults**: Values used when the caller does not override them
//! - **Naming**: Conventions shared with persistence collaborators

// =============================================================================
// SCHEDULING CONSTANTS
// =============================================================================

/// Number of consecutive cells handed to one parallel work item.
///
/// The sweep splits the overlap bitmap into contiguous runs of this many
/// cells. It is a tuning knob only; results never depend on it.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_CHUNK_SIZE;
///
/// let cells: usize = 1000;
/// let work_items = cells.div_ceil(DEFAULT_CHUNK_SIZE);
/// assert_eq!(work_items, 100);
/// ```
pub const DEFAULT_CHUNK_SIZE: usize = 10;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of grid cells a single voxelization may allocate.
///
/// One byte is allocated per cell for the overlap bitmap, so this caps
/// the bitmap at 256 MiB. Requests above the limit fail before any
/// allocation happens.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_GRID_CELLS;
///
/// let requested: usize = 1024 * 1024 * 1024;
/// assert!(requested > MAX_GRID_CELLS);
/// ```
pub const MAX_GRID_CELLS: usize = 1 << 28;

// =============================================================================
// DEFAULT CONSTANTS
// =============================================================================

/// Whether the object's non-uniform scale is applied by default.
pub const DEFAULT_USE_SCALE: bool = true;

/// Number of points shown by a point-cloud preview listing.
///
/// # Example
///
/// ```rust
/// use config::constants::PREVIEW_POINT_COUNT;
///
/// let total: usize = 1500;
/// let shown = total.min(PREVIEW_POINT_COUNT);
/// assert_eq!(shown, 20);
/// ```
pub const PREVIEW_POINT_COUNT: usize = 20;

// =============================================================================
// NAMING CONSTANTS
// =============================================================================

/// Suffix appended to a mesh name when its point cloud is stored.
///
/// Existing baked assets use this exact spelling.
///
/// # Example
///
/// ```rust
/// use config::constants::BAKED_ASSET_SUFFIX;
///
/// let name = format!("rock{}", BAKED_ASSET_SUFFIX);
/// assert_eq!(name, "rock_Cubizied");
/// ```
pub const BAKED_ASSET_SUFFIX: &str = "_Cubizied";
