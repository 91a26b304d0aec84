//! # Error Types
//!
//! Error types for voxelization. All errors are explicit and fail fast.
//!
//! ## Error Policy
//!
//! - NO partial point clouds when a stage fails
//! - Parameters and geometry are validated before any allocation
//! - Errors include context for debugging

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur during voxelization.
///
/// ## Example
///
/// ```rust
/// use voxelizer::{VoxelizeError, VoxelizeOptions};
///
/// match VoxelizeOptions::new(0.0) {
///     Ok(_) => unreachable!(),
///     Err(VoxelizeError::InvalidParameter { name, .. }) => assert_eq!(name, "cube_size"),
///     Err(e) => panic!("unexpected error: {e}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VoxelizeError {
    /// A numeric parameter is out of range (e.g. cube size not positive).
    #[error("Invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Name of the offending parameter
        name: &'static str,
        /// Description of the violated constraint
        message: String,
    },

    /// Vertex or index data is malformed.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// The grid would not fit in the configured cell budget.
    ///
    /// `requested` is `None` when the dimension product overflows `usize`.
    #[error("Grid of {dims:?} cells exceeds limit of {limit} cells (requested: {requested:?})")]
    ResourceExhaustion {
        /// Grid dimensions (x, y, z)
        dims: [usize; 3],
        /// Total cell count, if representable
        requested: Option<usize>,
        /// Configured maximum cell count
        limit: usize,
    },

    /// The persistence collaborator rejected the point cloud.
    #[error("Point cloud sink failed: {0}")]
    Sink(String),
}

impl VoxelizeError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            message: message.into(),
        }
    }

    /// Creates an invalid geometry error.
    pub fn invalid_geometry(message: impl Into<String>) -> Self {
        Self::InvalidGeometry(message.into())
    }

    /// Creates a sink failure error.
    pub fn sink(message: impl Into<String>) -> Self {
        Self::Sink(message.into())
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for voxelization operations.
pub type VoxelizeResult<T> = Result<T, VoxelizeError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = VoxelizeError::invalid_parameter("cube_size", "must be positive");
        assert!(err.to_string().contains("cube_size"));
        assert!(err.to_string().contains("must be positive"));

        let err = VoxelizeError::ResourceExhaustion {
            dims: [10, 20, 30],
            requested: None,
            limit: 100,
        };
        assert!(err.to_string().contains("limit of 100"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<VoxelizeError>();
    }
}
