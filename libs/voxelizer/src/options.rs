//! # Voxelization Options
//!
//! Caller-facing parameters for one voxelization run, built on the shared
//! `config` crate so defaults live in one place.

use config::constants::{DEFAULT_CHUNK_SIZE, DEFAULT_USE_SCALE, MAX_GRID_CELLS};
use glam::Vec3;

use crate::error::{VoxelizeError, VoxelizeResult};

/// Selects which axis formulas the grid planner and SAT kernel use.
///
/// `Literal` reproduces the formulas of existing baked assets exactly:
/// the x grid dimension is derived from the z extent, and several SAT
/// radius, axis and face tests substitute the z half-extent (or z edge
/// component) where x would be expected. `Corrected` uses the textbook
/// per-axis formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisConvention {
    /// Bit-for-bit compatible with previously baked point clouds.
    #[default]
    Literal,
    /// Geometrically symmetric formulas.
    Corrected,
}

/// Parameters for one voxelization run.
///
/// # Examples
/// ```
/// use voxelizer::{AxisConvention, VoxelizeOptions};
/// use glam::Vec3;
///
/// let options = VoxelizeOptions::new(0.25)
///     .unwrap()
///     .with_scale(Vec3::new(2.0, 1.0, 1.0))
///     .with_convention(AxisConvention::Corrected);
/// assert!(options.use_scale);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoxelizeOptions {
    /// Edge length of one voxel cube.
    pub cube_size: f32,
    /// Whether `scale` is applied to vertices, bounds and grid origin.
    pub use_scale: bool,
    /// Non-uniform per-axis scale of the source object.
    pub scale: Vec3,
    /// Axis formula convention.
    pub convention: AxisConvention,
    /// Cells per parallel work item.
    pub chunk_size: usize,
    /// Upper bound on the number of grid cells.
    pub max_cells: usize,
}

impl VoxelizeOptions {
    /// Creates options for `cube_size` with every other field at its default.
    ///
    /// Fails with [`VoxelizeError::InvalidParameter`] when `cube_size` is not a
    /// finite positive number.
    pub fn new(cube_size: f32) -> VoxelizeResult<Self> {
        let options = Self {
            cube_size,
            use_scale: DEFAULT_USE_SCALE,
            scale: Vec3::ONE,
            convention: AxisConvention::default(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            max_cells: MAX_GRID_CELLS,
        };
        options.validate()?;
        Ok(options)
    }

    /// Sets the object scale and enables scaling.
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self.use_scale = true;
        self
    }

    /// Enables or disables scaling without touching the stored scale.
    pub fn with_use_scale(mut self, use_scale: bool) -> Self {
        self.use_scale = use_scale;
        self
    }

    /// Sets the axis convention.
    pub fn with_convention(mut self, convention: AxisConvention) -> Self {
        self.convention = convention;
        self
    }

    /// Sets the number of cells per parallel work item.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Sets the grid cell ceiling.
    pub fn with_max_cells(mut self, max_cells: usize) -> Self {
        self.max_cells = max_cells;
        self
    }

    /// Scale actually applied to geometry: `scale` when enabled, else one.
    #[inline]
    pub fn effective_scale(&self) -> Vec3 {
        if self.use_scale {
            self.scale
        } else {
            Vec3::ONE
        }
    }

    /// Re-checks every field. Builders do not validate, so callers that
    /// modify fields directly should call this before voxelizing.
    pub fn validate(&self) -> VoxelizeResult<()> {
        if !self.cube_size.is_finite() || self.cube_size <= 0.0 {
            return Err(VoxelizeError::invalid_parameter(
                "cube_size",
                format!("must be a finite positive number, got {}", self.cube_size),
            ));
        }
        if self.use_scale && !self.scale.is_finite() {
            return Err(VoxelizeError::invalid_parameter(
                "scale",
                format!("must be finite, got {}", self.scale),
            ));
        }
        if self.chunk_size == 0 {
            return Err(VoxelizeError::invalid_parameter(
                "chunk_size",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}
