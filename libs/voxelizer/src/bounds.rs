//! # Axis-Aligned Bounds
//!
//! Bounding box of the source mesh, used to size the voxel grid.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box given by its minimum and maximum corners.
///
/// # Example
///
/// ```rust
/// use voxelizer::Aabb;
/// use glam::Vec3;
///
/// let bounds = Aabb::from_points(&[Vec3::ZERO, Vec3::new(1.0, 2.0, 3.0)]);
/// assert_eq!(bounds.size(), Vec3::new(1.0, 2.0, 3.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Default for Aabb {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::ZERO)
    }
}

impl Aabb {
    /// Creates bounds from explicit corners.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Computes the tightest bounds around `points`.
    ///
    /// An empty slice yields zero-sized bounds at the origin.
    pub fn from_points(points: &[Vec3]) -> Self {
        let Some((first, rest)) = points.split_first() else {
            return Self::default();
        };

        let (min, max) = rest
            .iter()
            .fold((*first, *first), |(min, max), p| (min.min(*p), max.max(*p)));
        Self { min, max }
    }

    /// Extent along each axis.
    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Center point.
    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Multiplies both corners component-wise by `scale`.
    ///
    /// Corners are not reordered for negative scale components; see
    /// [`Aabb::normalized`].
    pub fn scaled(&self, scale: Vec3) -> Self {
        Self {
            min: self.min * scale,
            max: self.max * scale,
        }
    }

    /// Swaps corner components so that `min <= max` on every axis.
    pub fn normalized(&self) -> Self {
        Self {
            min: self.min.min(self.max),
            max: self.min.max(self.max),
        }
    }
}
