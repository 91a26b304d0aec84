//! # Point Collection
//!
//! Turns the overlap bitmap into the ordered list of filled cube centers.

use config::constants::PREVIEW_POINT_COUNT;
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::bounds::Aabb;
use crate::grid::Grid;
use crate::sweep::OverlapBitmap;

/// Centers of every filled cell of `grid`, in ascending cell-index order.
///
/// `bitmap` should come from a sweep over the same `grid`. Flags past the
/// grid's cell count are ignored.
///
/// # Example
///
/// ```rust
/// use voxelizer::{collect_points, Grid, OverlapBitmap};
/// use glam::Vec3;
///
/// let grid = Grid::new([1, 1, 2], 1.0, Vec3::ZERO);
/// let bitmap = OverlapBitmap::from_cells(vec![false, true]);
/// assert_eq!(collect_points(&bitmap, &grid), vec![Vec3::new(0.5, 0.5, 1.5)]);
/// ```
pub fn collect_points(bitmap: &OverlapBitmap, grid: &Grid) -> Vec<Vec3> {
    let cell_count = grid.cell_count().unwrap_or(0);
    bitmap
        .filled_indices()
        .take_while(|&index| index < cell_count)
        .map(|index| grid.cell_center(grid.decode(index)))
        .collect()
}

/// The voxelized surface: one point per filled cube.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PointCloud {
    /// Cube centers in ascending cell-index order.
    pub points: Vec<Vec3>,
    /// Edge length of the cubes the points stand for.
    pub cube_size: f32,
    /// Bounds of the unscaled source mesh.
    pub bounds: Aabb,
}

impl PointCloud {
    /// Creates a point cloud.
    pub fn new(points: Vec<Vec3>, cube_size: f32, bounds: Aabb) -> Self {
        Self {
            points,
            cube_size,
            bounds,
        }
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether no cell was filled.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The points as a slice.
    #[inline]
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Iterates the points in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Vec3> {
        self.points.iter()
    }

    /// The first `count` points, or all of them if there are fewer.
    pub fn preview(&self, count: usize) -> &[Vec3] {
        &self.points[..count.min(self.points.len())]
    }

    /// The first [`PREVIEW_POINT_COUNT`] points.
    pub fn default_preview(&self) -> &[Vec3] {
        self.preview(PREVIEW_POINT_COUNT)
    }

    /// Consumes the cloud, returning its points.
    pub fn into_points(self) -> Vec<Vec3> {
        self.points
    }
}

impl<'a> IntoIterator for &'a PointCloud {
    type Item = &'a Vec3;
    type IntoIter = std::slice::Iter<'a, Vec3>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
