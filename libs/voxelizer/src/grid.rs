//! # Grid Planning
//!
//! Lays a regular grid of cubes over the mesh bounds and maps linear cell
//! indices to cube centers.
//!
//! Cells are ordered row-major with x slowest and z fastest:
//! `idx = i * (y * z) + j * z + k`.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::bounds::Aabb;
use crate::error::{VoxelizeError, VoxelizeResult};
use crate::options::AxisConvention;
use crate::sat::CellBox;

/// A regular grid of cubes anchored at its minimum corner.
///
/// # Example
///
/// ```rust
/// use voxelizer::Grid;
/// use glam::Vec3;
///
/// let grid = Grid::new([2, 2, 2], 0.5, Vec3::ZERO);
/// assert_eq!(grid.cell_count(), Some(8));
/// assert_eq!(grid.decode(5), [1, 0, 1]);
/// assert_eq!(grid.cell_center([1, 0, 1]), Vec3::new(0.75, 0.25, 0.75));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    /// Cell counts along x, y and z.
    pub dims: [usize; 3],
    /// Cube edge length.
    pub cube_size: f32,
    /// Minimum corner of the grid.
    pub origin: Vec3,
}

impl Grid {
    /// Creates a grid from explicit dimensions.
    pub fn new(dims: [usize; 3], cube_size: f32, origin: Vec3) -> Self {
        Self {
            dims,
            cube_size,
            origin,
        }
    }

    /// Total number of cells, or `None` if the product overflows.
    pub fn cell_count(&self) -> Option<usize> {
        let [x, y, z] = self.dims;
        x.checked_mul(y)?.checked_mul(z)
    }

    /// Total number of cells, failing with
    /// [`VoxelizeError::ResourceExhaustion`] above `max_cells` or on overflow.
    pub fn checked_cell_count(&self, max_cells: usize) -> VoxelizeResult<usize> {
        match self.cell_count() {
            Some(count) if count <= max_cells => Ok(count),
            requested => Err(VoxelizeError::ResourceExhaustion {
                dims: self.dims,
                requested,
                limit: max_cells,
            }),
        }
    }

    /// Whether the grid has no cells.
    pub fn is_empty(&self) -> bool {
        self.dims.contains(&0)
    }

    /// Splits a linear cell index into `[i, j, k]`.
    ///
    /// `index` must be below [`Grid::cell_count`].
    #[inline]
    pub fn decode(&self, index: usize) -> [usize; 3] {
        let [_, y, z] = self.dims;
        let slab = y * z;
        [index / slab, index % slab / z, index % z]
    }

    /// Center of cell `[i, j, k]`.
    #[inline]
    pub fn cell_center(&self, [i, j, k]: [usize; 3]) -> Vec3 {
        let size = self.cube_size;
        let center = self.origin + Vec3::splat(size) / 2.0;
        center + Vec3::new(size * i as f32, size * j as f32, size * k as f32)
    }

    /// Overlap box of the cell at linear `index`.
    ///
    /// Its extents equal the full cube size; see [`CellBox`].
    #[inline]
    pub fn cell_box(&self, index: usize) -> CellBox {
        CellBox::new(
            self.cell_center(self.decode(index)),
            Vec3::splat(self.cube_size),
        )
    }
}

/// Plans the grid covering `bounds` with cubes of edge `cube_size`.
///
/// With `scale` set, the bounds are multiplied component-wise first,
/// matching [`extract_triangles`](crate::extract_triangles). Each dimension
/// is `size / cube_size` truncated toward zero; negative sizes give zero.
///
/// Under [`AxisConvention::Literal`] the x dimension is taken from the z
/// extent, and the scaled size and minimum corner are used as-is, so a
/// negative scale component empties that axis. Under
/// [`AxisConvention::Corrected`] the scaled corners are reordered first,
/// so a mirrored mesh keeps its cells.
///
/// `cube_size` must already be validated as positive.
///
/// # Example
///
/// ```rust
/// use voxelizer::{plan_grid, Aabb, AxisConvention};
/// use glam::Vec3;
///
/// let bounds = Aabb::new(Vec3::ZERO, Vec3::new(4.0, 2.0, 1.0));
/// let literal = plan_grid(&bounds, 0.5, None, AxisConvention::Literal);
/// let corrected = plan_grid(&bounds, 0.5, None, AxisConvention::Corrected);
/// assert_eq!(literal.dims, [2, 4, 2]);
/// assert_eq!(corrected.dims, [8, 4, 2]);
/// ```
pub fn plan_grid(
    bounds: &Aabb,
    cube_size: f32,
    scale: Option<Vec3>,
    convention: AxisConvention,
) -> Grid {
    let (size, origin, x_extent) = match convention {
        AxisConvention::Literal => {
            let (size, origin) = match scale {
                Some(scale) => (bounds.size() * scale, bounds.min * scale),
                None => (bounds.size(), bounds.min),
            };
            (size, origin, size.z)
        }
        AxisConvention::Corrected => {
            let scaled = match scale {
                Some(scale) => bounds.scaled(scale).normalized(),
                None => *bounds,
            };
            let size = scaled.size();
            (size, scaled.min, size.x)
        }
    };
    let dims = [x_extent, size.y, size.z].map(|extent| (extent / cube_size) as usize);

    Grid::new(dims, cube_size, origin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_is_row_major() {
        let grid = Grid::new([3, 4, 5], 1.0, Vec3::ZERO);
        assert_eq!(grid.decode(0), [0, 0, 0]);
        assert_eq!(grid.decode(1), [0, 0, 1]);
        assert_eq!(grid.decode(5), [0, 1, 0]);
        assert_eq!(grid.decode(20), [1, 0, 0]);
        assert_eq!(grid.decode(59), [2, 3, 4]);
    }

    #[test]
    fn test_cell_center_offsets_from_origin() {
        let grid = Grid::new([2, 2, 2], 2.0, Vec3::new(-1.0, 10.0, 0.0));
        assert_eq!(grid.cell_center([0, 0, 0]), Vec3::new(0.0, 11.0, 1.0));
        assert_eq!(grid.cell_center([1, 1, 0]), Vec3::new(2.0, 13.0, 1.0));
    }

    #[test]
    fn test_cell_box_uses_full_cube_size() {
        let grid = Grid::new([1, 1, 1], 0.5, Vec3::ZERO);
        let cell = grid.cell_box(0);
        assert_eq!(cell.center, Vec3::splat(0.25));
        assert_eq!(cell.extents, Vec3::splat(0.5));
    }

    #[test]
    fn test_plan_truncates() {
        let bounds = Aabb::new(Vec3::ZERO, Vec3::new(1.0, 1.9, 0.99));
        let grid = plan_grid(&bounds, 0.5, None, AxisConvention::Corrected);
        assert_eq!(grid.dims, [2, 3, 1]);
    }

    #[test]
    fn test_plan_literal_reuses_z_extent_for_x() {
        let bounds = Aabb::new(Vec3::ZERO, Vec3::new(10.0, 3.0, 2.0));
        let grid = plan_grid(&bounds, 1.0, None, AxisConvention::Literal);
        assert_eq!(grid.dims, [2, 3, 2]);
    }

    #[test]
    fn test_plan_applies_scale_to_size_and_origin() {
        let bounds = Aabb::new(Vec3::new(1.0, 1.0, 1.0), Vec3::new(2.0, 2.0, 2.0));
        let grid = plan_grid(
            &bounds,
            1.0,
            Some(Vec3::new(4.0, 2.0, 3.0)),
            AxisConvention::Corrected,
        );
        assert_eq!(grid.dims, [4, 2, 3]);
        assert_eq!(grid.origin, Vec3::new(4.0, 2.0, 3.0));
    }

    #[test]
    fn test_plan_negative_scale() {
        let bounds = Aabb::new(Vec3::ZERO, Vec3::new(1.0, 2.0, 3.0));
        let scale = Some(Vec3::new(-2.0, 1.0, 1.0));

        let corrected = plan_grid(&bounds, 1.0, scale, AxisConvention::Corrected);
        assert_eq!(corrected.dims, [2, 2, 3]);
        assert_eq!(corrected.origin, Vec3::new(-2.0, 0.0, 0.0));

        let literal = plan_grid(&bounds, 1.0, scale, AxisConvention::Literal);
        assert_eq!(literal.dims, [3, 2, 3]);
        assert_eq!(literal.origin, Vec3::ZERO);

        let flip_z = Some(Vec3::new(1.0, 1.0, -1.0));
        assert!(plan_grid(&bounds, 1.0, flip_z, AxisConvention::Literal).is_empty());
    }

    #[test]
    fn test_plan_flat_bounds_is_empty() {
        let bounds = Aabb::new(Vec3::ZERO, Vec3::new(1.0, 1.0, 0.0));
        let grid = plan_grid(&bounds, 1.0, None, AxisConvention::Corrected);
        assert!(grid.is_empty());
        assert_eq!(grid.cell_count(), Some(0));
    }

    #[test]
    fn test_checked_cell_count_limits() {
        let grid = Grid::new([10, 10, 10], 1.0, Vec3::ZERO);
        assert_eq!(grid.checked_cell_count(1000), Ok(1000));
        assert!(matches!(
            grid.checked_cell_count(999),
            Err(VoxelizeError::ResourceExhaustion {
                requested: Some(1000),
                ..
            })
        ));
    }

    #[test]
    fn test_checked_cell_count_overflow() {
        let grid = Grid::new([usize::MAX, 2, 1], 1.0, Vec3::ZERO);
        assert!(matches!(
            grid.checked_cell_count(usize::MAX),
            Err(VoxelizeError::ResourceExhaustion {
                requested: None,
                ..
            })
        ));
    }
}
