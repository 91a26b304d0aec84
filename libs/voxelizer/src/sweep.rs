//! # Parallel Overlap Sweep
//!
//! Tests every grid cell against the triangle list and records which cells
//! overlap at least one triangle.
//!
//! Cells are independent, so the bitmap is split into contiguous chunks
//! that rayon workers fill in place. Each worker owns its chunk; the
//! triangle list and grid are shared read-only.

use rayon::prelude::*;

use crate::error::VoxelizeResult;
use crate::grid::Grid;
use crate::options::VoxelizeOptions;
use crate::sat::triangle_intersects_box;
use crate::triangle::Triangle;

/// One flag per grid cell, `true` where the cell overlaps the mesh.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OverlapBitmap {
    cells: Vec<bool>,
}

impl OverlapBitmap {
    /// Wraps precomputed flags.
    pub fn from_cells(cells: Vec<bool>) -> Self {
        Self { cells }
    }

    /// Number of cells covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the bitmap covers no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether cell `index` overlaps the mesh. Out-of-range cells do not.
    #[inline]
    pub fn is_filled(&self, index: usize) -> bool {
        self.cells.get(index).copied().unwrap_or(false)
    }

    /// Number of overlapping cells.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&filled| filled).count()
    }

    /// Indices of overlapping cells in ascending order.
    pub fn filled_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(index, &filled)| filled.then_some(index))
    }

    /// Raw flags in cell-index order.
    pub fn as_slice(&self) -> &[bool] {
        &self.cells
    }
}

/// Builds the overlap bitmap for `grid`.
///
/// The cube size is taken from `grid`; `options` supplies the axis
/// convention, the chunk size and the cell ceiling. The cell count is
/// checked before the bitmap is allocated.
///
/// The result is identical for any rayon pool size and chunk size.
pub fn sweep(
    triangles: &[Triangle],
    grid: &Grid,
    options: &VoxelizeOptions,
) -> VoxelizeResult<OverlapBitmap> {
    options.validate()?;
    let cell_count = grid.checked_cell_count(options.max_cells)?;
    let chunk_size = options.chunk_size;
    let convention = options.convention;

    let mut cells = vec![false; cell_count];
    if triangles.is_empty() {
        return Ok(OverlapBitmap::from_cells(cells));
    }

    log::trace!(
        "sweeping {} cells against {} triangles in chunks of {}",
        cell_count,
        triangles.len(),
        chunk_size
    );

    cells
        .par_chunks_mut(chunk_size)
        .enumerate()
        .for_each(|(chunk_index, chunk)| {
            let first = chunk_index * chunk_size;
            for (offset, cell) in chunk.iter_mut().enumerate() {
                let cell_box = grid.cell_box(first + offset);
                *cell = triangles
                    .iter()
                    .any(|triangle| triangle_intersects_box(triangle, &cell_box, convention));
            }
        });

    Ok(OverlapBitmap::from_cells(cells))
}
