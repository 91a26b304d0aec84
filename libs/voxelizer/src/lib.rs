//! # Voxelizer
//!
//! Converts a triangle mesh into the centers of every grid cube that
//! overlaps the mesh surface.
//!
//! ## Architecture
//!
//! ```text
//! vertices + indices ──→ extract_triangles ──┐
//!                                            ├─→ sweep (rayon, SAT) ─→ collect_points ─→ PointCloud
//! bounds + cube size ──→ plan_grid ──────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use voxelizer::{voxelize, Aabb, VoxelizeOptions};
//! use glam::Vec3;
//!
//! let vertices = [Vec3::ZERO, Vec3::X, Vec3::new(0.0, 1.0, 1.0)];
//! let bounds = Aabb::from_points(&vertices);
//! let options = VoxelizeOptions::new(0.5).unwrap().with_use_scale(false);
//!
//! let cloud = voxelize(&vertices, &[0, 1, 2], &bounds, &options).unwrap();
//! assert!(!cloud.is_empty());
//! ```

pub mod bounds;
pub mod error;
pub mod grid;
pub mod options;
pub mod point_cloud;
pub mod sat;
pub mod source;
pub mod sweep;
pub mod triangle;

pub use bounds::Aabb;
pub use error::{VoxelizeError, VoxelizeResult};
pub use grid::{plan_grid, Grid};
pub use options::{AxisConvention, VoxelizeOptions};
pub use point_cloud::{collect_points, PointCloud};
pub use sat::{plane_intersects_box, triangle_intersects_box, CellBox, Plane};
pub use source::{bake, baked_asset_name, MeshData, MeshSource, PointCloudSink};
pub use sweep::{sweep, OverlapBitmap};
pub use triangle::{extract_triangles, Triangle};

use glam::Vec3;

/// Voxelizes an indexed triangle mesh.
///
/// This is the main entry point of the pipeline. `bounds` is the
/// object-space bounding box of the mesh; when `options.use_scale` is set,
/// vertices, bounds size and grid origin are all multiplied by
/// `options.scale`.
///
/// The returned points are ordered by ascending cell index (x slowest, z
/// fastest) regardless of how many threads ran the sweep. The cloud is
/// empty when the grid has no cells or the mesh has no triangles.
///
/// # Errors
///
/// - [`VoxelizeError::InvalidParameter`] for a non-positive cube size or
///   invalid options
/// - [`VoxelizeError::InvalidGeometry`] for malformed index data
/// - [`VoxelizeError::ResourceExhaustion`] if the grid exceeds
///   `options.max_cells`
pub fn voxelize(
    vertices: &[Vec3],
    indices: &[u32],
    bounds: &Aabb,
    options: &VoxelizeOptions,
) -> VoxelizeResult<PointCloud> {
    options.validate()?;
    let scale = options.use_scale.then_some(options.scale);

    let grid = plan_grid(bounds, options.cube_size, scale, options.convention);
    let cell_count = grid.checked_cell_count(options.max_cells)?;
    let triangles = extract_triangles(vertices, indices, scale)?;

    log::debug!(
        "voxelizing {} triangles on a {:?} grid ({} cells, cube size {}, {:?})",
        triangles.len(),
        grid.dims,
        cell_count,
        grid.cube_size,
        options.convention
    );

    if cell_count == 0 {
        log::warn!(
            "grid {:?} has no cells for bounds size {}",
            grid.dims,
            bounds.size()
        );
        return Ok(PointCloud::new(Vec::new(), options.cube_size, *bounds));
    }

    let bitmap = sweep(&triangles, &grid, options)?;
    let points = collect_points(&bitmap, &grid);

    log::info!("filled {} of {} cells", points.len(), cell_count);
    Ok(PointCloud::new(points, options.cube_size, *bounds))
}
