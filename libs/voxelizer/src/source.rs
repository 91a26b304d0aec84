//! # Collaborator Interfaces
//!
//! The engine reads meshes through [`MeshSource`] and hands finished point
//! clouds to a [`PointCloudSink`]. Asset loading, persistence formats and
//! scene access all live behind these traits.

use config::constants::BAKED_ASSET_SUFFIX;
use glam::Vec3;

use crate::bounds::Aabb;
use crate::error::{VoxelizeError, VoxelizeResult};
use crate::options::VoxelizeOptions;
use crate::point_cloud::PointCloud;
use crate::voxelize;

/// Read access to a triangle mesh.
pub trait MeshSource {
    /// Asset name, used to name the stored point cloud.
    fn name(&self) -> &str;

    /// Vertex positions in object space.
    fn vertices(&self) -> &[Vec3];

    /// Triangle indices, three per triangle.
    fn indices(&self) -> &[u32];

    /// Object-space bounds. Defaults to the bounds of [`MeshSource::vertices`].
    fn bounds(&self) -> Aabb {
        Aabb::from_points(self.vertices())
    }
}

/// Receives baked point clouds.
pub trait PointCloudSink {
    /// Stores `cloud` under `asset_name`.
    ///
    /// Failures should be reported as [`VoxelizeError::Sink`].
    fn store(&mut self, asset_name: &str, cloud: &PointCloud) -> VoxelizeResult<()>;
}

/// An owned mesh with precomputed bounds.
///
/// # Example
///
/// ```rust
/// use voxelizer::{MeshData, MeshSource};
/// use glam::Vec3;
///
/// let mesh = MeshData::new("tri", vec![Vec3::ZERO, Vec3::X, Vec3::Y], vec![0, 1, 2]);
/// assert_eq!(mesh.bounds().max, Vec3::new(1.0, 1.0, 0.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    name: String,
    vertices: Vec<Vec3>,
    indices: Vec<u32>,
    bounds: Aabb,
}

impl MeshData {
    /// Creates a mesh, computing its bounds from `vertices`.
    pub fn new(name: impl Into<String>, vertices: Vec<Vec3>, indices: Vec<u32>) -> Self {
        let bounds = Aabb::from_points(&vertices);
        Self {
            name: name.into(),
            vertices,
            indices,
            bounds,
        }
    }

    /// Overrides the bounds, e.g. with ones stored alongside an imported asset.
    pub fn with_bounds(mut self, bounds: Aabb) -> Self {
        self.bounds = bounds;
        self
    }
}

impl MeshSource for MeshData {
    fn name(&self) -> &str {
        &self.name
    }

    fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    fn indices(&self) -> &[u32] {
        &self.indices
    }

    fn bounds(&self) -> Aabb {
        self.bounds
    }
}

/// Name under which the point cloud of `mesh_name` is stored.
pub fn baked_asset_name(mesh_name: &str) -> String {
    format!("{mesh_name}{BAKED_ASSET_SUFFIX}")
}

/// Voxelizes `source` and stores the result in `sink`.
///
/// Nothing is stored if voxelization fails. Returns the stored cloud.
pub fn bake<S, K>(source: &S, options: &VoxelizeOptions, sink: &mut K) -> VoxelizeResult<PointCloud>
where
    S: MeshSource + ?Sized,
    K: PointCloudSink + ?Sized,
{
    let cloud = voxelize(source.vertices(), source.indices(), &source.bounds(), options)?;
    let asset_name = baked_asset_name(source.name());
    sink.store(&asset_name, &cloud)?;
    log::info!("stored {} points as '{}'", cloud.len(), asset_name);
    Ok(cloud)
}

/// Collects stored clouds in memory, keyed by asset name in store order.
impl PointCloudSink for Vec<(String, PointCloud)> {
    fn store(&mut self, asset_name: &str, cloud: &PointCloud) -> VoxelizeResult<()> {
        if self.iter().any(|(name, _)| name == asset_name) {
            return Err(VoxelizeError::sink(format!(
                "asset '{asset_name}' already exists"
            )));
        }
        self.push((asset_name.to_string(), cloud.clone()));
        Ok(())
    }
}
