//! # Geometry Extraction
//!
//! Flattens indexed mesh buffers into a list of world-space triangles.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{VoxelizeError, VoxelizeResult};

/// A triangle given by its three corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    /// First corner.
    pub a: Vec3,
    /// Second corner.
    pub b: Vec3,
    /// Third corner.
    pub c: Vec3,
}

impl Triangle {
    /// Creates a triangle from its corners.
    pub fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self { a, b, c }
    }

    /// Multiplies every corner component-wise by `scale`.
    #[inline]
    pub fn scaled(&self, scale: Vec3) -> Self {
        Self {
            a: self.a * scale,
            b: self.b * scale,
            c: self.c * scale,
        }
    }
}

/// Builds one [`Triangle`] per index triple.
///
/// With `scale` set, every vertex is multiplied component-wise before it is
/// stored, the same transform the grid planner applies to the bounds.
///
/// Fails with [`VoxelizeError::InvalidGeometry`] if the index count is not a
/// multiple of three or an index is out of range.
///
/// # Example
///
/// ```rust
/// use voxelizer::extract_triangles;
/// use glam::Vec3;
///
/// let vertices = [Vec3::ZERO, Vec3::X, Vec3::Y];
/// let tris = extract_triangles(&vertices, &[0, 1, 2], Some(Vec3::splat(2.0))).unwrap();
/// assert_eq!(tris[0].b, Vec3::new(2.0, 0.0, 0.0));
/// ```
pub fn extract_triangles(
    vertices: &[Vec3],
    indices: &[u32],
    scale: Option<Vec3>,
) -> VoxelizeResult<Vec<Triangle>> {
    if indices.len() % 3 != 0 {
        return Err(VoxelizeError::invalid_geometry(format!(
            "index count {} is not a multiple of 3",
            indices.len()
        )));
    }

    let vertex = |index: u32| -> VoxelizeResult<Vec3> {
        vertices.get(index as usize).copied().ok_or_else(|| {
            VoxelizeError::invalid_geometry(format!(
                "index {} out of range for {} vertices",
                index,
                vertices.len()
            ))
        })
    };

    indices
        .chunks_exact(3)
        .map(|tri| -> VoxelizeResult<Triangle> {
            let triangle = Triangle::new(vertex(tri[0])?, vertex(tri[1])?, vertex(tri[2])?);
            Ok(match scale {
                Some(scale) => triangle.scaled(scale),
                None => triangle,
            })
        })
        .collect()
}
