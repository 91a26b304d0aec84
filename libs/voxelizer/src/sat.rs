//! # Triangle / Box Overlap
//!
//! Separating-axis test between a triangle and an axis-aligned box over the
//! 13 candidate axes: 9 edge-by-box-axis cross products, 3 box face normals
//! and the triangle normal.
//!
//! Every rejection uses a strict `>` comparison, so a triangle that only
//! touches the box counts as overlapping.
//!
//! The [`AxisConvention::Literal`] formulas differ from the textbook ones on
//! the y- and z-crossed edge axes, the box face tests and the plane radius.
//! They are kept component-for-component so baked outputs stay reproducible.

use glam::Vec3;

use crate::options::AxisConvention;
use crate::triangle::Triangle;

/// Axis-aligned box given by a center and per-axis extents.
///
/// `extents` is used as the half-width in every formula. The overlap sweep
/// sets it to the full cube size, so a cell box is twice as wide as the cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellBox {
    /// Box center.
    pub center: Vec3,
    /// Half-width along each axis.
    pub extents: Vec3,
}

impl CellBox {
    /// Creates a box from its center and extents.
    pub fn new(center: Vec3, extents: Vec3) -> Self {
        Self { center, extents }
    }
}

/// Plane `dot(normal, p) = distance`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Plane normal, unit length unless built from a degenerate triangle.
    pub normal: Vec3,
    /// Signed distance from the origin along `normal`.
    pub distance: f32,
}

impl Plane {
    /// Creates a plane from a normal and a distance.
    pub fn new(normal: Vec3, distance: f32) -> Self {
        Self { normal, distance }
    }
}

/// Returns `true` if `triangle` overlaps or touches `cell`.
///
/// # Example
///
/// ```rust
/// use voxelizer::{triangle_intersects_box, AxisConvention, CellBox, Triangle};
/// use glam::Vec3;
///
/// let tri = Triangle::new(Vec3::ZERO, Vec3::X, Vec3::Y);
/// let inside = CellBox::new(Vec3::splat(0.25), Vec3::splat(0.5));
/// let far = CellBox::new(Vec3::splat(5.0), Vec3::splat(0.5));
/// assert!(triangle_intersects_box(&tri, &inside, AxisConvention::Literal));
/// assert!(!triangle_intersects_box(&tri, &far, AxisConvention::Literal));
/// ```
pub fn triangle_intersects_box(
    triangle: &Triangle,
    cell: &CellBox,
    convention: AxisConvention,
) -> bool {
    let e = cell.extents;
    let v = [
        triangle.a - cell.center,
        triangle.b - cell.center,
        triangle.c - cell.center,
    ];
    let f = [v[1] - v[0], v[2] - v[1], v[0] - v[2]];

    for edge in f {
        for (axis, r) in edge_axes(edge, e, convention) {
            let (min, max) = project(&v, axis);
            if (-max).max(min) > r {
                return false;
            }
        }
    }

    let face_axes = match convention {
        AxisConvention::Literal => [2, 1, 2],
        AxisConvention::Corrected => [0, 1, 2],
    };
    for axis in face_axes {
        let (min, max) = min_max(v[0][axis], v[1][axis], v[2][axis]);
        if max < -e[axis] || min > e[axis] {
            return false;
        }
    }

    // A degenerate triangle has no normal. Literal mode lets the NaN from
    // normalizing a zero vector fail the plane test.
    let cross = f[1].cross(f[0]);
    let normal = match convention {
        AxisConvention::Literal => cross.normalize(),
        AxisConvention::Corrected => cross.normalize_or_zero(),
    };
    let plane = Plane::new(normal, normal.dot(triangle.a));
    plane_intersects_box(&plane, cell, convention)
}

/// Returns `true` if `plane` passes through or touches `cell`.
pub fn plane_intersects_box(plane: &Plane, cell: &CellBox, convention: AxisConvention) -> bool {
    let e = cell.extents;
    let n = plane.normal.abs();
    let r = match convention {
        AxisConvention::Literal => e.z * n.z + e.y * n.y + e.z * n.z,
        AxisConvention::Corrected => e.x * n.x + e.y * n.y + e.z * n.z,
    };
    let s = plane.normal.dot(cell.center) - plane.distance;
    s.abs() <= r
}

/// The three cross-product axes of `f` with the box axes x, y and z, each
/// paired with the box's projection radius on it.
#[inline]
fn edge_axes(f: Vec3, e: Vec3, convention: AxisConvention) -> [(Vec3, f32); 3] {
    let x_axis = (
        Vec3::new(0.0, -f.z, f.y),
        e.y * f.z.abs() + e.z * f.y.abs(),
    );
    match convention {
        AxisConvention::Literal => [
            x_axis,
            (
                Vec3::new(f.z, 0.0, -f.z),
                e.z * f.z.abs() + e.z * f.z.abs(),
            ),
            (
                Vec3::new(-f.y, f.z, 0.0),
                e.z * f.y.abs() + e.y * f.z.abs(),
            ),
        ],
        AxisConvention::Corrected => [
            x_axis,
            (
                Vec3::new(f.z, 0.0, -f.x),
                e.x * f.z.abs() + e.z * f.x.abs(),
            ),
            (
                Vec3::new(-f.y, f.x, 0.0),
                e.x * f.y.abs() + e.y * f.x.abs(),
            ),
        ],
    }
}

#[inline]
fn project(v: &[Vec3; 3], axis: Vec3) -> (f32, f32) {
    min_max(v[0].dot(axis), v[1].dot(axis), v[2].dot(axis))
}

#[inline]
fn min_max(a: f32, b: f32, c: f32) -> (f32, f32) {
    (a.min(b).min(c), a.max(b).max(c))
}

#[cfg(test)]
mod tests;
