//! Tests for the triangle / box separating-axis test.

use super::*;

const BOTH: [AxisConvention; 2] = [AxisConvention::Literal, AxisConvention::Corrected];

fn unit_box() -> CellBox {
    CellBox::new(Vec3::ZERO, Vec3::ONE)
}

/// Triangle in the plane `z = height`, centered over the origin.
fn flat_triangle(height: f32) -> Triangle {
    Triangle::new(
        Vec3::new(-0.5, -0.5, height),
        Vec3::new(0.5, -0.5, height),
        Vec3::new(0.0, 0.5, height),
    )
}

#[test]
fn triangle_inside_box_intersects() {
    let tri = Triangle::new(
        Vec3::new(-0.2, -0.2, 0.1),
        Vec3::new(0.3, -0.1, -0.2),
        Vec3::new(0.0, 0.4, 0.0),
    );
    for convention in BOTH {
        assert!(triangle_intersects_box(&tri, &unit_box(), convention));
    }
}

#[test]
fn triangle_far_away_is_rejected() {
    let tri = Triangle::new(
        Vec3::new(10.0, 10.0, 10.0),
        Vec3::new(11.0, 10.0, 10.0),
        Vec3::new(10.0, 11.0, 10.0),
    );
    for convention in BOTH {
        assert!(!triangle_intersects_box(&tri, &unit_box(), convention));
    }
}

#[test]
fn triangle_on_box_face_counts_as_touching() {
    for convention in BOTH {
        assert!(triangle_intersects_box(&flat_triangle(1.0), &unit_box(), convention));
        assert!(triangle_intersects_box(&flat_triangle(-1.0), &unit_box(), convention));
    }
}

#[test]
fn triangle_just_past_box_face_is_rejected() {
    for convention in BOTH {
        assert!(!triangle_intersects_box(&flat_triangle(1.001), &unit_box(), convention));
    }
}

#[test]
fn large_triangle_spanning_box_intersects() {
    // Vertices all lie outside the box but the face cuts straight through it.
    let tri = Triangle::new(
        Vec3::new(-10.0, -10.0, 0.0),
        Vec3::new(10.0, -10.0, 0.0),
        Vec3::new(0.0, 10.0, 0.0),
    );
    for convention in BOTH {
        assert!(triangle_intersects_box(&tri, &unit_box(), convention));
    }
}

#[test]
fn triangle_beyond_box_corner_is_rejected() {
    // Every box-axis projection overlaps the box, but the triangle's plane
    // passes beyond the (1, 1, 1) corner.
    let tri = Triangle::new(
        Vec3::new(3.5, 0.0, 0.0),
        Vec3::new(0.0, 3.5, 0.0),
        Vec3::new(0.0, 0.0, 3.5),
    );
    assert!(!triangle_intersects_box(&tri, &unit_box(), AxisConvention::Corrected));
}

#[test]
fn literal_plane_radius_ignores_x_normal() {
    // A genuine overlap whose plane is x = 0.5. The literal plane radius has
    // no x term, so it collapses to zero and the triangle is rejected.
    let tri = Triangle::new(
        Vec3::new(0.5, -0.5, -0.5),
        Vec3::new(0.5, 0.5, -0.5),
        Vec3::new(0.5, -0.5, 0.5),
    );
    assert!(triangle_intersects_box(&tri, &unit_box(), AxisConvention::Corrected));
    assert!(!triangle_intersects_box(&tri, &unit_box(), AxisConvention::Literal));
}

#[test]
fn degenerate_triangle_depends_on_convention() {
    let segment = Triangle::new(
        Vec3::new(-0.5, 0.0, 0.0),
        Vec3::new(0.5, 0.0, 0.0),
        Vec3::new(0.0, 0.0, 0.0),
    );
    assert!(triangle_intersects_box(&segment, &unit_box(), AxisConvention::Corrected));
    assert!(!triangle_intersects_box(&segment, &unit_box(), AxisConvention::Literal));
}

#[test]
fn plane_touching_box_is_inclusive_corrected() {
    let convention = AxisConvention::Corrected;
    assert!(plane_intersects_box(&Plane::new(Vec3::Z, 1.0), &unit_box(), convention));
    assert!(!plane_intersects_box(&Plane::new(Vec3::Z, 1.01), &unit_box(), convention));
}

#[test]
fn plane_touching_box_is_inclusive_literal() {
    // The literal radius for a z-facing plane is 2 * ez, so contact is at 2.
    let convention = AxisConvention::Literal;
    assert!(plane_intersects_box(&Plane::new(Vec3::Z, 2.0), &unit_box(), convention));
    assert!(!plane_intersects_box(&Plane::new(Vec3::Z, 2.01), &unit_box(), convention));
}

#[test]
fn literal_plane_radius_double_counts_z() {
    // Literal radius is 2 * ez * |nz| + ey * |ny|, so a z-facing plane
    // reaches twice as far as the corrected one.
    let plane = Plane::new(Vec3::Z, 1.5);
    assert!(plane_intersects_box(&plane, &unit_box(), AxisConvention::Literal));
    assert!(!plane_intersects_box(&plane, &unit_box(), AxisConvention::Corrected));
}
