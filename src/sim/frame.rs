//! Box reference frame geometry
//!
//! Boundary collisions are axis-aligned tests, so they run in the box's own
//! un-rotated frame. Positions move between frames with a translate + rotate;
//! velocities are free vectors and only rotate.

use glam::Vec2;

use crate::consts::BOX_BORDER;

/// Transform a world-space point into box-local space
///
/// Translates by `-center`, then rotates by `-angle`.
#[inline]
pub fn to_local(point: Vec2, center: Vec2, angle: f32) -> Vec2 {
    rotate_vector(point - center, -angle)
}

/// Transform a box-local point back into world space
///
/// Rotates by `+angle`, then translates by `+center`. Inverse of [`to_local`].
#[inline]
pub fn from_local(point: Vec2, center: Vec2, angle: f32) -> Vec2 {
    rotate_vector(point, angle) + center
}

/// Rotate a free vector (velocity) by `angle` radians
#[inline]
pub fn rotate_vector(v: Vec2, angle: f32) -> Vec2 {
    let (s, c) = angle.sin_cos();
    Vec2::new(v.x * c - v.y * s, v.x * s + v.y * c)
}

/// Geometric center of the box in world space
#[inline]
pub fn box_center(viewport: Vec2) -> Vec2 {
    viewport / 2.0
}

/// Side length of the box
///
/// Sized so the diagonal fits the smaller viewport dimension minus the border,
/// which keeps every corner on screen at any rotation.
#[inline]
pub fn box_side(viewport: Vec2) -> f32 {
    (viewport.min_element() - BOX_BORDER) / std::f32::consts::SQRT_2
}

/// Half of the box side; the local-space boundary on each axis
#[inline]
pub fn box_half_size(viewport: Vec2) -> f32 {
    box_side(viewport) / 2.0
}

/// World-space corners of the rotated box, in outline order
pub fn box_corners(center: Vec2, half: f32, angle: f32) -> [Vec2; 4] {
    [
        Vec2::new(-half, half),
        Vec2::new(half, half),
        Vec2::new(half, -half),
        Vec2::new(-half, -half),
    ]
    .map(|corner| from_local(corner, center, angle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_to_local_translates_then_rotates() {
        let center = Vec2::new(400.0, 300.0);
        // 10px right of center, box turned a quarter: lands on local -y
        let local = to_local(Vec2::new(410.0, 300.0), center, FRAC_PI_2);
        assert!(local.x.abs() < 1e-4);
        assert!((local.y + 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_rotate_vector_half_turn() {
        let v = rotate_vector(Vec2::new(3.0, -4.0), PI);
        assert!((v.x + 3.0).abs() < 1e-4);
        assert!((v.y - 4.0).abs() < 1e-4);
    }

    #[test]
    fn test_rotate_vector_has_no_translation() {
        assert_eq!(rotate_vector(Vec2::ZERO, 1.234), Vec2::ZERO);
    }

    #[test]
    fn test_box_geometry_default_viewport() {
        let viewport = Vec2::new(800.0, 600.0);
        assert_eq!(box_center(viewport), Vec2::new(400.0, 300.0));
        let side = box_side(viewport);
        assert!((side * std::f32::consts::SQRT_2 - 560.0).abs() < 1e-3);
        assert!((box_half_size(viewport) - side / 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_box_corners_unrotated() {
        let corners = box_corners(Vec2::new(100.0, 100.0), 10.0, 0.0);
        assert_eq!(corners[0], Vec2::new(90.0, 110.0));
        assert_eq!(corners[2], Vec2::new(110.0, 90.0));
    }

    proptest! {
        #[test]
        fn prop_local_round_trip(
            px in -2000.0f32..2000.0,
            py in -2000.0f32..2000.0,
            cx in -1000.0f32..1000.0,
            cy in -1000.0f32..1000.0,
            angle in -20.0f32..20.0,
        ) {
            let point = Vec2::new(px, py);
            let center = Vec2::new(cx, cy);
            let back = from_local(to_local(point, center, angle), center, angle);
            prop_assert!((back - point).abs().max_element() < 2e-3);
        }

        #[test]
        fn prop_rotation_preserves_length(
            vx in -500.0f32..500.0,
            vy in -500.0f32..500.0,
            angle in -20.0f32..20.0,
        ) {
            let v = Vec2::new(vx, vy);
            let rotated = rotate_vector(v, angle);
            prop_assert!((rotated.length() - v.length()).abs() < 1e-2);
        }
    }
}
