//! Planar geometry helpers for the path model
//!
//! All functions are total over finite inputs; degenerate cases resolve by convention.

use glam::Vec2;

/// Planar point in playfield coordinates (y grows downward)
pub type Point2D = Vec2;

/// Closest point on a segment, with the clamp parameter along it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub point: Vec2,
    /// Position along the segment, clamped to [0, 1]
    pub t: f32,
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (b - a).length()
}

/// Direction from `a` to `b` in radians (0 when the points coincide)
#[inline]
pub fn angle_of(a: Vec2, b: Vec2) -> f32 {
    let d = b - a;
    if d == Vec2::ZERO {
        return 0.0;
    }
    d.y.atan2(d.x)
}

/// Orthogonal projection of `p` onto the segment `start..end`
///
/// A zero-length segment projects everything onto `start` with `t = 0`.
pub fn project_onto_segment(p: Vec2, start: Vec2, end: Vec2) -> Projection {
    let seg = end - start;
    let len_sq = seg.length_squared();

    if len_sq == 0.0 {
        return Projection { point: start, t: 0.0 };
    }

    let t = ((p - start).dot(seg) / len_sq).clamp(0.0, 1.0);
    Projection {
        point: start + seg * t,
        t,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_distance() {
        assert!((distance(Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0)) - 5.0).abs() < 1e-6);
        assert_eq!(distance(Vec2::new(7.0, 7.0), Vec2::new(7.0, 7.0)), 0.0);
    }

    #[test]
    fn test_angle_of() {
        let o = Vec2::ZERO;
        assert!((angle_of(o, Vec2::new(1.0, 0.0))).abs() < 1e-6);
        assert!((angle_of(o, Vec2::new(0.0, 1.0)) - PI / 2.0).abs() < 1e-6);
        assert!((angle_of(o, Vec2::new(-1.0, 0.0)) - PI).abs() < 1e-6);
        // Coincident points have no direction
        assert_eq!(angle_of(Vec2::new(5.0, 5.0), Vec2::new(5.0, 5.0)), 0.0);
    }

    #[test]
    fn test_project_interior() {
        let proj = project_onto_segment(Vec2::new(5.0, 3.0), Vec2::ZERO, Vec2::new(10.0, 0.0));
        assert!((proj.point - Vec2::new(5.0, 0.0)).length() < 1e-5);
        assert!((proj.t - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_project_clamps_to_endpoints() {
        let a = Vec2::ZERO;
        let b = Vec2::new(10.0, 0.0);

        let before = project_onto_segment(Vec2::new(-4.0, 2.0), a, b);
        assert_eq!(before.point, a);
        assert_eq!(before.t, 0.0);

        let after = project_onto_segment(Vec2::new(25.0, -3.0), a, b);
        assert_eq!(after.point, b);
        assert_eq!(after.t, 1.0);
    }

    #[test]
    fn test_project_degenerate_segment() {
        let a = Vec2::new(3.0, 3.0);
        let proj = project_onto_segment(Vec2::new(50.0, 50.0), a, a);
        assert_eq!(proj.point, a);
        assert_eq!(proj.t, 0.0);
    }
}
