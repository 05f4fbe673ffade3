#![warn(missing_docs)]

//! 2D geometric primitives for the domebrick solver.
//!
//! Thin wrappers around nalgebra providing the point, line, and polar
//! operations the dome solver is built from. All coordinates are millimeters
//! in a single fixed plane; angles are radians except for the polar
//! intermediate form, which uses degrees.

use nalgebra::Vector2;

/// A point on the cross-section plane (mm).
pub type Point2 = nalgebra::Point2<f64>;

/// A vector on the cross-section plane (mm).
pub type Vec2 = Vector2<f64>;

/// Round a length to the working precision of 0.1 mm.
///
/// Every distance the solver compares against a threshold goes through this
/// rounding first; the searches are tuned against it.
#[inline]
pub fn round_mm(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Euclidean distance between two points, rounded to 0.1 mm.
pub fn distance(a: &Point2, b: &Point2) -> f64 {
    round_mm((a - b).norm())
}

/// The point at the given signed distance from `from` along the ray toward
/// `to`. Distances beyond `|from to|` extrapolate past `to`.
///
/// Returns `None` when `from` and `to` coincide (the ray is undefined).
pub fn point_on_line(from: &Point2, to: &Point2, dist: f64) -> Option<Point2> {
    let span = (to - from).norm();
    if span == 0.0 {
        return None;
    }
    let ratio = dist / span;
    Some(Point2::new(
        (1.0 - ratio) * from.x + ratio * to.x,
        (1.0 - ratio) * from.y + ratio * to.y,
    ))
}

/// Intersection of two infinite lines, each given by two points.
///
/// Standard 2x2 determinant method. Returns `None` when the determinant is
/// exactly zero (parallel or coincident lines); callers must tolerate false
/// negatives for nearly parallel input.
pub fn lines_intersection(a: (&Point2, &Point2), b: (&Point2, &Point2)) -> Option<Point2> {
    let xdiff = (a.0.x - a.1.x, b.0.x - b.1.x);
    let ydiff = (a.0.y - a.1.y, b.0.y - b.1.y);

    let det = |u: (f64, f64), v: (f64, f64)| u.0 * v.1 - u.1 * v.0;

    let div = det(xdiff, ydiff);
    if div == 0.0 {
        return None;
    }

    let d = (
        det((a.0.x, a.0.y), (a.1.x, a.1.y)),
        det((b.0.x, b.0.y), (b.1.x, b.1.y)),
    );
    Some(Point2::new(det(d, xdiff) / div, det(d, ydiff) / div))
}

/// Convert a vector to polar form `(rho, phi)` with `phi` in degrees.
pub fn to_polar(v: Vec2) -> (f64, f64) {
    (v.norm(), v.y.atan2(v.x).to_degrees())
}

/// Convert polar form `(rho, phi)` (degrees) back to a cartesian vector.
pub fn to_cartesian(rho: f64, phi_deg: f64) -> Vec2 {
    let phi = phi_deg.to_radians();
    Vec2::new(rho * phi.cos(), rho * phi.sin())
}

/// Angle (radians) of a point relative to a circle center.
///
/// Measured against the horizontal through the center and placed in the left
/// half-plane: `pi - asin(|dy| / |cp|)`. All dome rows sweep leftward through
/// `pi`, so this is the only branch the solver needs.
pub fn point_angle(center: &Point2, p: &Point2) -> f64 {
    let hypotenuse = (p - center).norm();
    if hypotenuse == 0.0 {
        return std::f64::consts::PI;
    }
    let adjacent = (p.y - center.y).abs();
    std::f64::consts::PI - (adjacent / hypotenuse).asin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_distance_axis_aligned() {
        assert_eq!(distance(&Point2::new(0.0, 0.0), &Point2::new(0.0, 10.0)), 10.0);
        assert_eq!(distance(&Point2::new(0.0, 0.0), &Point2::new(12.0, 0.0)), 12.0);
    }

    #[test]
    fn test_distance_diagonal_rounds_to_tenth() {
        // sqrt(200) = 14.142... -> 14.1 at working precision
        assert_eq!(distance(&Point2::new(0.0, 0.0), &Point2::new(10.0, 10.0)), 14.1);
    }

    #[test]
    fn test_distance_symmetry_and_identity() {
        let a = Point2::new(3.5, -7.25);
        let b = Point2::new(-41.0, 12.0);
        assert_eq!(distance(&a, &a), 0.0);
        assert_eq!(distance(&a, &b), distance(&b, &a));
    }

    #[test]
    fn test_point_on_line_extrapolates() {
        let p = point_on_line(&Point2::new(50.0, 50.0), &Point2::new(100.0, 100.0), 140.0)
            .unwrap();
        assert_abs_diff_eq!(p.x, 148.99, epsilon = 0.01);
        assert_abs_diff_eq!(p.y, 148.99, epsilon = 0.01);
    }

    #[test]
    fn test_point_on_line_coincident_points() {
        let p = Point2::new(7.0, 7.0);
        assert!(point_on_line(&p, &p, 10.0).is_none());
    }

    #[test]
    fn test_intersection_perpendicular_lines() {
        let horizontal = (Point2::new(150.0, 100.0), Point2::new(250.0, 100.0));
        let vertical = (Point2::new(90.0, 30.0), Point2::new(90.0, 50.0));
        let p = lines_intersection(
            (&vertical.0, &vertical.1),
            (&horizontal.0, &horizontal.1),
        )
        .unwrap();
        assert_eq!(p.x, 90.0);
        assert_eq!(p.y, 100.0);
    }

    #[test]
    fn test_intersection_oblique_lines() {
        let a = (Point2::new(150.0, 100.0), Point2::new(250.0, 120.0));
        let b = (Point2::new(60.0, 30.0), Point2::new(90.0, 70.0));
        let p = lines_intersection((&b.0, &b.1), (&a.0, &a.1)).unwrap();
        assert_abs_diff_eq!(p.x, 105.88, epsilon = 0.01);
        assert_abs_diff_eq!(p.y, 91.17, epsilon = 0.01);

        let c = (Point2::new(70.0, 100.0), Point2::new(250.0, 120.0));
        let d = (Point2::new(60.0, 30.0), Point2::new(120.0, 170.0));
        let q = lines_intersection((&c.0, &c.1), (&d.0, &d.1)).unwrap();
        assert_abs_diff_eq!(q.x, 91.0, epsilon = 0.01);
        assert_abs_diff_eq!(q.y, 102.33, epsilon = 0.01);
    }

    #[test]
    fn test_intersection_parallel_lines() {
        let a = (Point2::new(0.0, 0.0), Point2::new(0.0, 10.0));
        let b = (Point2::new(2.0, 0.0), Point2::new(2.0, 10.0));
        assert!(lines_intersection((&a.0, &a.1), (&b.0, &b.1)).is_none());
    }

    #[test]
    fn test_polar_roundtrip() {
        let (rho, phi) = to_polar(Vec2::new(3.0, 4.0));
        assert_abs_diff_eq!(rho, 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(phi, 53.1301, epsilon = 1e-4);

        let v = to_cartesian(rho, phi);
        assert_abs_diff_eq!(v.x, 3.0, epsilon = 1e-9);
        assert_abs_diff_eq!(v.y, 4.0, epsilon = 1e-9);
    }

    #[test]
    fn test_point_angle_on_horizontal() {
        let center = Point2::new(703.0, 663.0);
        let p = Point2::new(84.0, 663.0);
        assert_abs_diff_eq!(point_angle(&center, &p), PI, epsilon = 1e-12);
    }

    #[test]
    fn test_point_angle_above_horizontal() {
        // Point 45 degrees up-left of the center.
        let center = Point2::new(0.0, 0.0);
        let p = Point2::new(-10.0, -10.0);
        assert_abs_diff_eq!(point_angle(&center, &p), PI - PI / 4.0, epsilon = 1e-12);
    }
}
