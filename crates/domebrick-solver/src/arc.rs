//! Moving along a circle by chord distance.
//!
//! The numerical heart of the solver: rows are laid out by repeatedly asking
//! "starting from this point on the circle, where do I land after a straight
//! ruler move of D millimeters along the circumference?". The answer is
//! closed-form: the triangle center-P-P' is isosceles with two sides R and
//! base D, so the swept angle falls out of the law of cosines.

use domebrick_math::{point_angle, to_cartesian, to_polar, Point2};

use crate::error::{Result, SolverError};

/// Move `point` along the circle `(center, radius)` by the straight-line
/// chord `distance`, in the direction of increasing angle.
///
/// Returns the new point (placed exactly on the circle) and its angle
/// relative to the center. Fails when `distance` exceeds the diameter; a
/// chord that long is not physically realizable and must abort the solve
/// rather than clamp.
pub fn move_along_circle(
    center: &Point2,
    radius: f64,
    point: &Point2,
    distance: f64,
) -> Result<(f64, Point2)> {
    let cos_swept =
        (2.0 * radius * radius - distance * distance) / (2.0 * radius * radius);
    if !(-1.0..=1.0).contains(&cos_swept) {
        return Err(SolverError::ChordTooLong {
            chord: distance,
            radius,
        });
    }
    let swept_deg = cos_swept.acos().to_degrees();

    let (_, phi_deg) = to_polar(point - center);
    let moved = to_cartesian(radius, phi_deg + swept_deg);
    let new_point = Point2::new(center.x + moved.x, center.y + moved.y);
    let new_angle = point_angle(center, &new_point);
    Ok((new_angle, new_point))
}

#[cfg(test)]
mod tests {
    use super::*;
    use domebrick_math::distance;
    use std::f64::consts::PI;

    #[test]
    fn test_chord_distance_is_exact() {
        let center = Point2::new(703.0, 663.0);
        let radius = 625.0;
        let start = Point2::new(center.x - radius, center.y);

        let (_, moved) = move_along_circle(&center, radius, &start, 65.0).unwrap();
        assert_eq!(distance(&start, &moved), 65.0);
        assert_eq!(distance(&center, &moved), radius);
    }

    #[test]
    fn test_moves_up_the_left_side() {
        // Rows climb: in screen coordinates the new point sits above and
        // right of the start when sweeping from angle pi.
        let center = Point2::new(0.0, 0.0);
        let start = Point2::new(-100.0, 0.0);
        let (angle, moved) = move_along_circle(&center, 100.0, &start, 20.0).unwrap();
        assert!(moved.y < start.y);
        assert!(moved.x > start.x);
        assert!(angle < PI);
        assert!(angle > PI / 2.0);
    }

    #[test]
    fn test_consecutive_moves_accumulate() {
        let center = Point2::new(0.0, 0.0);
        let start = Point2::new(-500.0, 0.0);
        let (_, a) = move_along_circle(&center, 500.0, &start, 50.0).unwrap();
        let (_, b) = move_along_circle(&center, 500.0, &a, 50.0).unwrap();
        assert_eq!(distance(&a, &b), 50.0);
        assert_eq!(distance(&center, &b), 500.0);
        // Two 50mm chords reach a bit short of a single 100mm chord.
        assert!(distance(&start, &b) < 100.1);
        assert!(distance(&start, &b) > 99.0);
    }

    #[test]
    fn test_chord_longer_than_diameter_fails() {
        let center = Point2::new(0.0, 0.0);
        let start = Point2::new(-100.0, 0.0);
        let err = move_along_circle(&center, 100.0, &start, 250.0).unwrap_err();
        assert_eq!(
            err,
            SolverError::ChordTooLong {
                chord: 250.0,
                radius: 100.0
            }
        );
    }

    #[test]
    fn test_full_diameter_chord_is_allowed() {
        let center = Point2::new(0.0, 0.0);
        let start = Point2::new(-100.0, 0.0);
        let (_, moved) = move_along_circle(&center, 100.0, &start, 200.0).unwrap();
        assert_eq!(distance(&start, &moved), 200.0);
    }
}
