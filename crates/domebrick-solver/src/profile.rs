//! Dome profile circle.
//!
//! The dome cross-section is a circular arc through two anchors: the outer-top
//! corner of the soldier course and the apex at the requested dome height. The
//! center of that arc lies on the vertical through the surface center; it is
//! found by walking a pivot down from the apex until both anchors are
//! equidistant, with the soldier corner pulled inward whenever the arc would
//! leave it uncovered by the second course.

use domebrick_math::{distance, point_on_line, Point2};

use crate::error::{Result, SolverError};
use crate::search::converge;

/// Pivot descent iteration cap.
const PROFILE_CAP: usize = 6000;
/// Growth of the pivot descent step per iteration (mm).
const PIVOT_STEP_GROWTH: f64 = 3.0;

/// The solved dome circle.
#[derive(Debug, Clone, PartialEq)]
pub struct DomeProfile {
    /// Center of the dome circle, on the vertical through the surface center.
    pub center: Point2,
    /// Dome radius (mm, rounded), measured to `outer_top`.
    pub radius: f64,
    /// Outer-top corner of the soldier course, after any inward correction.
    pub outer_top: Point2,
}

/// Solve the dome circle for a base circle of `inner_radius` around
/// `surface_center`, an apex `apex_height` above the surface, and a soldier
/// course `first_row_height` tall.
pub fn solve_profile(
    surface_center: &Point2,
    inner_radius: f64,
    brick_width: f64,
    first_row_height: f64,
    apex_height: f64,
) -> Result<DomeProfile> {
    let outer_top = Point2::new(
        surface_center.x - inner_radius - brick_width / 2.0,
        surface_center.y - first_row_height,
    );
    let inner_x = surface_center.x - inner_radius;
    let apex_inner = Point2::new(surface_center.x, surface_center.y - apex_height);
    let apex_outer = Point2::new(surface_center.x, apex_inner.y - brick_width / 2.0);

    // The corrected corner persists between pivot candidates; once pulled
    // inward it stays there unless a later pivot pulls it further.
    let mut corrected: Option<Point2> = None;
    let walk_steps = (brick_width * 2.0).ceil() as usize;

    converge(PROFILE_CAP, |k| {
        let offset = 1.0 + PIVOT_STEP_GROWTH * k as f64;
        let pivot = Point2::new(apex_inner.x, apex_inner.y + offset);

        // Walk 1mm steps from the corner toward the pivot until the ray
        // crosses the soldier inner face.
        let mut crossing = outer_top;
        for i in 0..walk_steps {
            match point_on_line(&outer_top, &pivot, i as f64) {
                Some(p) => crossing = p,
                None => return Some(Err(SolverError::CoincidentPoints(
                    "walking the soldier inner face",
                ))),
            }
            if crossing.x >= inner_x {
                break;
            }
        }

        let overhang = distance(&outer_top, &crossing);
        if overhang >= brick_width / 2.0 {
            corrected = point_on_line(&outer_top, &pivot, overhang - brick_width / 2.0);
        }
        let anchor = corrected?;

        let diff = distance(&pivot, &anchor) as i64 - distance(&pivot, &apex_outer) as i64;
        if diff.abs() <= 1 {
            Some(Ok(DomeProfile {
                center: pivot,
                radius: distance(&pivot, &anchor),
                outer_top: anchor,
            }))
        } else {
            None
        }
    })
    .or_err(SolverError::SearchBudget {
        what: "dome circle center",
        steps: PROFILE_CAP,
    })?
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_profile() -> DomeProfile {
        solve_profile(&Point2::new(703.0, 823.0), 503.0, 250.0, 125.0, 440.0).unwrap()
    }

    #[test]
    fn test_center_on_surface_vertical() {
        let profile = default_profile();
        assert_eq!(profile.center.x, 703.0);
        // Below the apex, above (or at) the surface extended downward.
        assert!(profile.center.y > 823.0 - 440.0);
    }

    #[test]
    fn test_radius_measured_to_corrected_corner() {
        let profile = default_profile();
        assert_eq!(
            profile.radius,
            distance(&profile.center, &profile.outer_top)
        );
        assert!(profile.radius > 0.0);
    }

    #[test]
    fn test_anchors_equidistant_within_tolerance() {
        let profile = default_profile();
        let apex_outer = Point2::new(703.0, 823.0 - 440.0 - 125.0);
        let diff = distance(&profile.center, &profile.outer_top) as i64
            - distance(&profile.center, &apex_outer) as i64;
        assert!(diff.abs() <= 1);
    }

    #[test]
    fn test_correction_pulls_corner_inward() {
        let profile = default_profile();
        // The raw corner sits at cx - inner - w/2; the corrected one has been
        // pulled toward the pivot, never outward.
        assert!(profile.outer_top.x >= 703.0 - 503.0 - 125.0);
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(default_profile(), default_profile());
    }
}
