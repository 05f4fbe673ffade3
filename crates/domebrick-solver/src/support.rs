//! Support form geometry.
//!
//! While the mortar cures, the upper courses rest on a curved plywood form.
//! The form is cut from a rectangular blank (inner radius wide, dome height
//! tall): one arc concentric with the inner dome surface, stepped where each
//! course lands. All points here are in sheet coordinates, sharing the plane
//! of the cross-section drawing.

use std::f64::consts::FRAC_PI_2;

use domebrick_math::{distance, Point2};

use crate::row::Row;

/// Angular step of the arc sweep (radians).
const ARC_STEP: f64 = 5e-4;

/// One course landing on the form: a point on the support arc and the inner
/// end of its horizontal cut.
#[derive(Debug, Clone, PartialEq)]
pub struct SupportCut {
    /// Point on the support arc.
    pub arc_point: Point2,
    /// Inner end of the horizontal cut at this course.
    pub cut_point: Point2,
}

/// The support form: blank rectangle, support arc, and per-course cuts.
#[derive(Debug, Clone, PartialEq)]
pub struct SupportForm {
    /// Top-left corner of the blank, at the apex inner point.
    pub top_left: Point2,
    /// Blank width (mm) = dome inner radius.
    pub width: f64,
    /// Blank height (mm) = dome apex height.
    pub height: f64,
    /// Center of the support arc, on the blank's left edge.
    pub radius_center: Point2,
    /// Support arc radius (mm, rounded).
    pub radius: f64,
    /// Arc length claimed per course: inner course height plus one seam (mm).
    pub row_inner_height: f64,
    /// Course landings, bottom of the form upward.
    pub cuts: Vec<SupportCut>,
}

/// Lay out the support form for a solved dome.
///
/// `last` is the final lying course; its inner height spaces the cuts (all
/// lying courses share it, since the inner face is one circle).
pub fn solve_support(
    dome_center: &Point2,
    soldier: &Row,
    last: &Row,
    surface_center: &Point2,
    inner_radius: f64,
    apex_height: f64,
    seam: f64,
) -> SupportForm {
    let top_left = Point2::new(surface_center.x, surface_center.y - apex_height);
    let radius = distance(&soldier.top_inner, dome_center);
    let radius_center = Point2::new(top_left.x, top_left.y + radius);
    let row_inner_height = last.inner_height() + seam;

    let on_arc = |theta: f64| {
        Point2::new(
            radius_center.x + radius * theta.cos(),
            radius_center.y - radius * theta.sin(),
        )
    };

    // The arc leaves the blank at the soldier course's top-inner level;
    // sweep up to it before placing any cuts.
    let mut theta = 0.0;
    while theta < FRAC_PI_2 {
        if on_arc(theta).y <= soldier.top_inner.y {
            break;
        }
        theta += ARC_STEP;
    }

    let mut cuts = Vec::new();
    let mut previous: Option<Point2> = None;
    while theta < FRAC_PI_2 && cuts.len() < last.number {
        let arc_point = on_arc(theta);
        let is_last = arc_point.x <= top_left.x;

        let record = match previous {
            None => true,
            Some(prev) => distance(&arc_point, &prev) >= row_inner_height || is_last,
        };
        if record {
            let cut_point = if cuts.len() + 1 == last.number {
                Point2::new(top_left.x, arc_point.y)
            } else {
                Point2::new(arc_point.x - row_inner_height, arc_point.y)
            };
            cuts.push(SupportCut {
                arc_point,
                cut_point,
            });
            previous = Some(arc_point);
        }

        if is_last {
            break;
        }
        theta += ARC_STEP;
    }

    SupportForm {
        top_left,
        width: inner_radius,
        height: apex_height,
        radius_center,
        radius,
        row_inner_height,
        cuts,
    }
}
