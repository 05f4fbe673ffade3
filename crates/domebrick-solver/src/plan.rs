//! Whole-dome solve.
//!
//! Folds the per-course solver over the dome circle until the courses reach
//! the apex, collecting for each course the numbers a bricklayer transfers to
//! the bricks: horizontal radii to the center line, the four marked side
//! widths, and the wedge cut angle.

use std::f64::consts::PI;

use domebrick_math::{distance, round_mm, Point2};
use serde::Serialize;

use crate::error::{Result, SolverError};
use crate::key::{solve_key_brick, KeyBrick};
use crate::params::DomeParams;
use crate::profile::{solve_profile, DomeProfile};
use crate::row::{course_seed, Row};
use crate::subdivide::{subdivide_ring, RingSubdivision};
use crate::support::{solve_support, SupportForm};

/// Vertical leg of the cut-angle marking triangle (mm).
const MARKING_GAUGE: f64 = 100.0;
/// Hard cap on course count; reaching it ends the dome like the apex would.
const COURSE_CAP: usize = 100;

/// Marking numbers for one course, ready for a report table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseMarks {
    /// Course number (2 and up; the soldier course is 1).
    pub number: usize,
    /// Bricks in the ring; fixed at course 2 for the whole dome.
    pub bricks: usize,
    /// Vertical seam between bricks (mm).
    pub seam: f64,
    /// Horizontal distance, bottom-outer corner to the center line (mm).
    pub bottom_outer_radius: f64,
    /// Horizontal distance, bottom-inner corner to the center line (mm).
    pub bottom_inner_radius: f64,
    /// Horizontal distance, top-outer corner to the center line (mm).
    pub top_outer_radius: f64,
    /// Horizontal distance, top-inner corner to the center line (mm).
    pub top_inner_radius: f64,
    /// Marked width of the bottom-outer side (mm).
    pub bottom_outer_width: f64,
    /// Marked width of the bottom-inner side (mm).
    pub bottom_inner_width: f64,
    /// Marked width of the top-outer side (mm).
    pub top_outer_width: f64,
    /// Marked width of the top-inner side (mm).
    pub top_inner_width: f64,
    /// Wedge angle marked from the outer sides (degrees); absent when the
    /// course does not taper.
    pub cut_angle_deg: Option<f64>,
}

/// One lying course with its marking numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    /// Solved cross-section geometry.
    pub row: Row,
    /// Derived marking numbers.
    pub marks: CourseMarks,
}

/// Everything needed to draw the template sheet and the report.
#[derive(Debug, Clone, PartialEq)]
pub struct DomePlan {
    /// Parameters the dome was solved for.
    pub params: DomeParams,
    /// Center of the base circle on the sheet.
    pub surface_center: Point2,
    /// The dome circle.
    pub profile: DomeProfile,
    /// The soldier course.
    pub soldier: Row,
    /// Soldier ring tiling at the inner face.
    pub soldier_inner: RingSubdivision,
    /// Soldier ring tiling at the outer face.
    pub soldier_outer: RingSubdivision,
    /// Bricks per lying course, fixed at course 2.
    pub bricks_per_course: usize,
    /// Lying courses, bottom to top.
    pub courses: Vec<Course>,
    /// Support form for the upper courses.
    pub support: SupportForm,
    /// Key brick marking for the closing ring.
    pub key_brick: KeyBrick,
}

/// Wedge cut angle (degrees, rounded) for a course side tapering from
/// `bottom_width` to `top_width`, marked with a triangle 100 mm deep.
///
/// `None` when the course does not taper; the course is then laid uncut.
pub fn cut_angle_deg(bottom_width: f64, top_width: f64) -> Option<f64> {
    let half = (bottom_width - top_width) / 2.0;
    if half <= 0.0 {
        return None;
    }
    let hyp = distance(&Point2::new(0.0, 0.0), &Point2::new(half, MARKING_GAUGE));
    Some(round_mm(90.0 - (half / hyp).asin().to_degrees()))
}

/// Solve a complete dome around `surface_center`.
pub fn solve_plan(params: &DomeParams, surface_center: &Point2) -> Result<DomePlan> {
    params.validate()?;

    let profile = solve_profile(
        surface_center,
        params.inner_radius,
        params.brick_width,
        params.first_row_height,
        params.height,
    )?;

    let mut soldier = Row::soldier(
        surface_center,
        params.inner_radius,
        &Point2::new(profile.outer_top.x, surface_center.y),
        params.first_row_height,
        params.brick_depth,
    )?;
    soldier.correct_top_inner(&profile.center)?;

    // Seen from above, a soldier brick presents its bed face; its chord
    // along the ring is the brick height.
    let soldier_inner = subdivide_ring(params.inner_radius, params.brick_height, params.seam);
    let soldier_outer = subdivide_ring(
        params.inner_radius + params.brick_width / 2.0,
        params.brick_height,
        params.seam,
    );

    // Lying courses share one inner circle, anchored at the corrected
    // soldier top-inner corner.
    let course_inner_radius = distance(&soldier.top_inner, &profile.center);
    let mut cursor = course_seed(&profile.center, &soldier, params.brick_width)?;

    let mut courses: Vec<Course> = Vec::new();
    let mut bricks_per_course = 0usize;

    for number in 2..2 + COURSE_CAP {
        if let Some(last) = courses.last() {
            // The next course would start past the center line: the dome is
            // closed up to the key ring.
            if surface_center.x - last.row.top_outer.x <= 0.0 {
                break;
            }
        }

        let row = Row::course(
            &profile.center,
            course_inner_radius,
            &cursor,
            number,
            params.brick_height,
            params.seam,
            params.brick_width,
        )?;

        let cx = surface_center.x;
        let bottom_outer_radius = row.horizontal_radius(cx, &row.bottom_outer);
        let bottom_inner_radius = row.horizontal_radius(cx, &row.bottom_inner);
        let top_outer_radius = row.horizontal_radius(cx, &row.top_outer);
        let top_inner_radius = row.horizontal_radius(cx, &row.top_inner);

        if number == 2 {
            bricks_per_course =
                subdivide_ring(bottom_outer_radius, params.brick_depth, params.seam).count();
        }

        let side = |radius: f64| {
            round_mm(2.0 * PI * radius / bricks_per_course as f64 - params.seam)
        };
        let bottom_outer_width = side(bottom_outer_radius);
        let top_outer_width = side(top_outer_radius);

        let marks = CourseMarks {
            number,
            bricks: bricks_per_course,
            seam: params.seam,
            bottom_outer_radius,
            bottom_inner_radius,
            top_outer_radius,
            top_inner_radius,
            bottom_outer_width,
            bottom_inner_width: side(bottom_inner_radius),
            top_outer_width,
            top_inner_width: side(top_inner_radius),
            cut_angle_deg: cut_angle_deg(bottom_outer_width, top_outer_width),
        };

        cursor = row.cursor();
        let done = top_outer_radius <= params.brick_width / 2.0;
        courses.push(Course { row, marks });
        if done {
            break;
        }
    }

    let last = courses.last().ok_or_else(|| {
        SolverError::Infeasible("no lying course fits between surface and apex".into())
    })?;

    let support = solve_support(
        &profile.center,
        &soldier,
        &last.row,
        surface_center,
        params.inner_radius,
        params.height,
        params.seam,
    );
    let key_brick = solve_key_brick(last.marks.top_inner_radius, last.marks.top_inner_width);

    Ok(DomePlan {
        params: params.clone(),
        surface_center: *surface_center,
        profile,
        soldier,
        soldier_inner,
        soldier_outer,
        bricks_per_course,
        courses,
        support,
        key_brick,
    })
}
