//! Single brick course geometry.
//!
//! A course is a trapezoid in the cross-section plane: four corner points on
//! two concentric circles. The first course stands its bricks vertically
//! (soldier course) on the base circle; every later course lies on the dome
//! circle and is produced from a cursor left by the course below it.

use domebrick_math::{distance, lines_intersection, point_angle, round_mm, Point2};

use crate::arc::move_along_circle;
use crate::error::{Result, SolverError};
use crate::search::converge;

/// Extra chord length (mm) a course claims beyond its brick height, leaving
/// room for the bed joint above it.
pub const COURSE_CLEARANCE: f64 = 1.0;

/// Angular step of the soldier-course top search (radians).
const SOLDIER_STEP: f64 = 1e-4;
/// Iteration cap of the soldier-course top search.
const SOLDIER_CAP: usize = 10_000;

/// Where the next course starts: the previous course's top-outer corner and
/// its angle about the circle center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowCursor {
    /// Top-outer corner of the previous course.
    pub point: Point2,
    /// Angle of that corner about the circle center (radians).
    pub angle: f64,
}

/// One solved course of the dome cross-section.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// 1-based course number; 1 is the soldier course.
    pub number: usize,
    /// True for the soldier course (bricks standing on end).
    pub vertical: bool,
    /// Radius of the inner face circle (mm).
    pub inner_radius: f64,
    /// Radius of the outer face circle (mm).
    pub outer_radius: f64,
    /// Angle of the bottom edge about the circle center (radians).
    pub bottom_angle: f64,
    /// Angle of the top edge about the circle center (radians).
    pub top_angle: f64,
    /// Bottom-outer corner.
    pub bottom_outer: Point2,
    /// Top-outer corner.
    pub top_outer: Point2,
    /// Bottom-inner corner.
    pub bottom_inner: Point2,
    /// Top-inner corner.
    pub top_inner: Point2,
}

impl Row {
    /// Solve the soldier course: vertical bricks standing on the surface,
    /// spanning `brick_depth` radially from the base circle of
    /// `inner_radius` around `center`.
    ///
    /// The outer corners sit on the vertical through `cx - outer_radius`;
    /// the top edge is found by sweeping the outer-circle angle down from
    /// `pi` until the chord from the bottom corner reaches the brick height
    /// plus [`COURSE_CLEARANCE`].
    pub fn soldier(
        center: &Point2,
        inner_radius: f64,
        seed: &Point2,
        height: f64,
        brick_depth: f64,
    ) -> Result<Row> {
        let outer_radius = inner_radius + brick_depth;
        let bottom_outer = Point2::new(center.x - outer_radius, seed.y);
        let bottom_inner = Point2::new(center.x - inner_radius, seed.y);
        let target = height + COURSE_CLEARANCE;

        let (top_angle, top_outer) = converge(SOLDIER_CAP, |k| {
            let theta = std::f64::consts::PI - SOLDIER_STEP * (k + 1) as f64;
            let candidate = Point2::new(bottom_outer.x, center.y - outer_radius * theta.sin());
            if distance(&candidate, &bottom_outer) >= target {
                Some((theta, candidate))
            } else {
                None
            }
        })
        .or_err(SolverError::SearchBudget {
            what: "soldier course top edge",
            steps: SOLDIER_CAP,
        })?;

        let top_inner = Point2::new(
            center.x - inner_radius,
            center.y - inner_radius * top_angle.sin(),
        );

        Ok(Row {
            number: 1,
            vertical: true,
            inner_radius,
            outer_radius,
            bottom_angle: std::f64::consts::PI,
            top_angle,
            bottom_outer,
            top_outer,
            bottom_inner,
            top_inner,
        })
    }

    /// Solve a lying course on the dome circle around `center`, starting a
    /// bed-joint `seam` past `cursor` and spanning `height` along the arc.
    ///
    /// The course bricks lie flat, so the radial extent of the outer face is
    /// half a brick width past `inner_radius`.
    pub fn course(
        center: &Point2,
        inner_radius: f64,
        cursor: &RowCursor,
        number: usize,
        height: f64,
        seam: f64,
        brick_width: f64,
    ) -> Result<Row> {
        let outer_radius = inner_radius + brick_width / 2.0;
        let (bottom_angle, bottom_outer) =
            move_along_circle(center, outer_radius, &cursor.point, seam)?;
        let (top_angle, top_outer) =
            move_along_circle(center, outer_radius, &bottom_outer, height)?;

        let on_inner = |theta: f64| {
            Point2::new(
                center.x + inner_radius * theta.cos(),
                center.y - inner_radius * theta.sin(),
            )
        };

        Ok(Row {
            number,
            vertical: false,
            inner_radius,
            outer_radius,
            bottom_angle,
            top_angle,
            bottom_outer,
            top_outer,
            bottom_inner: on_inner(bottom_angle),
            top_inner: on_inner(top_angle),
        })
    }

    /// Pull the top-inner corner onto the ray from the dome center through
    /// the top-outer corner, so the bed joint above this course points at the
    /// dome center.
    ///
    /// The corner slides along its own side line (bottom-inner to top-inner),
    /// which keeps the inner face straight.
    pub fn correct_top_inner(&mut self, dome_center: &Point2) -> Result<()> {
        self.top_inner = lines_intersection(
            (&self.top_outer, dome_center),
            (&self.bottom_inner, &self.top_inner),
        )
        .ok_or(SolverError::ParallelLines("correcting a course top-inner corner"))?;
        Ok(())
    }

    /// The cursor the next course starts from.
    pub fn cursor(&self) -> RowCursor {
        RowCursor {
            point: self.top_outer,
            angle: self.top_angle,
        }
    }

    /// Rounded chord length of the inner face, bottom corner to top corner.
    pub fn inner_height(&self) -> f64 {
        distance(&self.bottom_inner, &self.top_inner)
    }

    /// Horizontal distance (mm, rounded) from a corner to the dome center
    /// line, for transferring the drawing onto the build site.
    pub fn horizontal_radius(&self, center_x: f64, corner: &Point2) -> f64 {
        round_mm((corner.x - center_x).abs())
    }
}

/// The cursor that moves course generation from the base circle onto the
/// dome circle: the point half a brick width out from the soldier course's
/// top-inner corner toward its top-outer corner, with its angle about the
/// dome center.
pub fn course_seed(
    dome_center: &Point2,
    soldier: &Row,
    brick_width: f64,
) -> Result<RowCursor> {
    let point = domebrick_math::point_on_line(
        &soldier.top_inner,
        &soldier.top_outer,
        brick_width / 2.0,
    )
    .ok_or(SolverError::CoincidentPoints("seeding the second course"))?;
    Ok(RowCursor {
        point,
        angle: point_angle(dome_center, &point),
    })
}
