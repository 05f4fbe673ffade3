//! Key brick marking.
//!
//! The dome closes with a ring of wedge-cut key bricks. Their cut points are
//! marked on a circle of the final course's top-inner radius, spaced by that
//! course's top side width, using the same chord sweep as ring subdivision
//! but at a coarser step.

use std::f64::consts::PI;

use domebrick_math::{distance, Point2};

/// Angular step of the key marking sweep (radians).
const KEY_STEP: f64 = 5e-3;

/// Cut marks for the closing ring, around a local origin.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyBrick {
    /// Marking circle radius: the final course's top-inner radius (mm).
    pub radius: f64,
    /// Chord between marks: the final course's top side width (mm).
    pub side: f64,
    /// Mark points on the circle, origin-centered.
    pub points: Vec<Point2>,
}

/// Sweep the marking circle and place a point wherever the chord from the
/// previous mark reaches `side`.
pub fn solve_key_brick(radius: f64, side: f64) -> KeyBrick {
    let at = |theta: f64| Point2::new(radius * theta.cos(), -radius * theta.sin());

    let mut points = vec![at(0.0)];
    let mut prev = points[0];
    let steps = (2.0 * PI / KEY_STEP) as usize;
    for k in 1..=steps {
        let cur = at(KEY_STEP * k as f64);
        if distance(&cur, &prev) >= side {
            points.push(cur);
            prev = cur;
        }
    }

    KeyBrick {
        radius,
        side,
        points,
    }
}
