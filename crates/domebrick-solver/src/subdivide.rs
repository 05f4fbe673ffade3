//! Splitting a ring into equal bricks.
//!
//! A course seen from above is a ring; the bricks that tile it are chords of
//! that ring separated by vertical seams. The sweep walks the circle in fixed
//! angular steps, cutting whenever the chord from the previous cut reaches a
//! full brick plus one seam, then spreads the remainder arc over all bricks
//! so the ring closes with equal pieces.

use std::f64::consts::PI;

use domebrick_math::{distance, round_mm, Point2};

/// Angular step of the subdivision sweep (radians).
const SWEEP_STEP: f64 = 1e-4;

/// An equal-brick tiling of one ring.
#[derive(Debug, Clone, PartialEq)]
pub struct RingSubdivision {
    /// Chord width of each brick (mm); all entries equal after
    /// redistribution, up to working precision.
    pub widths: Vec<f64>,
    /// Seam between bricks (mm), as requested.
    pub seam: f64,
}

impl RingSubdivision {
    /// Number of bricks in the ring.
    pub fn count(&self) -> usize {
        self.widths.len()
    }
}

/// Split the circle of `radius` into bricks of roughly `brick_width` chord,
/// separated by `seam`.
pub fn subdivide_ring(radius: f64, brick_width: f64, seam: f64) -> RingSubdivision {
    let origin = Point2::new(0.0, 0.0);
    let at = |theta: f64| Point2::new(
        origin.x + radius * theta.cos(),
        origin.y - radius * theta.sin(),
    );

    let mut widths = Vec::new();
    let mut prev = at(0.0);
    let mut last_chord = 0.0;

    let steps = (2.0 * PI / SWEEP_STEP) as usize;
    for k in 1..=steps {
        let cur = at(SWEEP_STEP * k as f64);
        last_chord = distance(&prev, &cur);
        if last_chord >= brick_width + seam {
            widths.push(last_chord - seam);
            prev = cur;
        }
    }

    if widths.is_empty() {
        // Circle too small for even one full brick: a single piece takes the
        // whole circumference minus its seam.
        return RingSubdivision {
            widths: vec![round_mm(2.0 * PI * radius - seam)],
            seam,
        };
    }

    // The sweep leaves a partial brick before closing the ring; shave every
    // full brick down so the leftover grows to the same size.
    let remainder = last_chord;
    let n = widths.len();
    let shave = (brick_width - remainder) / n as f64;
    for w in widths.iter_mut() {
        *w -= shave;
    }
    widths.push(remainder + (n as f64 - 1.0) * shave);

    RingSubdivision { widths, seam }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_closes_with_equal_bricks() {
        let ring = subdivide_ring(600.0, 125.0, 4.0);
        let n = ring.count();
        assert!(n > 1);
        assert!(ring.widths.iter().all(|w| *w > 0.0));

        // Equal pieces: every width within working precision of the first.
        let first = ring.widths[0];
        assert!(ring.widths.iter().all(|w| (w - first).abs() < 1.0));

        // Bricks plus seams cover the circumference, within sweep error.
        let covered: f64 = ring.widths.iter().sum::<f64>() + n as f64 * ring.seam;
        let circumference = 2.0 * PI * 600.0;
        assert!((covered - circumference).abs() / circumference < 0.01);
    }

    #[test]
    fn test_widths_near_requested_brick() {
        let ring = subdivide_ring(600.0, 125.0, 4.0);
        for w in &ring.widths {
            assert!(*w > 115.0 && *w < 135.0, "width {w}");
        }
    }

    #[test]
    fn test_tiny_ring_yields_single_piece() {
        let ring = subdivide_ring(15.0, 125.0, 4.0);
        assert_eq!(ring.count(), 1);
        assert_eq!(ring.widths[0], round_mm(2.0 * PI * 15.0 - 4.0));
    }

    #[test]
    fn test_larger_radius_fits_more_bricks() {
        let small = subdivide_ring(400.0, 125.0, 4.0);
        let large = subdivide_ring(800.0, 125.0, 4.0);
        assert!(large.count() > small.count());
    }
}
