//! Error types for the dome solver.
//!
//! Every variant is fatal: the bounded searches already retry internally up
//! to their caps, so a surfaced error means the input parameters cannot form
//! a valid dome and the caller must change them, not retry.

use thiserror::Error;

/// Errors that can occur while solving dome geometry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// A chord move was requested that the circle cannot realize.
    #[error("chord {chord}mm is longer than the diameter of a {radius}mm circle")]
    ChordTooLong {
        /// Requested straight-line distance (mm).
        chord: f64,
        /// Radius of the circle being moved along (mm).
        radius: f64,
    },

    /// A corner point required a unique line intersection that does not exist.
    #[error("lines do not intersect while {0}")]
    ParallelLines(&'static str),

    /// A bounded search ran out of iterations without converging.
    #[error("{what} did not converge within {steps} steps")]
    SearchBudget {
        /// Which search failed.
        what: &'static str,
        /// The iteration cap that was exhausted.
        steps: usize,
    },

    /// Two points that must define a direction coincide.
    #[error("coincident points while {0}")]
    CoincidentPoints(&'static str),

    /// A physical parameter is outside its accepted range.
    #[error("invalid {name}: {value}mm, expected {min} to {max}mm")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Rejected value (mm).
        value: f64,
        /// Lower bound (mm, inclusive).
        min: f64,
        /// Upper bound (mm, inclusive).
        max: f64,
    },

    /// The parameter combination produces no buildable geometry.
    #[error("infeasible dome: {0}")]
    Infeasible(String),
}

/// Result type for solver operations.
pub type Result<T> = std::result::Result<T, SolverError>;
