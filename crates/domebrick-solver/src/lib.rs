#![warn(missing_docs)]

//! Geometric solver for masonry dome brick courses.
//!
//! Given brick dimensions and the dome's inner radius and height, solves the
//! cross-section of a hemispherical brick dome: a vertical soldier course on
//! the base circle, lying courses along a dome circle found by a convergence
//! search, each ring split into equal bricks, plus the support form and key
//! brick marking that finish the build. All dimensions are millimeters; the
//! working precision is 0.1 mm.
//!
//! # Example
//!
//! ```ignore
//! use domebrick_math::Point2;
//! use domebrick_solver::{solve_plan, DomeParams};
//!
//! let params = DomeParams::default();
//! let plan = solve_plan(&params, &Point2::new(703.0, 763.0))?;
//!
//! println!("Courses: {}", plan.courses.len());
//! println!("Bricks per course: {}", plan.bricks_per_course);
//! ```

pub mod arc;
pub mod error;
pub mod key;
pub mod params;
pub mod plan;
pub mod profile;
pub mod row;
pub mod search;
pub mod subdivide;
pub mod support;

pub use arc::move_along_circle;
pub use error::{Result, SolverError};
pub use key::{solve_key_brick, KeyBrick};
pub use params::DomeParams;
pub use plan::{cut_angle_deg, solve_plan, Course, CourseMarks, DomePlan};
pub use profile::{solve_profile, DomeProfile};
pub use row::{course_seed, Row, RowCursor, COURSE_CLEARANCE};
pub use search::{converge, Convergence};
pub use subdivide::{subdivide_ring, RingSubdivision};
pub use support::{solve_support, SupportCut, SupportForm};
