#![warn(missing_docs)]

//! SVG template sheet emitter for domebrick plans.
//!
//! Turns a solved [`domebrick_solver::DomePlan`] into one long printable SVG
//! sheet with the dome cross-section, per-course brick marking panels, the
//! support form, and the key brick blanks. The drawing consumes numbers from
//! the solver; it computes no geometry of its own.

pub mod sheet;
pub mod svg;

pub use sheet::{render, sheet_origin};
pub use svg::{LabelPlacement, SegmentStyle, SvgDocument};
