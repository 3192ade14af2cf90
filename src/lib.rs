//! LED Wall Curvature Calculator
//!
//! Computes the installed outline of a curved LED video wall built from
//! rigid 50 cm modules:
//! - Polyline of module joints, viewed from above
//! - Bounding width and depth with the ends levelled
//! - Arc length (total module width laid edge to edge)
//!
//! The section editor, project files and result export sit on top of the
//! pure [`geometry::compute`] function.

pub mod config;
pub mod designer;
pub mod export;
pub mod geometry;

pub use geometry::{compute, CalculationResult, Point, Section, MODULE_WIDTH_CM};
