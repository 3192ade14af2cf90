//! Wall geometry: sections in, dimensioned outline out.

mod bounds;
mod calculator;

use std::fmt;
use std::str::FromStr;

use glam::DVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use bounds::Bounds;
pub use calculator::compute;

/// Physical width of one LED module in centimeters. Every module is identical.
pub const MODULE_WIDTH_CM: f64 = 50.0;

/// Width below which an outline is considered to have no drawable extent.
pub const VISIBLE_WIDTH_EPSILON: f64 = 1e-6;

/// A contiguous run of modules sharing one angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Number of modules in this run. Zero contributes nothing.
    pub module_count: u32,
    /// Turn contributed by each module, in degrees. Positive is counter-clockwise.
    pub angle_per_module: f64,
}

impl Section {
    pub fn new(module_count: u32, angle_per_module: f64) -> Self {
        Self {
            module_count,
            angle_per_module,
        }
    }

    /// Straight run of `module_count` modules.
    pub fn straight(module_count: u32) -> Self {
        Self::new(module_count, 0.0)
    }
}

impl Default for Section {
    /// The starting layout offered to a new design: five modules at 5°.
    fn default() -> Self {
        Self::new(5, 5.0)
    }
}

/// Errors from parsing `"<count>:<angle>"` section text.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SectionParseError {
    #[error("expected <modules>:<angle>, got '{0}'")]
    MissingSeparator(String),
    #[error("invalid module count '{0}'")]
    InvalidCount(String),
    #[error("invalid angle '{0}'")]
    InvalidAngle(String),
}

impl FromStr for Section {
    type Err = SectionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (count, angle) = s
            .split_once(':')
            .ok_or_else(|| SectionParseError::MissingSeparator(s.to_string()))?;

        let module_count = count
            .trim()
            .parse::<u32>()
            .map_err(|_| SectionParseError::InvalidCount(count.trim().to_string()))?;

        let angle_per_module = angle
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|a| a.is_finite())
            .ok_or_else(|| SectionParseError::InvalidAngle(angle.trim().to_string()))?;

        Ok(Self::new(module_count, angle_per_module))
    }
}

/// A 2D point in centimeters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Point> for DVec2 {
    fn from(p: Point) -> Self {
        DVec2::new(p.x, p.y)
    }
}

/// Dimensioned outline of the wall.
///
/// `points` are centered horizontally on `x = 0` and shifted so the lowest
/// point sits at `y = 0`; the y axis reads as depth from the mounting wall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    /// Module joints in assembly order, one more than the module count.
    pub points: Vec<Point>,
    /// Horizontal span in centimeters.
    pub width: f64,
    /// Front-to-back spread in centimeters.
    pub depth: f64,
    /// Total module width laid edge to edge, in centimeters.
    pub arc_length: f64,
}

impl CalculationResult {
    /// Number of modules that produced this outline.
    pub fn total_modules(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Whether the outline has enough extent to be drawn.
    pub fn has_visible_shape(&self) -> bool {
        self.points.len() >= 2 && self.width > VISIBLE_WIDTH_EPSILON
    }
}

impl fmt::Display for CalculationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Modules:    {}", self.total_modules())?;
        writeln!(f, "Width:      {:.2} cm", self.width)?;
        writeln!(f, "Depth:      {:.2} cm", self.depth)?;
        write!(f, "Arc length: {:.2} cm", self.arc_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_from_str() {
        let section: Section = "5:2.5".parse().unwrap();
        assert_eq!(section, Section::new(5, 2.5));

        let section: Section = " 3 : -7.5 ".parse().unwrap();
        assert_eq!(section, Section::new(3, -7.5));
    }

    #[test]
    fn test_section_from_str_errors() {
        assert_eq!(
            "5".parse::<Section>(),
            Err(SectionParseError::MissingSeparator("5".to_string()))
        );
        assert_eq!(
            "-1:5".parse::<Section>(),
            Err(SectionParseError::InvalidCount("-1".to_string()))
        );
        assert_eq!(
            "4:abc".parse::<Section>(),
            Err(SectionParseError::InvalidAngle("abc".to_string()))
        );
        assert!("4:inf".parse::<Section>().is_err());
    }

    #[test]
    fn test_section_serde_names() {
        let json = serde_json::to_string(&Section::new(2, 10.0)).unwrap();
        assert_eq!(json, r#"{"moduleCount":2,"anglePerModule":10.0}"#);
    }

    #[test]
    fn test_summary_formatting() {
        let result = CalculationResult {
            points: vec![Point::new(-50.0, 0.0), Point::new(50.0, 0.0)],
            width: 100.0,
            depth: 0.0,
            arc_length: 50.0,
        };
        let text = result.to_string();
        assert!(text.contains("Width:      100.00 cm"));
        assert!(text.contains("Arc length: 50.00 cm"));
        assert!(result.has_visible_shape());
    }
}
