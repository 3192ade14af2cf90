//! Axis-aligned bounding box over outline points.

use super::Point;

/// Tightest axis-aligned box around a set of points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Compute bounds of `points`. An empty slice yields an inverted (infinite) box.
    pub fn from_points(points: &[Point]) -> Self {
        let mut bounds = Bounds {
            min_x: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            min_y: f64::INFINITY,
            max_y: f64::NEG_INFINITY,
        };

        for p in points {
            bounds.min_x = bounds.min_x.min(p.x);
            bounds.max_x = bounds.max_x.max(p.x);
            bounds.min_y = bounds.min_y.min(p.y);
            bounds.max_y = bounds.max_y.max(p.y);
        }

        bounds
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Horizontal center of the box.
    pub fn center_x(&self) -> f64 {
        self.min_x + self.width() / 2.0
    }
}
