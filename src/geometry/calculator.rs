//! Curvature calculation.
//!
//! Walks the wall module by module to build its centerline, then levels the
//! chord between the two ends and normalizes the outline into display space.

use glam::DVec2;

use super::{Bounds, CalculationResult, Point, Section, MODULE_WIDTH_CM};

/// Compute the outline and dimensions of a wall built from `sections`, in order.
///
/// Never fails: empty input or zero module counts produce a single point at
/// the origin with zero extent.
pub fn compute(sections: &[Section]) -> CalculationResult {
    let raw = accumulate_path(sections);
    let total_modules: u64 = sections.iter().map(|s| s.module_count as u64).sum();
    let arc_length = total_modules as f64 * MODULE_WIDTH_CM;

    if raw.len() < 2 {
        return CalculationResult {
            points: raw.into_iter().map(Point::from).collect(),
            width: arc_length,
            depth: 0.0,
            arc_length,
        };
    }

    let rotated = level_chord(&raw);
    let bounds = Bounds::from_points(&rotated);
    let width = bounds.width();
    let depth = bounds.height();

    // Center horizontally, lowest point on the baseline
    let center_x = bounds.center_x();
    let points = rotated
        .iter()
        .map(|p| Point::new(p.x - center_x, p.y - bounds.min_y))
        .collect();

    log::debug!(
        "Computed outline for {} modules: width {:.2} cm, depth {:.2} cm",
        total_modules,
        width,
        depth
    );

    CalculationResult {
        points,
        width,
        depth,
        arc_length,
    }
}

/// Lay modules end to end starting at the origin with a heading of zero.
///
/// Each module advances along the average of its entry and exit heading. The
/// heading is accumulated by repeated addition, one module at a time.
fn accumulate_path(sections: &[Section]) -> Vec<DVec2> {
    let mut points = vec![DVec2::ZERO];
    let mut bearing = 0.0_f64;
    let mut current = DVec2::ZERO;

    for section in sections {
        let angle_rad = section.angle_per_module.to_radians();

        for _ in 0..section.module_count {
            let mid_bearing = bearing + angle_rad / 2.0;
            current += MODULE_WIDTH_CM * DVec2::new(mid_bearing.cos(), mid_bearing.sin());
            points.push(current);
            bearing += angle_rad;
        }
    }

    points
}

/// Rotate about the origin so the first and last points share the same y.
fn level_chord(points: &[DVec2]) -> Vec<Point> {
    let (first, last) = match (points.first(), points.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return Vec::new(),
    };

    let chord = last - first;
    let rotation = DVec2::from_angle(-chord.y.atan2(chord.x));

    points.iter().map(|p| Point::from(rotation.rotate(*p))).collect()
}
