//! Coercion of raw editor text into valid section values.

/// Smallest module count a section can be edited down to.
pub const MIN_MODULE_COUNT: u32 = 1;

/// Slider range and step offered for the per-module angle, in degrees.
pub const ANGLE_SLIDER_MIN: f64 = -15.0;
pub const ANGLE_SLIDER_MAX: f64 = 15.0;
pub const ANGLE_SLIDER_STEP: f64 = 2.5;

/// Interpret module count text, never failing.
///
/// Integer text is used as-is, fractional text truncates toward zero, and
/// anything empty, unparseable or below one becomes [`MIN_MODULE_COUNT`].
pub fn coerce_module_count(text: &str) -> u32 {
    let text = text.trim();

    let parsed = text.parse::<i64>().ok().or_else(|| {
        text.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(|v| v.trunc() as i64)
    });

    match parsed {
        Some(v) if v >= MIN_MODULE_COUNT as i64 => v.min(u32::MAX as i64) as u32,
        _ => MIN_MODULE_COUNT,
    }
}

/// Interpret angle text. Returns `None` when the text is not a finite number,
/// in which case the previous angle should be kept.
pub fn parse_angle(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Snap an angle to the nearest slider step, within the slider range.
pub fn snap_angle(angle: f64) -> f64 {
    let snapped = (angle / ANGLE_SLIDER_STEP).round() * ANGLE_SLIDER_STEP;
    snapped.clamp(ANGLE_SLIDER_MIN, ANGLE_SLIDER_MAX)
}
