//! Piecewise-linear lookup over published nomogram curves.
//!
//! Every curve in [`crate::tables`] is read through [`interpolate`]. Queries outside a table's
//! hour range are clamped flat to the nearest end point.

/// One published checkpoint: bilirubin level (mg/dL) at a given hour of life.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    pub hours: f64,
    pub level: f64,
}

impl CurvePoint {
    pub const fn new(hours: f64, level: f64) -> Self {
        Self { hours, level }
    }
}

/// A curve is an ordered, non-empty run of checkpoints sorted by `hours`.
pub type CurveTable = [CurvePoint];

/// Interpolate `points` at `hours`, or `None` for an empty table.
///
/// Duplicate `hours` values are allowed; when the bracket collapses onto a duplicate the left
/// point's level is returned.
pub fn try_interpolate(points: &CurveTable, hours: f64) -> Option<f64> {
    let first = points.first()?;
    let last = points.last()?;

    if hours <= first.hours {
        return Some(first.level);
    }
    if hours >= last.hours {
        return Some(last.level);
    }

    // `hours < last.hours` here, so a right bracket always exists.
    let right_index = points.iter().position(|p| p.hours >= hours)?;
    let right = points[right_index];
    let left = right_index
        .checked_sub(1)
        .map_or(*first, |index| points[index]);

    if left.hours == right.hours {
        return Some(left.level);
    }
    if hours == right.hours {
        return Some(right.level);
    }

    let rise = (hours - left.hours) * (right.level - left.level);
    Some(left.level + rise / (right.hours - left.hours))
}

/// Interpolate one of the static reference curves.
///
/// The reference tables are never empty, so this returns `0.0` only for a caller-supplied empty
/// slice.
pub fn interpolate(points: &CurveTable, hours: f64) -> f64 {
    try_interpolate(points, hours).unwrap_or_default()
}
