//! Hit-testing taps against finished lines
//!
//! A tap hits a line when any of a fixed number of evenly spaced sample
//! points along the line falls within the hit radius of the tap. This is
//! a linear scan over lines and samples, which is fine at interactive
//! drawing scale (tens of lines, not thousands).

use crate::domain::geometry::{Line, Point};

/// Maximum distance, in canvas units, at which a tap still hits a line
pub const HIT_RADIUS: f32 = 20.0;

/// Number of sample points checked along each line
///
/// Samples sit at `t = 0.00, 0.05, …, 1.00`, both endpoints included.
pub const SAMPLES_PER_LINE: u32 = 21;

/// Returns the index of the first line within [`HIT_RADIUS`] of `point`
///
/// Lines are scanned in draw order, so when several overlap the query
/// point the lowest index wins. Returns `None` when no line is close
/// enough.
pub fn hit_test(lines: &[Line], point: Point) -> Option<usize> {
    lines.iter().position(|line| line_is_hit(line, point))
}

fn line_is_hit(line: &Line, point: Point) -> bool {
    (0..SAMPLES_PER_LINE).any(|step| {
        let t = step as f32 / (SAMPLES_PER_LINE - 1) as f32;
        line.sample(t).distance_to(point) <= HIT_RADIUS
    })
}
