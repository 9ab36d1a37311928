//! Staggered rows with overlapping windows.

use super::shortest_path::rotate_shortest;
use crate::glyph::{DigitAngles, COLUMNS, ROWS};
use crate::util::easing::ease_in_out_cubic;

/// Offset between consecutive row start times, as a fraction of the whole
/// transition. Fixed for the 2x3 grid.
pub const STAGGER: f32 = 0.25;

/// Length of each row's window. Three rows at this length and
/// [`STAGGER`] offset tile `[0, 1]` exactly, neighbours overlapping by half.
pub const ROW_DURATION: f32 = 2.0 * STAGGER;

/// Grid row (`0..ROWS`) of a clock index.
#[inline]
pub fn row_for_clock(index: usize) -> usize {
    index / COLUMNS
}

/// Local progress of `row` at global progress `t`, clamped to `[0, 1]`.
///
/// Row `r` runs over `[r * STAGGER, r * STAGGER + ROW_DURATION]`.
pub fn row_progress(t: f32, row: usize) -> f32 {
    debug_assert!(row < ROWS);
    let start = row as f32 * STAGGER;
    ((t - start) / ROW_DURATION).clamp(0.0, 1.0)
}

/// Rows animate in sequence `ab -> cd -> ef` with overlapping windows. Each
/// row's two clocks use eased shortest-path rotation over their own window.
pub fn staggered(from: &DigitAngles, to: &DigitAngles, t: f32) -> DigitAngles {
    from.zip_clocks(to, |i, start, end| {
        let eased = ease_in_out_cubic(row_progress(t, row_for_clock(i)));
        start.zip_hands(end, |a, b| rotate_shortest(a, b, eased))
    })
}
