// File: crates/timeline-core/src/layout.rs
// Summary: Sorted bar geometry: one horizontal bar per entry, in day units.

use crate::entry::TimelineEntry;
use crate::scale::day_number;

/// Width substituted for zero- and negative-duration spans so they stay
/// visible as thin marks instead of disappearing.
pub const MIN_BAR_DAYS: f64 = 0.1;

/// Geometry of one bar: day units on X, row index on Y.
#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub label: String,
    pub row: usize,
    pub left: f64,
    pub width: f64,
}

/// Sort entries by start date (stable: ties keep input order) and lay out one
/// bar per row, earliest first.
pub fn layout_bars(entries: &[TimelineEntry]) -> Vec<Bar> {
    let mut sorted: Vec<&TimelineEntry> = entries.iter().collect();
    sorted.sort_by_key(|e| e.start);

    sorted
        .iter()
        .enumerate()
        .map(|(row, e)| {
            let left = day_number(e.start);
            let width = day_number(e.end) - left;
            Bar {
                label: e.label.clone(),
                row,
                left,
                width: if width > 0.0 { width } else { MIN_BAR_DAYS },
            }
        })
        .collect()
}

/// Day-number range covered by the bars, padded by 2% of the span per side
/// (at least half a day) so bars never touch the plot edge.
pub fn day_span(bars: &[Bar]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for b in bars {
        min = min.min(b.left);
        max = max.max(b.left + b.width);
    }
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    let margin = ((max - min) * 0.02).max(0.5);
    (min - margin, max + margin)
}
