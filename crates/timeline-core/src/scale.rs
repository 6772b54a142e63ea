// File: crates/timeline-core/src/scale.rs
// Summary: Date (X) and row (Y) scale transforms from chart space to pixels.

use chrono::{Datelike, NaiveDate};

/// Continuous day index for a calendar date (days since the common era).
/// Only differences matter to layout; the absolute origin is arbitrary.
pub fn day_number(date: NaiveDate) -> f64 {
    date.num_days_from_ce() as f64
}

/// Calendar date containing the (fractional) day index, rounding down.
pub fn floor_date(day: f64) -> NaiveDate {
    NaiveDate::from_num_days_from_ce_opt(day.floor() as i32).unwrap_or(NaiveDate::MIN)
}

/// Calendar date containing the (fractional) day index, rounding up.
pub fn ceil_date(day: f64) -> NaiveDate {
    NaiveDate::from_num_days_from_ce_opt(day.ceil() as i32).unwrap_or(NaiveDate::MAX)
}

/// Horizontal scale mapping a day-number range onto [left_px, right_px].
#[derive(Clone, Copy, Debug)]
pub struct DateScale {
    pub min_day: f64,
    pub max_day: f64,
    pub left_px: f32,
    pub right_px: f32,
}

impl DateScale {
    pub fn new(min_day: f64, max_day: f64, left_px: f32, right_px: f32) -> Self {
        let mut s = Self { min_day, max_day, left_px, right_px };
        if (s.max_day - s.min_day).abs() < 1e-9 { s.max_day = s.min_day + 1.0; }
        s
    }

    #[inline]
    pub fn to_px(&self, day: f64) -> f32 {
        let span = (self.max_day - self.min_day).max(1e-9);
        self.left_px + (((day - self.min_day) / span) as f32) * (self.right_px - self.left_px)
    }
}

/// Vertical scale: one row per entry, row 0 at the top. Rows are assigned in
/// ascending start order, so the earliest entry renders topmost.
#[derive(Clone, Copy, Debug)]
pub struct RowScale {
    pub rows: usize,
    pub top_px: f32,
    pub bottom_px: f32,
}

impl RowScale {
    pub fn new(rows: usize, top_px: f32, bottom_px: f32) -> Self {
        Self { rows, top_px, bottom_px }
    }

    /// Vertical distance between adjacent row centers.
    #[inline]
    pub fn pitch(&self) -> f32 {
        (self.bottom_px - self.top_px) / self.rows.max(1) as f32
    }

    /// Pixel y of the center of `row`.
    #[inline]
    pub fn center_y(&self, row: usize) -> f32 {
        self.top_px + (row as f32 + 0.5) * self.pitch()
    }
}
