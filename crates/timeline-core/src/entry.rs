// File: crates/timeline-core/src/entry.rs
// Summary: Timeline entry model: one labeled calendar date span.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EntryError {
    #[error("end date {end} precedes start date {start}")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },
}

/// One labeled (start, end) date pair to be drawn as a horizontal bar.
///
/// Labels need not be unique; identical entries render as separate rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimelineEntry {
    pub label: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl TimelineEntry {
    /// Construct an entry without checking the date order. A reversed range
    /// (end before start) is accepted and renders as a bar clamped to the
    /// minimum visible width.
    pub fn new(label: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self { label: label.into(), start, end }
    }

    /// Try to construct an entry enforcing `start <= end`.
    pub fn try_new(
        label: impl Into<String>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Self, EntryError> {
        if end < start {
            return Err(EntryError::EndBeforeStart { start, end });
        }
        Ok(Self::new(label, start, end))
    }

    /// Span length in whole days: zero for single-day entries, negative for
    /// reversed ranges.
    pub fn duration_days(&self) -> i64 {
        self.end.signed_duration_since(self.start).num_days()
    }
}
