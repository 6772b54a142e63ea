// File: crates/timeline-cli/src/schedule.rs
// Summary: The fixed schedule: internship, funding, teaching, conferences, submission goals.

use chrono::NaiveDate;
use timeline_core::TimelineEntry;

fn d(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("schedule dates are valid")
}

/// Build the timeline entries.
///
/// `today` anchors the start of the in-progress internship; everything else
/// is a fixed calendar range. Changing the schedule means editing this list;
/// the dates are compiled in on purpose, there is no input file.
pub fn build_events(today: NaiveDate) -> Vec<TimelineEntry> {
    vec![
        TimelineEntry::new("Internship at Epic", today, d(2025, 12, 31)),
        TimelineEntry::new("Funding (18 months)", d(2026, 1, 1), d(2027, 6, 30)),
        TimelineEntry::new("Unfunded period", d(2027, 7, 1), d(2027, 12, 31)),
        TimelineEntry::new("Teaching duties", d(2026, 1, 1), d(2026, 12, 31)),
        // Conference windows follow recent editions; adjust as new dates are
        // announced.
        TimelineEntry::new("NeurIPS 2025", d(2025, 12, 2), d(2025, 12, 7)),
        TimelineEntry::new("AAAI 2026", d(2026, 1, 20), d(2026, 1, 27)),
        TimelineEntry::new("ICML 2026", d(2026, 7, 13), d(2026, 7, 19)),
        TimelineEntry::new("NeurIPS 2026", d(2026, 12, 1), d(2026, 12, 7)),
        TimelineEntry::new("AAAI 2027", d(2027, 2, 1), d(2027, 2, 8)),
        TimelineEntry::new("ICML 2027", d(2027, 7, 10), d(2027, 7, 16)),
        TimelineEntry::new("NeurIPS 2027", d(2027, 12, 1), d(2027, 12, 7)),
        // Submission goals are single-day entries and easy to move.
        TimelineEntry::new("PIRC submission", d(2026, 5, 16), d(2026, 5, 16)),
        TimelineEntry::new("Second paper submission", d(2027, 8, 15), d(2027, 8, 15)),
    ]
}
