// File: crates/timeline-core/tests/ticks.rs
// Purpose: Quarter-month tick placement and date label formatting.

use chrono::NaiveDate;
use timeline_core::quarter_ticks;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn ticks_land_on_quarter_month_starts() {
    let ticks = quarter_ticks(d(2025, 11, 20), d(2026, 8, 5));
    let dates: Vec<_> = ticks.iter().map(|t| t.date).collect();
    assert_eq!(dates, vec![d(2026, 1, 1), d(2026, 4, 1), d(2026, 7, 1)]);
}

#[test]
fn ticks_on_the_range_edges_are_included() {
    let ticks = quarter_ticks(d(2026, 4, 1), d(2026, 10, 1));
    let dates: Vec<_> = ticks.iter().map(|t| t.date).collect();
    assert_eq!(dates, vec![d(2026, 4, 1), d(2026, 7, 1), d(2026, 10, 1)]);
}

#[test]
fn labels_use_abbreviated_month_and_four_digit_year() {
    let ticks = quarter_ticks(d(2026, 6, 2), d(2026, 7, 2));
    assert_eq!(ticks.len(), 1);
    assert_eq!(ticks[0].label, "Jul 2026");
}

#[test]
fn year_rollover_steps_from_october_to_january() {
    let ticks = quarter_ticks(d(2026, 10, 1), d(2027, 1, 1));
    let labels: Vec<_> = ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, ["Oct 2026", "Jan 2027"]);
}

#[test]
fn no_ticks_when_the_range_skips_every_quarter_start() {
    let ticks = quarter_ticks(d(2026, 1, 2), d(2026, 3, 30));
    assert!(ticks.is_empty());
}
