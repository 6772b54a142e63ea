// File: crates/timeline-core/src/ticks.rs
// Summary: Calendar tick layout: quarter-month boundaries with "%b %Y" labels.

use chrono::{Datelike, NaiveDate};

/// One labeled tick on the time axis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DateTick {
    pub date: NaiveDate,
    pub label: String,
}

/// Ticks at every third month boundary (Jan/Apr/Jul/Oct the 1st) inside
/// [min, max], labeled with abbreviated month and 4-digit year.
pub fn quarter_ticks(min: NaiveDate, max: NaiveDate) -> Vec<DateTick> {
    let mut ticks = Vec::new();
    let mut date = next_quarter_start(min);
    while date <= max {
        ticks.push(DateTick {
            date,
            label: date.format("%b %Y").to_string(),
        });
        date = add_three_months(date);
    }
    ticks
}

/// First day of the first quarter month on or after `date`.
fn next_quarter_start(date: NaiveDate) -> NaiveDate {
    let mut year = date.year();
    let mut month = date.month();
    if date.day() > 1 || (month - 1) % 3 != 0 {
        month = ((month - 1) / 3 + 1) * 3 + 1;
        if month > 12 {
            month -= 12;
            year += 1;
        }
    }
    NaiveDate::from_ymd_opt(year, month, 1).expect("first of month is always valid")
}

fn add_three_months(date: NaiveDate) -> NaiveDate {
    let months = date.year() * 12 + date.month0() as i32 + 3;
    NaiveDate::from_ymd_opt(months.div_euclid(12), months.rem_euclid(12) as u32 + 1, 1)
        .expect("first of month is always valid")
}
