// File: crates/timeline-cli/src/main.rs
// Summary: Renders the fixed PhD schedule as a Gantt-style chart to timeline.png.

mod schedule;

use anyhow::Result;
use chrono::Local;
use timeline_core::{RenderOptions, TimelineChart};

fn main() -> Result<()> {
    // Today anchors the start of the in-progress internship entry; every
    // other entry is a fixed calendar range.
    let today = Local::now().date_naive();
    let events = schedule::build_events(today);
    println!("Laying out {} schedule entries", events.len());

    let chart = TimelineChart::new("PhD Timeline Overview", "Date", events);
    let out = std::path::Path::new("timeline.png");
    chart.render_to_png(&RenderOptions::default(), out)?;
    println!("Wrote {}", out.display());
    Ok(())
}
