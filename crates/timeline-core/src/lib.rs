// File: crates/timeline-core/src/lib.rs
// Summary: Core library entry point; exports the timeline model and rendering API.

pub mod chart;
pub mod entry;
pub mod layout;
pub mod scale;
pub mod ticks;
pub mod types;
pub mod theme;
pub mod text;

pub use chart::{RenderOptions, TimelineChart};
pub use entry::{EntryError, TimelineEntry};
pub use layout::{day_span, layout_bars, Bar, MIN_BAR_DAYS};
pub use scale::{day_number, DateScale, RowScale};
pub use theme::Theme;
pub use ticks::{quarter_ticks, DateTick};
pub use text::TextShaper;
