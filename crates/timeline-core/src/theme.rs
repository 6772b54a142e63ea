// File: crates/timeline-core/src/theme.rs
// Summary: Light/Dark theming for chart colors plus the cyclic bar palette.

use skia_safe as skia;

/// Number of distinct bar colors before the palette repeats.
pub const PALETTE_LEN: usize = 20;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick_label: skia::Color,
    pub title: skia::Color,
    pub bar_edge: skia::Color,
    pub palette: [skia::Color; PALETTE_LEN],
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(128, 110, 110, 118), // 50% alpha
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick_label: skia::Color::from_argb(255, 40, 40, 50),
            title: skia::Color::from_argb(255, 20, 20, 30),
            bar_edge: skia::Color::from_argb(255, 0, 0, 0),
            palette: bar_palette(),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(128, 140, 140, 150),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick_label: skia::Color::from_argb(255, 210, 210, 220),
            title: skia::Color::from_argb(255, 235, 235, 245),
            bar_edge: skia::Color::from_argb(255, 0, 0, 0),
            palette: bar_palette(),
        }
    }

    /// Bar fill for `row`, cycling through the palette. Rows past the palette
    /// length repeat colors.
    #[inline]
    pub fn bar_color(&self, row: usize) -> skia::Color {
        self.palette[row % PALETTE_LEN]
    }
}

/// The 20-color categorical palette shared by both themes.
fn bar_palette() -> [skia::Color; PALETTE_LEN] {
    [
        skia::Color::from_argb(255, 0x1f, 0x77, 0xb4),
        skia::Color::from_argb(255, 0xae, 0xc7, 0xe8),
        skia::Color::from_argb(255, 0xff, 0x7f, 0x0e),
        skia::Color::from_argb(255, 0xff, 0xbb, 0x78),
        skia::Color::from_argb(255, 0x2c, 0xa0, 0x2c),
        skia::Color::from_argb(255, 0x98, 0xdf, 0x8a),
        skia::Color::from_argb(255, 0xd6, 0x27, 0x28),
        skia::Color::from_argb(255, 0xff, 0x98, 0x96),
        skia::Color::from_argb(255, 0x94, 0x67, 0xbd),
        skia::Color::from_argb(255, 0xc5, 0xb0, 0xd5),
        skia::Color::from_argb(255, 0x8c, 0x56, 0x4b),
        skia::Color::from_argb(255, 0xc4, 0x9c, 0x94),
        skia::Color::from_argb(255, 0xe3, 0x77, 0xc2),
        skia::Color::from_argb(255, 0xf7, 0xb6, 0xd2),
        skia::Color::from_argb(255, 0x7f, 0x7f, 0x7f),
        skia::Color::from_argb(255, 0xc7, 0xc7, 0xc7),
        skia::Color::from_argb(255, 0xbc, 0xbd, 0x22),
        skia::Color::from_argb(255, 0xdb, 0xdb, 0x8d),
        skia::Color::from_argb(255, 0x17, 0xbe, 0xcf),
        skia::Color::from_argb(255, 0x9e, 0xda, 0xe5),
    ]
}
