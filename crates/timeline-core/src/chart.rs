// File: crates/timeline-core/src/chart.rs
// Summary: TimelineChart and the headless PNG rendering pipeline using Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;

use crate::entry::TimelineEntry;
use crate::layout::{day_span, layout_bars, Bar};
use crate::scale::{ceil_date, day_number, floor_date, DateScale, RowScale};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::ticks::{quarter_ticks, DateTick};
use crate::types::{Insets, BAR_HEIGHT_FRAC, HEIGHT, WIDTH};

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Disable all text output. Pixel-comparison tests rely on this to stay
    /// deterministic across font stacks.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
        }
    }
}

pub struct TimelineChart {
    pub title: String,
    pub x_label: String,
    pub entries: Vec<TimelineEntry>,
}

impl TimelineChart {
    pub fn new(
        title: impl Into<String>,
        x_label: impl Into<String>,
        entries: Vec<TimelineEntry>,
    ) -> Self {
        Self { title: title.into(), x_label: x_label.into(), entries }
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let data = self.render_to_png_bytes(opts)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, &data)?;
        Ok(())
    }

    /// Render the chart and return the encoded PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.render_surface(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart and return the raw RGBA8 pixels as
    /// (pixels, width, height, row stride in bytes).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = self.render_surface(opts)?;
        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = opts.width as usize * 4;
        let mut pixels = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("read RGBA pixels failed");
        }
        Ok((pixels, opts.width, opts.height, stride))
    }

    fn render_surface(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();

        // Background
        canvas.clear(opts.theme.background);

        // Paddings & plot rect
        let (plot_left, plot_top, plot_right, plot_bottom) =
            opts.insets.plot_rect(opts.width, opts.height);

        // Sorted bar geometry and scales
        let bars = layout_bars(&self.entries);
        let (min_day, max_day) = day_span(&bars);
        let dates = DateScale::new(min_day, max_day, plot_left, plot_right);
        let rows = RowScale::new(bars.len(), plot_top, plot_bottom);
        let ticks = quarter_ticks(floor_date(min_day), ceil_date(max_day));

        draw_grid(canvas, &dates, plot_top, plot_bottom, &ticks, &opts.theme);
        draw_axes(canvas, plot_left, plot_top, plot_right, plot_bottom, &opts.theme);
        draw_bars(canvas, &bars, &dates, &rows, &opts.theme);

        if opts.draw_labels {
            let shaper = TextShaper::new();
            draw_row_labels(canvas, &shaper, &bars, plot_left, &rows, &opts.theme);
            draw_tick_labels(canvas, &shaper, &ticks, &dates, plot_bottom, &opts.theme);
            draw_captions(canvas, &shaper, &self.title, &self.x_label, opts);
        }

        Ok(surface)
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(
    canvas: &skia::Canvas,
    dates: &DateScale,
    top: f32,
    bottom: f32,
    ticks: &[DateTick],
    theme: &Theme,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(1.0);
    paint.set_path_effect(skia::dash_path_effect::new(&[6.0, 6.0], 0.0));

    // one light dashed vertical per tick
    for tick in ticks {
        let x = dates.to_px(day_number(tick.date));
        canvas.draw_line((x, top), (x, bottom), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, l: f32, t: f32, r: f32, b: f32, theme: &Theme) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.5);

    // X and Y axis lines
    canvas.draw_line((l, b), (r, b), &axis_paint);
    canvas.draw_line((l, t), (l, b), &axis_paint);
}

fn draw_bars(
    canvas: &skia::Canvas,
    bars: &[Bar],
    dates: &DateScale,
    rows: &RowScale,
    theme: &Theme,
) {
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);

    let mut edge = skia::Paint::default();
    edge.set_anti_alias(true);
    edge.set_style(skia::paint::Style::Stroke);
    edge.set_stroke_width(1.0);
    edge.set_color(theme.bar_edge);

    let half = rows.pitch() * BAR_HEIGHT_FRAC * 0.5;
    for bar in bars {
        let x0 = dates.to_px(bar.left);
        let x1 = dates.to_px(bar.left + bar.width);
        let cy = rows.center_y(bar.row);
        // clamped spans keep at least one device pixel
        let rect = skia::Rect::from_ltrb(x0, cy - half, x1.max(x0 + 1.0), cy + half);
        fill.set_color(theme.bar_color(bar.row));
        canvas.draw_rect(rect, &fill);
        canvas.draw_rect(rect, &edge);
    }
}

fn draw_row_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    bars: &[Bar],
    plot_left: f32,
    rows: &RowScale,
    theme: &Theme,
) {
    for bar in bars {
        let y = rows.center_y(bar.row) + 4.0;
        shaper.draw_right(canvas, &bar.label, plot_left - 8.0, y, 13.0, theme.axis_label);
    }
}

fn draw_tick_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    ticks: &[DateTick],
    dates: &DateScale,
    plot_bottom: f32,
    theme: &Theme,
) {
    let mut tick_paint = skia::Paint::default();
    tick_paint.set_color(theme.axis_line);
    tick_paint.set_anti_alias(true);
    tick_paint.set_stroke_width(1.0);

    for tick in ticks {
        let x = dates.to_px(day_number(tick.date));
        canvas.draw_line((x, plot_bottom), (x, plot_bottom + 4.0), &tick_paint);
        shaper.draw_rotated_right(canvas, &tick.label, x, plot_bottom + 20.0, -30.0, 12.0, theme.tick_label);
    }
}

fn draw_captions(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    title: &str,
    x_label: &str,
    opts: &RenderOptions,
) {
    let theme = &opts.theme;
    let title_w = shaper.measure_width(title, 16.0);
    let cx_canvas = opts.width as f32 * 0.5;
    shaper.draw_left(canvas, title, cx_canvas - title_w * 0.5, opts.insets.top as f32 - 18.0, 16.0, theme.title);

    let (plot_left, _, plot_right, _) = opts.insets.plot_rect(opts.width, opts.height);
    let cx_plot = (plot_left + plot_right) * 0.5;
    let xl_w = shaper.measure_width(x_label, 14.0);
    shaper.draw_left(canvas, x_label, cx_plot - xl_w * 0.5, opts.height as f32 - 10.0, 14.0, theme.axis_label);
}
