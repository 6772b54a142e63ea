// File: crates/timeline-core/benches/render_bench.rs
// Summary: Benchmark the full PNG render pipeline at a few schedule sizes.

use anyhow::Result;
use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use timeline_core::{RenderOptions, TimelineChart, TimelineEntry};

fn build_chart(n: usize) -> TimelineChart {
    let origin = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    let entries = (0..n)
        .map(|i| {
            let start = origin + Duration::days((i * 11 % 700) as i64);
            let end = start + Duration::days((i % 21) as i64);
            TimelineEntry::new(format!("task {i}"), start, end)
        })
        .collect();
    TimelineChart::new("Schedule", "Date", entries)
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[13usize, 200usize] {
        group.bench_function(format!("entries_{n}"), |b| {
            let chart = build_chart(n);
            let mut opts = RenderOptions::default();
            opts.width = 800;
            opts.height = 500;
            opts.draw_labels = false;
            b.iter(|| -> Result<()> {
                let bytes = chart.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
