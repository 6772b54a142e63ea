// File: crates/timeline-core/benches/layout_bench.rs
// Summary: Benchmark bar layout over synthetic schedules.

use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use timeline_core::{layout_bars, TimelineEntry};

fn synthetic_entries(n: usize) -> Vec<TimelineEntry> {
    let origin = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    (0..n)
        .map(|i| {
            let start = origin + Duration::days((i * 7 % 900) as i64);
            let end = start + Duration::days((i % 30) as i64);
            TimelineEntry::new(format!("task {i}"), start, end)
        })
        .collect()
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_bars");
    for &n in &[100usize, 1_000usize] {
        group.bench_function(format!("entries_{n}"), |b| {
            let entries = synthetic_entries(n);
            b.iter(|| black_box(layout_bars(&entries)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
