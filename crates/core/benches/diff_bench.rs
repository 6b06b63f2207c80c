//! Calendar diff benchmarks
//!
//! Benchmarks cover the borrow cascade, rendering, and the composed
//! surface to keep the diff pipeline allocation-light and O(1).
//!
//! Run with: `cargo bench --bench diff_bench -p calspan-core`

use calspan_core::{between, precise_diff, render};
use calspan_domain::DiffLabels;
use chrono::{NaiveDate, NaiveDateTime};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

type CivilFields = (i32, u32, u32, u32, u32, u32);
type SpanScenario = (&'static str, CivilFields, CivilFields);

const SCENARIOS: &[SpanScenario] = &[
    ("equal", (2024, 5, 17, 9, 41, 3), (2024, 5, 17, 9, 41, 3)),
    ("seconds_only", (2024, 5, 17, 9, 41, 3), (2024, 5, 17, 9, 41, 45)),
    ("minute_borrow", (2024, 5, 1, 10, 0, 45), (2024, 5, 1, 10, 2, 15)),
    ("day_borrow_short_month", (2000, 1, 31, 0, 0, 0), (2000, 3, 2, 0, 0, 0)),
    ("full_cascade", (2022, 12, 31, 23, 59, 59), (2024, 2, 2, 1, 1, 1)),
];

fn naive((y, mo, d, h, mi, s): CivilFields) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .expect("valid benchmark date")
        .and_hms_opt(h, mi, s)
        .expect("valid benchmark time")
}

// -----------------------------------------------------------------------------
// Borrow cascade benchmarks
// -----------------------------------------------------------------------------

fn bench_between(c: &mut Criterion) {
    let mut group = c.benchmark_group("diff_between");

    for (name, start, end) in SCENARIOS {
        let span = (naive(*start), naive(*end));
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::new("between", *name), &span, |b, (start, end)| {
            b.iter(|| black_box(between(black_box(start), black_box(end)).unwrap()));
        });
    }

    group.finish();
}

// -----------------------------------------------------------------------------
// Rendering benchmarks
// -----------------------------------------------------------------------------

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("diff_render");
    let labels = DiffLabels::default();

    for (name, start, end) in SCENARIOS {
        let diff = between(&naive(*start), &naive(*end)).expect("valid benchmark span");
        group.throughput(Throughput::Elements(diff.components().len() as u64));
        group.bench_with_input(BenchmarkId::new("render", *name), &diff, |b, diff| {
            b.iter(|| black_box(render(black_box(diff), black_box(&labels))));
        });
    }

    group.finish();
}

// -----------------------------------------------------------------------------
// Composed surface benchmarks
// -----------------------------------------------------------------------------

fn bench_precise_diff(c: &mut Criterion) {
    let mut group = c.benchmark_group("diff_composed");

    for (name, start, end) in SCENARIOS {
        let span = (naive(*start), naive(*end));
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(
            BenchmarkId::new("precise_diff", *name),
            &span,
            |b, (start, end)| {
                b.iter(|| black_box(precise_diff(black_box(start), black_box(end)).unwrap()));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_between, bench_render, bench_precise_diff);
criterion_main!(benches);
