use criterion::{Criterion, criterion_group, criterion_main};
use nice_axis::api::{Axis, RecordingSurface, ValueAxisConfig, tune_value_axis};
use nice_axis::core::{RangePadding, TickStrategy, generate_ticks, select_ticks};
use nice_axis::format::{NumberDisplayMode, NumberFormat, format_values};
use std::hint::black_box;

fn bench_select_ticks_bracketing(c: &mut Criterion) {
    let (lo, hi) = RangePadding::default()
        .pad(-2.5, 97.0)
        .expect("valid padding");

    c.bench_function("select_ticks_bracketing", |b| {
        b.iter(|| {
            let _ = select_ticks(
                black_box(lo),
                black_box(hi),
                black_box(5),
                TickStrategy::MagnitudeBracketing,
            )
            .expect("selection should succeed");
        })
    });
}

fn bench_select_ticks_refinement(c: &mut Criterion) {
    c.bench_function("select_ticks_refinement", |b| {
        b.iter(|| {
            let _ = select_ticks(
                black_box(0.012),
                black_box(0.087),
                black_box(4),
                TickStrategy::BidirectionalRefinement,
            )
            .expect("selection should succeed");
        })
    });
}

fn bench_generate_ticks_10k(c: &mut Criterion) {
    c.bench_function("generate_ticks_10k", |b| {
        b.iter(|| {
            let _ = generate_ticks(black_box(0.0), black_box(10_000.0), black_box(1.0))
                .expect("generation should succeed");
        })
    });
}

fn bench_format_compact_labels_1k(c: &mut Criterion) {
    let values: Vec<f64> = (0..1_000).map(|i| f64::from(i) * 12_345.0).collect();
    let format = NumberFormat::new(NumberDisplayMode::CompactInteger);

    c.bench_function("format_compact_labels_1k", |b| {
        b.iter(|| {
            let _ = format_values(black_box(&values), format);
        })
    });
}

fn bench_tune_value_axis(c: &mut Criterion) {
    let config = ValueAxisConfig::default();

    c.bench_function("tune_value_axis", |b| {
        b.iter(|| {
            let mut surface =
                RecordingSurface::new().with_data_range(Axis::Vertical, 1_200.0, 48_700.0);
            let _ = tune_value_axis(&mut surface, Axis::Vertical, black_box(&config))
                .expect("tuning should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_select_ticks_bracketing,
    bench_select_ticks_refinement,
    bench_generate_ticks_10k,
    bench_format_compact_labels_1k,
    bench_tune_value_axis
);
criterion_main!(benches);
