//! Resampling and aggregation benchmarks
//!
//! Run with: cargo bench --bench aggregation

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use covplot::aggregate::{aggregate, TimeAxis, AXIS_POINTS};
use covplot::loader::GroupedRuns;
use covplot::RunRecord;

const SHORT_RUN: usize = 1_000; // ~17 hours at one sample per minute
const LONG_RUN: usize = 100_000;

/// Monotone coverage-like curve with `samples` points, one per minute.
fn synthetic_run(samples: usize, seed: u64) -> RunRecord {
    let mut value = 0.0;
    RunRecord::from_pairs((0..samples).map(|i| {
        value += ((i as u64 ^ seed) % 7) as f64;
        (i as f64, value)
    }))
    .unwrap()
}

fn bench_resample(c: &mut Criterion) {
    let mut group = c.benchmark_group("resample");

    for samples in [SHORT_RUN, LONG_RUN] {
        let run = synthetic_run(samples, 3);
        let axis = TimeAxis::spanning(run.max_elapsed(), AXIS_POINTS);
        group.bench_with_input(BenchmarkId::new("linear", samples), &run, |b, run| {
            b.iter(|| black_box(run).resample(black_box(&axis)));
        });
    }

    group.finish();
}

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");

    for runs_per_group in [2, 10] {
        let mut groups = GroupedRuns::new();
        for name in ["afl", "libfuzzer", "honggfuzz"] {
            for seed in 0..runs_per_group {
                groups.push(name, synthetic_run(SHORT_RUN, seed));
            }
        }
        group.bench_with_input(
            BenchmarkId::new("three_groups", runs_per_group),
            &groups,
            |b, groups| {
                b.iter(|| aggregate(black_box(groups)).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_resample, bench_aggregate);
criterion_main!(benches);
