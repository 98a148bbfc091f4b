//! Aggregation Performance Benchmarks
//!
//! Compares direct evaluation against the state-machine fold over batches
//! of sub-statuses, plus the cost of parsing raw event names.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use procstate_core::SubStatus;
use procstate_master::{evaluate, fold, fold_events, INITIAL_STATE};

/// Deterministic mix of outstanding and finished units, no failures
fn generate_statuses(count: usize) -> Vec<SubStatus> {
    (0..count)
        .map(|i| match i % 3 {
            0 => SubStatus::Done,
            1 => SubStatus::Running,
            _ => SubStatus::New,
        })
        .collect()
}

fn bench_direct_evaluation(c: &mut Criterion) {
    for size in [10usize, 100, 1000] {
        let statuses = generate_statuses(size);
        c.bench_with_input(BenchmarkId::new("direct_evaluation", size), &statuses, |b, s| {
            b.iter(|| black_box(evaluate(black_box(s))))
        });
    }
}

fn bench_fold(c: &mut Criterion) {
    for size in [10usize, 100, 1000] {
        let statuses = generate_statuses(size);
        c.bench_with_input(BenchmarkId::new("fold", size), &statuses, |b, s| {
            b.iter(|| black_box(fold(INITIAL_STATE, black_box(s).iter().copied())))
        });
    }
}

fn bench_fold_named(c: &mut Criterion) {
    let names: Vec<&str> = generate_statuses(1000).iter().map(SubStatus::as_str).collect();
    c.bench_function("fold_events_1000", |b| {
        b.iter(|| black_box(fold_events(INITIAL_STATE, black_box(&names)).is_ok()))
    });
}

criterion_group!(benches, bench_direct_evaluation, bench_fold, bench_fold_named);
criterion_main!(benches);
