//! Benchmark for OrderedEnumerable vs `slice::sort_by`.
//!
//! Measures single-key and multi-key sorts, and the cost of a short
//! comparer chain against an equivalent hand-written comparison.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use enumerable::prelude::*;
use std::hint::black_box;

fn scrambled(size: u64) -> Vec<(u64, u64)> {
    (0..size)
        .map(|index| ((index * 7919) % 97, (index * 104_729) % size))
        .collect()
}

// =============================================================================
// order_by Benchmark
// =============================================================================

fn benchmark_order_by(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("order_by");

    for size in [100, 1000, 10000] {
        let elements = scrambled(size);
        let list = List::from(elements.clone());

        group.bench_with_input(BenchmarkId::new("OrderedEnumerable", size), &size, |bencher, _| {
            let sorted = list.order_by(|pair| pair.1);
            bencher.iter(|| black_box(sorted.to_vec()));
        });

        group.bench_with_input(BenchmarkId::new("sort_by_key", size), &size, |bencher, _| {
            bencher.iter(|| {
                let mut sorted = elements.clone();
                sorted.sort_by_key(|pair| pair.1);
                black_box(sorted)
            });
        });
    }

    group.finish();
}

// =============================================================================
// then_by Benchmark
// =============================================================================

fn benchmark_then_by(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("then_by");

    for size in [100, 1000, 10000] {
        let elements = scrambled(size);
        let list = List::from(elements.clone());

        group.bench_with_input(BenchmarkId::new("OrderedEnumerable", size), &size, |bencher, _| {
            let sorted = list
                .order_by(|pair| pair.0)
                .then_by_descending(|pair| pair.1);
            bencher.iter(|| black_box(sorted.to_vec()));
        });

        group.bench_with_input(BenchmarkId::new("sort_by", size), &size, |bencher, _| {
            bencher.iter(|| {
                let mut sorted = elements.clone();
                sorted.sort_by(|left, right| left.0.cmp(&right.0).then_with(|| right.1.cmp(&left.1)));
                black_box(sorted)
            });
        });
    }

    group.finish();
}

// =============================================================================
// first after order_by Benchmark
// =============================================================================

fn benchmark_ordered_first(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("ordered_first");

    for size in [100, 1000, 10000] {
        let list = List::from(scrambled(size));

        group.bench_with_input(BenchmarkId::new("order_by_first", size), &size, |bencher, _| {
            let sorted = list.order_by(|pair| pair.1);
            bencher.iter(|| black_box(sorted.first()));
        });

        group.bench_with_input(BenchmarkId::new("min_by", size), &size, |bencher, _| {
            bencher.iter(|| black_box(list.min_by(|left, right| left.1.cmp(&right.1))));
        });
    }

    group.finish();
}

// =============================================================================
// Criterion Group and Main
// =============================================================================

criterion_group!(benches, benchmark_order_by, benchmark_then_by, benchmark_ordered_first);

criterion_main!(benches);
