//! RangeIndex and AggregateIndex benchmarks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rowdex_bench::uniform_column;
use rowdex_core::{AggregateIndex, RangeIndex, RowId};

fn build_range_index(values: &[f64]) -> RangeIndex {
    let mut index = RangeIndex::new();
    for (i, value) in values.iter().enumerate() {
        index.insert(*value, RowId::new(i));
    }
    index
}

fn bench_range_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_insert");

    for size in [1_000usize, 10_000, 100_000] {
        let values = uniform_column(size, 7);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &values, |b, values| {
            b.iter(|| {
                let index = build_range_index(black_box(values));
                black_box(index.height());
            });
        });
    }

    group.finish();
}

fn bench_range_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_query");

    for size in [1_000usize, 10_000, 100_000] {
        let index = build_range_index(&uniform_column(size, 7));
        group.bench_with_input(BenchmarkId::from_parameter(size), &index, |b, index| {
            b.iter(|| {
                let matches = index.query_range(black_box(-1e5), black_box(1e5));
                black_box(matches.len());
            });
        });
    }

    group.finish();
}

fn bench_aggregate_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate_build");

    for size in [1_000usize, 10_000, 100_000] {
        let values = uniform_column(size, 11);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &values, |b, values| {
            b.iter(|| {
                let index = AggregateIndex::build(black_box(values));
                black_box(index.full_range_stats().unwrap());
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_range_insert,
    bench_range_query,
    bench_aggregate_build
);
criterion_main!(benches);
