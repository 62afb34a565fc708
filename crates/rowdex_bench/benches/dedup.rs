//! DedupIndex benchmarks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rowdex_bench::duplicated_rows;
use rowdex_core::{DedupIndex, RowId};

fn bench_record_and_distinct(c: &mut Criterion) {
    let mut group = c.benchmark_group("dedup");

    for size in [1_000usize, 10_000, 100_000] {
        // Around ten copies of each distinct row.
        let rows = duplicated_rows(size, size / 10, 13);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &rows, |b, rows| {
            b.iter(|| {
                let mut index = DedupIndex::for_rows(rows.len()).unwrap();
                for (i, cells) in rows.iter().enumerate() {
                    index
                        .record_row(&DedupIndex::row_key(cells), RowId::new(i))
                        .unwrap();
                }
                black_box(index.distinct_rows().len());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_record_and_distinct);
criterion_main!(benches);
