//! Benchmarks for incremental insertion into a Sorted adapter vs re-sorting
//!
//! Run with: `cargo bench --bench sorted`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use smallvec::SmallVec;
use sorta_core::Sorted;

fn values(size: usize) -> Vec<u32> {
    // Knuth's multiplicative hash spreads the inserts across the range.
    (0..size as u32).map(|i| i.wrapping_mul(2_654_435_761)).collect()
}

fn bench_insert_one_by_one(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_one_by_one");

    for size in [16, 256, 4096] {
        let input = values(size);

        group.bench_with_input(BenchmarkId::new("Sorted<Vec>", size), &input, |b, input| {
            b.iter(|| {
                let mut sorted: Sorted<Vec<u32>> = Sorted::new();
                for &v in input {
                    sorted.insert(black_box(v)).unwrap();
                }
                black_box(sorted);
            });
        });

        group.bench_with_input(
            BenchmarkId::new("Sorted<SmallVec<16>>", size),
            &input,
            |b, input| {
                b.iter(|| {
                    let mut sorted: Sorted<SmallVec<[u32; 16]>> = Sorted::new();
                    for &v in input {
                        sorted.insert(black_box(v)).unwrap();
                    }
                    black_box(sorted);
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("Vec resort", size), &input, |b, input| {
            b.iter(|| {
                let mut vec = Vec::new();
                for &v in input {
                    vec.push(black_box(v));
                    vec.sort_unstable();
                }
                black_box(vec);
            });
        });
    }

    group.finish();
}

fn bench_bulk_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("bulk_merge");

    for size in [256, 4096, 65536] {
        let base = values(size);
        let batch: Vec<u32> = values(size / 16).into_iter().map(|v| v ^ 0x5555).collect();

        group.bench_with_input(BenchmarkId::new("insert_iter", size), &size, |b, _| {
            b.iter_batched(
                || Sorted::<Vec<u32>>::from_unsorted(base.clone()),
                |mut sorted| {
                    sorted.insert_iter(batch.iter().copied()).unwrap();
                    black_box(sorted);
                },
                criterion::BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("full sort", size), &size, |b, _| {
            b.iter_batched(
                || {
                    let mut vec = base.clone();
                    vec.sort_unstable();
                    vec
                },
                |mut vec| {
                    vec.extend(batch.iter().copied());
                    vec.sort_unstable();
                    black_box(vec);
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_insert_one_by_one, bench_bulk_merge);
criterion_main!(benches);
