//! Benchmarks for TeenyArray vs SmallVec vs Vec
//!
//! Run with: `cargo bench --bench teeny_array`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rocoll_teeny_array::TeenyArray;
use smallvec::SmallVec;

fn bench_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_inline");

    for size in [1u64, 3, 5] {
        group.bench_with_input(BenchmarkId::new("TeenyArray<5>", size), &size, |b, &size| {
            b.iter(|| {
                let mut array = TeenyArray::<u64, 5>::new();
                for i in 0..size {
                    let _ = array.try_push(black_box(i));
                }
                black_box(array);
            });
        });

        group.bench_with_input(BenchmarkId::new("SmallVec<5>", size), &size, |b, &size| {
            b.iter(|| {
                let mut vec = SmallVec::<[u64; 5]>::new();
                for i in 0..size {
                    vec.push(black_box(i));
                }
                black_box(vec);
            });
        });

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &size| {
            b.iter(|| {
                let mut vec = Vec::<u64>::new();
                for i in 0..size {
                    vec.push(black_box(i));
                }
                black_box(vec);
            });
        });
    }

    group.finish();
}

fn bench_clone(c: &mut Criterion) {
    let mut group = c.benchmark_group("clone");

    group.bench_function("TeenyArray_full_5", |b| {
        let array = TeenyArray::<u64, 5>::try_from_iter(0..5).unwrap();
        b.iter(|| black_box(array.clone()));
    });

    group.bench_function("SmallVec_full_5", |b| {
        let vec: SmallVec<[u64; 5]> = (0..5).collect();
        b.iter(|| black_box(vec.clone()));
    });

    group.bench_function("Vec_5", |b| {
        let vec: Vec<u64> = (0..5).collect();
        b.iter(|| black_box(vec.clone()));
    });

    group.finish();
}

fn bench_size_of(c: &mut Criterion) {
    c.bench_function("size_of_TeenyArray5", |b| {
        b.iter(|| black_box(core::mem::size_of::<TeenyArray<u64, 5>>()));
    });

    c.bench_function("size_of_SmallVec5", |b| {
        b.iter(|| black_box(core::mem::size_of::<SmallVec<[u64; 5]>>()));
    });
}

criterion_group!(benches, bench_fill, bench_clone, bench_size_of);
criterion_main!(benches);
