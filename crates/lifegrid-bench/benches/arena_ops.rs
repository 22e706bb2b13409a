//! Criterion micro-benchmarks for the double-buffered grid store.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use lifegrid_arena::GridStore;
use lifegrid_space::Square8;
use lifegrid_test_utils::store_from_cells;

fn bench_swap(c: &mut Criterion) {
    let mut store = GridStore::new(316, 316).unwrap();
    c.bench_function("swap_316x316", |b| {
        b.iter(|| {
            store.swap();
            black_box(store.swap_count())
        });
    });
}

fn bench_split_fill(c: &mut Criterion) {
    let mut store = GridStore::new(316, 316).unwrap();
    c.bench_function("split_fill_with_316x316", |b| {
        b.iter(|| {
            let (current, mut next) = store.split();
            next.fill_with(|row, col| !current.get(row, col));
        });
    });
}

fn bench_stage_current(c: &mut Criterion) {
    let cells: Vec<(i32, i32)> = (0..100).map(|i| (i, i)).collect();
    let mut store = store_from_cells(100, 100, &cells).unwrap();
    c.bench_function("stage_current_100x100", |b| {
        b.iter(|| store.stage_current());
    });
}

fn bench_neighbours(c: &mut Criterion) {
    let space = Square8::new(100, 100).unwrap();
    c.bench_function("square8_neighbours_100x100", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for (row, col) in space.cells() {
                total += space.neighbours(row, col).len();
            }
            black_box(total)
        });
    });
}

fn bench_live_count(c: &mut Criterion) {
    let cells: Vec<(i32, i32)> = (0..316).map(|i| (i, 315 - i)).collect();
    let store = store_from_cells(316, 316, &cells).unwrap();
    c.bench_function("live_count_316x316", |b| {
        b.iter(|| black_box(store.live_count()));
    });
}

criterion_group!(
    benches,
    bench_swap,
    bench_split_fill,
    bench_stage_current,
    bench_neighbours,
    bench_live_count
);
criterion_main!(benches);
