//! Performance measurement for row extraction, hashing and validation

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};
use numbercross::grid::Grid;
use numbercross::puzzle::Clue;
use numbercross::solver::validate;
use std::collections::HashSet;
use std::hint::black_box;

fn eleven_wide_row() -> Grid {
    let mut grid = Grid::new(11, &[]);
    for (col, digit) in [1, 6, 9, 2, 5, 6, 3, 6, 4, 8, 1].into_iter().enumerate() {
        grid.set_digit(0, col, digit);
    }
    grid.set_tile(0, 3, true);
    grid.set_tile(0, 7, true);
    grid
}

fn bench_row_numbers(c: &mut Criterion) {
    let grid = eleven_wide_row();
    c.bench_function("row_numbers", |b| {
        b.iter(|| black_box(&grid).row_numbers(0));
    });
}

fn bench_row_signature(c: &mut Criterion) {
    let grid = eleven_wide_row();
    c.bench_function("row_signature", |b| {
        b.iter(|| black_box(&grid).row_signature(0));
    });
}

fn bench_validate_row(c: &mut Criterion) {
    let grid = eleven_wide_row();
    let clues = [Clue::DivisibleByEveryDigit; 11];
    let used: HashSet<i64> = (100..200).collect();
    c.bench_function("validate_row", |b| {
        b.iter(|| validate::validate_row(black_box(&grid), &clues, &used, 0));
    });
}

criterion_group!(
    benches,
    bench_row_numbers,
    bench_row_signature,
    bench_validate_row
);
criterion_main!(benches);
