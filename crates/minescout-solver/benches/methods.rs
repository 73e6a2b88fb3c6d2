//! Micro-benchmarks for individual deduction methods.
//!
//! This suite measures one `deduce` call per method on representative
//! mid-game board states.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench methods
//! ```

use std::hint;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use minescout_core::Board;
use minescout_solver::{
    MethodSolver,
    method::{Group, Method as _, Naive},
};

/// A mid-game 9x9 state where naive deductions are available.
fn naive_board() -> Board {
    "
        0 0 0 1 . . . . .
        0 0 0 1 . . . . .
        0 1 1 2 . . . . .
        0 1 . . . . . . .
        0 1 1 2 . . . . .
        0 0 0 1 1 1 . . .
        0 0 0 0 0 1 . . .
        0 0 0 0 0 1 1 1 .
        0 0 0 0 0 0 0 1 .
    "
    .parse()
    .unwrap()
}

/// A state where only subset comparisons make progress.
fn group_board() -> Board {
    "
        0 0 0 0 0 0 0 0 0
        1 1 1 1 1 1 1 1 1
        . . . . . . . . .
        . . . . . . . . .
        . . . . . . . . .
        . . . . . . . . .
        . . . . . . . . .
        . . . . . . . . .
        . . . . . . . . .
    "
    .parse()
    .unwrap()
}

fn bench_naive_deduce(c: &mut Criterion) {
    let boards = [("productive", naive_board()), ("empty", Board::new(9, 9))];
    let method = Naive::new();

    for (param, board) in boards {
        c.bench_with_input(BenchmarkId::new("naive_deduce", param), &board, |b, board| {
            b.iter(|| {
                let deduction = method.deduce(hint::black_box(board)).unwrap();
                hint::black_box(deduction)
            });
        });
    }
}

fn bench_group_deduce(c: &mut Criterion) {
    let boards = [("productive", group_board()), ("empty", Board::new(9, 9))];
    let method = Group::new();

    for (param, board) in boards {
        c.bench_with_input(BenchmarkId::new("group_deduce", param), &board, |b, board| {
            b.iter(|| {
                let deduction = method.deduce(hint::black_box(board)).unwrap();
                hint::black_box(deduction)
            });
        });
    }
}

fn bench_solver_pass(c: &mut Criterion) {
    let solver = MethodSolver::with_all_methods();
    let boards = [
        ("naive_hit", naive_board()),
        ("group_fallthrough", group_board()),
    ];

    for (param, board) in boards {
        c.bench_with_input(BenchmarkId::new("solver_pass", param), &board, |b, board| {
            b.iter(|| {
                let deduction = solver.deduce(hint::black_box(board)).unwrap();
                hint::black_box(deduction)
            });
        });
    }
}

criterion_group!(
    benches,
    bench_naive_deduce,
    bench_group_deduce,
    bench_solver_pass
);
criterion_main!(benches);
