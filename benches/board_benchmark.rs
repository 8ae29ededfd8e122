//! Benchmarks for the board engine's hot operations.

#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use twenty48::board::SIZE;
use twenty48::{Board, Coord, Direction, Grid, Tile};

/// A mid-game position with slides and merges available in every direction.
fn mid_game_board() -> Board {
    let values: [[u32; SIZE]; SIZE] = [
        [2, 0, 2, 4],
        [16, 16, 0, 2],
        [4, 0, 8, 8],
        [2, 64, 0, 32],
    ];
    let mut grid = Grid::new();
    for (r, row) in values.iter().enumerate() {
        for (c, &v) in row.iter().enumerate() {
            if v != 0 {
                #[allow(clippy::cast_possible_truncation)]
                grid.set(Coord::new(r as u8, c as u8), Tile::numbered(v));
            }
        }
    }
    Board::from_position(grid, 42)
}

fn bench_apply_move(c: &mut Criterion) {
    c.bench_function("apply_move_left", |b| {
        b.iter(|| {
            let mut board = mid_game_board();
            let outcome = board.apply_move(black_box(Direction::Left));
            black_box(outcome)
        });
    });
}

fn bench_all_directions(c: &mut Criterion) {
    c.bench_function("apply_move_all_directions", |b| {
        b.iter(|| {
            let mut board = mid_game_board();
            for direction in Direction::all() {
                let outcome = board.apply_move(black_box(direction));
                black_box(outcome).ok();
            }
            black_box(board.score())
        });
    });
}

fn bench_has_moves_left(c: &mut Criterion) {
    let values: [[u32; SIZE]; SIZE] = [
        [2, 4, 2, 4],
        [4, 2, 4, 2],
        [2, 4, 2, 4],
        [4, 2, 4, 2],
    ];
    let mut grid = Grid::new();
    for (r, row) in values.iter().enumerate() {
        for (c2, &v) in row.iter().enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            grid.set(Coord::new(r as u8, c2 as u8), Tile::numbered(v));
        }
    }
    let board = Board::from_position(grid, 42);

    c.bench_function("has_moves_left_full_board", |b| {
        b.iter(|| black_box(board.has_moves_left()));
    });
}

fn bench_new_board(c: &mut Criterion) {
    c.bench_function("new_board", |b| {
        b.iter(|| black_box(Board::new(black_box(42))));
    });
}

criterion_group!(
    benches,
    bench_apply_move,
    bench_all_directions,
    bench_has_moves_left,
    bench_new_board
);
criterion_main!(benches);
