//! Board invariants - sanity checks that detect bugs.
//!
//! These should NEVER trigger in a correctly implemented engine. They are
//! not gameplay rules; they are bug detectors for the move/spawn machinery,
//! wired into the property tests and the debug builds of the simulator.

use crate::board::grid::CELLS;
use crate::board::{Board, Status};
use crate::error::InvariantViolation;

/// Check all board invariants.
///
/// Returns the violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(board: &Board) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    // Every non-empty cell holds a power of two >= 2
    for (coord, tile) in board.grid().iter() {
        let v = tile.value();
        if !tile.is_empty() && (v < 2 || !v.is_power_of_two()) {
            violations.push(InvariantViolation::new(format!(
                "cell ({}, {}) holds {v}, not a power of two >= 2",
                coord.row, coord.col
            )));
        }
    }

    // The tracked empty-cell list is exactly the set of empty coordinates
    let mut tracked: Vec<_> = board.empty_cells().to_vec();
    let mut actual = board.grid().empty_coords();
    tracked.sort_by_key(|c| (c.row, c.col));
    actual.sort_by_key(|c| (c.row, c.col));
    if tracked != actual {
        violations.push(InvariantViolation::new(format!(
            "empty-cell list ({} entries) disagrees with the grid ({} empty cells)",
            tracked.len(),
            actual.len()
        )));
    }

    // Cell accounting: empty + non-empty == 16
    let non_empty = CELLS - board.grid().empty_count();
    if board.empty_cells().len() + non_empty != CELLS {
        violations.push(InvariantViolation::new(format!(
            "{} tracked empty + {non_empty} occupied != {CELLS}",
            board.empty_cells().len()
        )));
    }

    // max_tile is an upper bound for everything on the grid
    if board.grid().max_value() > board.max_tile() {
        violations.push(InvariantViolation::new(format!(
            "grid holds {} but max_tile is {}",
            board.grid().max_value(),
            board.max_tile()
        )));
    }

    // best never trails the current score
    if board.best() < board.score() {
        violations.push(InvariantViolation::new(format!(
            "best {} is below current score {}",
            board.best(),
            board.score()
        )));
    }

    // A lost board is full with no adjacent equal pair
    if board.status() == Status::Lost
        && (!board.empty_cells().is_empty() || board.has_moves_left())
    {
        violations.push(InvariantViolation::new(
            "board is Lost but a move is still available",
        ));
    }

    violations
}

/// Assert all board invariants hold, panicking if any are violated.
///
/// Only active in debug builds. No-op in release builds.
///
/// # Panics
///
/// Panics with a detailed message if any invariant is violated.
#[cfg(debug_assertions)]
pub fn assert_invariants(board: &Board) {
    let violations = check_invariants(board);
    if !violations.is_empty() {
        let messages: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
        panic!("Board invariant violations:\n  - {}", messages.join("\n  - "));
    }
}

/// No-op in release builds.
#[cfg(not(debug_assertions))]
pub fn assert_invariants(_board: &Board) {}
