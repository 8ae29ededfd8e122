// Allow unwrap and unreadable literals in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
//! Twenty48: a deterministic 2048 engine with a terminal front-end.
//!
//! This crate provides the classic 2048 sliding-tile puzzle as:
//! - A seeded, bit-exact deterministic board engine
//! - A headless batch simulator for policy evaluation
//! - An interactive terminal UI (via the `twenty48` binary)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   CLI (play TUI / sim batches)      │
//! ├─────────────────────────────────────┤
//! │   Simulation (policies, rayon)      │
//! ├─────────────────────────────────────┤
//! │   Board engine (grid, moves, rng)   │
//! └─────────────────────────────────────┘
//! ```

pub mod board;
pub mod error;
pub mod sim;

pub use error::{BoardResult, InvariantViolation};

// Re-export key board types at crate root for convenience
pub use board::{Board, Coord, Direction, Grid, MoveOutcome, Status, Tile, WINNING_TILE};
