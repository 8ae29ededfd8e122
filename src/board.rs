//! Board layer: the 2048 core engine.
//!
//! Implements the game rules:
//! - Tiles (numbered powers of two, or empty) with a one-shot spawn marker
//! - The 4×4 grid and empty-cell tracking
//! - The four directional move/merge algorithms
//! - Random tile spawning from a seeded deterministic RNG
//! - Win/loss detection and the Playing/Won/Lost state machine

mod grid;
mod invariants;
mod line;
mod rng;
mod state;
mod tile;

pub use grid::{CELLS, Coord, Grid, SIZE};
pub use invariants::{assert_invariants, check_invariants};
pub use line::{LineResult, collapse};
pub use rng::Rng;
pub use state::{Board, Direction, MoveOutcome, Status, WINNING_TILE};
pub use tile::Tile;
