//! Per-line slide/merge state machine.
//!
//! Each row (for left/right moves) or column (for up/down moves) is treated
//! as an independent 1-D sequence of 4 cells, read leading-edge-first: index
//! 0 is the cell at the boundary the tiles are migrating toward. Collapsing
//! the line toward index 0 is then direction-agnostic; the caller maps
//! indices back to grid coordinates.

use crate::board::Tile;
use crate::board::grid::SIZE;

/// Outcome of collapsing one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineResult {
    /// The collapsed line, leading edge at index 0.
    pub cells: [Tile; SIZE],
    /// Number of slides plus merges. Zero iff the line is unchanged.
    pub events: u32,
    /// Sum of merged tile values, to be added to the score.
    pub score_gain: u32,
    /// Largest value produced by a merge, 0 if no merge happened.
    pub max_merged: u32,
}

/// Collapse a line toward index 0, merging equal neighbors.
///
/// A write cursor tracks the already-compacted prefix. Each tile either
/// merges into the previous output cell (at most once per destination, so a
/// merge result never merges again in the same move) or is appended; a tile
/// appended at a smaller index than it was read from counts as a slide.
/// This reproduces the classic slide-then-merge semantics: a tile may slide
/// and immediately merge with the next tile in its direction of travel.
///
/// Tiles that move or merge are created fresh (carrying the spawn marker);
/// a tile that stays put keeps its cell, marker state included.
#[must_use]
pub fn collapse(line: [Tile; SIZE]) -> LineResult {
    let mut out = [Tile::empty(); SIZE];
    let mut merged = [false; SIZE];
    let mut write = 0usize;
    let mut events = 0u32;
    let mut score_gain = 0u32;
    let mut max_merged = 0u32;

    for (read, tile) in line.into_iter().enumerate() {
        if tile.is_empty() {
            continue;
        }

        if write > 0 && !merged[write - 1] && out[write - 1].value() == tile.value() {
            let combined = tile.value() * 2;
            out[write - 1] = Tile::numbered(combined);
            merged[write - 1] = true;
            score_gain += combined;
            max_merged = max_merged.max(combined);
            events += 1;
        } else {
            out[write] = if write == read { tile } else { Tile::numbered(tile.value()) };
            if write != read {
                events += 1;
            }
            write += 1;
        }
    }

    LineResult {
        cells: out,
        events,
        score_gain,
        max_merged,
    }
}
