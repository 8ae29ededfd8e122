//! Tile type: the value held in one grid cell.

/// A single cell's content: empty, or a power-of-two tile value ≥ 2.
///
/// Every freshly created numbered tile carries a one-shot `just_spawned`
/// marker for the presentation layer; a tile that slides, merges, or spawns
/// is a fresh tile, so the marker covers all three. The marker is cleared by
/// [`Tile::consume_spawn_flag`], which the renderer calls once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    /// Tile value; 0 means empty.
    value: u32,
    /// One-shot marker, true until the next render read.
    just_spawned: bool,
}

impl Tile {
    /// Create an empty cell.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            value: 0,
            just_spawned: false,
        }
    }

    /// Create a numbered tile, marked as just spawned.
    #[must_use]
    pub const fn numbered(value: u32) -> Self {
        Self {
            value,
            just_spawned: true,
        }
    }

    /// Check whether this cell is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.value == 0
    }

    /// Get the tile value, or 0 for an empty cell.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.value
    }

    /// Return and clear the one-shot spawn marker.
    pub fn consume_spawn_flag(&mut self) -> bool {
        let was = self.just_spawned;
        self.just_spawned = false;
        was
    }

    /// Peek at the spawn marker without clearing it.
    #[must_use]
    pub const fn just_spawned(self) -> bool {
        self.just_spawned
    }
}

impl Default for Tile {
    fn default() -> Self {
        Self::empty()
    }
}
