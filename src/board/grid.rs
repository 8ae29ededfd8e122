//! Grid: the owned 4×4 array of tiles and its coordinates.

use crate::board::Tile;

/// Side length of the grid. The algorithms generalize to any N, but only
/// 4×4 is built.
pub const SIZE: usize = 4;

/// Total number of cells.
pub const CELLS: usize = SIZE * SIZE;

/// A (row, col) coordinate on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    /// Row index, 0 at the top.
    pub row: u8,
    /// Column index, 0 at the left.
    pub col: u8,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

/// The 4×4 grid of tiles, stored row-major, each cell independently owned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    /// Tiles in row-major order.
    tiles: [Tile; CELLS],
}

impl Grid {
    /// Create a grid of 16 empty cells.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tiles: [Tile::empty(); CELLS],
        }
    }

    /// Check if a coordinate is within bounds.
    #[must_use]
    pub const fn in_bounds(coord: Coord) -> bool {
        (coord.row as usize) < SIZE && (coord.col as usize) < SIZE
    }

    /// Convert a coordinate to an index into the tiles array.
    const fn index(coord: Coord) -> usize {
        coord.row as usize * SIZE + coord.col as usize
    }

    /// Get the tile at the given coordinate.
    ///
    /// Returns `None` if the coordinate is out of bounds.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<Tile> {
        if Self::in_bounds(coord) {
            Some(self.tiles[Self::index(coord)])
        } else {
            None
        }
    }

    /// Get a mutable reference to the tile at the given coordinate.
    ///
    /// The renderer uses this to consume spawn flags on read.
    #[must_use]
    pub fn get_mut(&mut self, coord: Coord) -> Option<&mut Tile> {
        if Self::in_bounds(coord) {
            Some(&mut self.tiles[Self::index(coord)])
        } else {
            None
        }
    }

    /// Set the tile at the given coordinate.
    ///
    /// Returns `false` if the coordinate is out of bounds.
    pub fn set(&mut self, coord: Coord, tile: Tile) -> bool {
        if Self::in_bounds(coord) {
            self.tiles[Self::index(coord)] = tile;
            true
        } else {
            false
        }
    }

    /// Get a reference to the raw tiles slice in row-major order.
    #[must_use]
    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Iterate over all coordinates and tiles in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Tile)> + '_ {
        self.tiles.iter().enumerate().map(|(idx, tile)| {
            #[allow(clippy::cast_possible_truncation)]
            let coord = Coord::new((idx / SIZE) as u8, (idx % SIZE) as u8);
            (coord, *tile)
        })
    }

    /// Collect the coordinates of all empty cells, in row-major order.
    #[must_use]
    pub fn empty_coords(&self) -> Vec<Coord> {
        self.iter()
            .filter(|(_, tile)| tile.is_empty())
            .map(|(coord, _)| coord)
            .collect()
    }

    /// Count the empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_empty()).count()
    }

    /// The largest tile value present, or 0 on an empty grid.
    #[must_use]
    pub fn max_value(&self) -> u32 {
        self.tiles.iter().map(|t| t.value()).max().unwrap_or(0)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
