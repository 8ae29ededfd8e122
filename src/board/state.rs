//! Board state: the grid, scoring, the move algorithms, and end detection.

use crate::board::grid::SIZE;
use crate::board::line::{self, LineResult};
use crate::board::rng::Rng;
use crate::board::{Coord, Grid, Tile};
use crate::error::{BoardResult, InvariantViolation};

/// The tile value that wins the game.
pub const WINNING_TILE: u32 = 2048;

/// Probability that a post-move spawn is a 2 (the remainder spawns a 4).
const SPAWN_TWO_CHANCE: f64 = 0.9;

/// The four move directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    /// Shift tiles toward row 0.
    Up = 0,
    /// Shift tiles toward the last row.
    Down = 1,
    /// Shift tiles toward column 0.
    Left = 2,
    /// Shift tiles toward the last column.
    Right = 3,
}

impl Direction {
    /// All four directions, in a fixed order.
    #[must_use]
    pub const fn all() -> [Direction; 4] {
        [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]
    }
}

/// The game state machine: `Playing` until a 2048 tile appears (`Won`) or
/// the board fills with no adjacent equal pair (`Lost`). Only a restart
/// leaves `Won` or `Lost`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Moves are accepted.
    Playing,
    /// A 2048 tile appeared.
    Won,
    /// The board is full and no merge remains.
    Lost,
}

/// Result of applying one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Number of slide/merge events. Zero means the board did not change.
    pub events: u32,
    /// Where the new tile spawned, if the move produced any event.
    pub spawned: Option<Coord>,
    /// Game status after the move.
    pub status: Status,
}

/// The 2048 board: grid, empty-cell tracking, scoring, and game status.
///
/// All mutation happens through [`Board::apply_move`] and
/// [`Board::restart`]; each call is logically atomic and leaves the
/// grid/empty-cell invariant consistent before returning. The board owns a
/// seeded deterministic RNG, so a given seed and move sequence always
/// reproduces the same game.
#[derive(Debug, Clone)]
pub struct Board {
    grid: Grid,
    /// Coordinates of empty cells; selection uses swap-remove, so order is
    /// arbitrary.
    empty_cells: Vec<Coord>,
    score: u32,
    best: u32,
    max_tile: u32,
    status: Status,
    rng: Rng,
}

impl Board {
    /// Create a board with two value-2 tiles at random empty cells.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let grid = Grid::new();
        let empty_cells = grid.empty_coords();
        let mut board = Self {
            grid,
            empty_cells,
            score: 0,
            best: 0,
            max_tile: 2,
            status: Status::Playing,
            rng: Rng::new(seed),
        };
        board.place_random(2);
        board.place_random(2);
        board
    }

    /// Create a board resuming from an arbitrary position, with score 0.
    ///
    /// The empty-cell list and max tile are derived from the grid. Used to
    /// study or test exact positions; the normal entry point is
    /// [`Board::new`].
    #[must_use]
    pub fn from_position(grid: Grid, seed: u64) -> Self {
        let empty_cells = grid.empty_coords();
        let max_tile = grid.max_value().max(2);
        Self {
            grid,
            empty_cells,
            score: 0,
            best: 0,
            max_tile,
            status: Status::Playing,
            rng: Rng::new(seed),
        }
    }

    /// Reset to a fresh game: 16 empty cells, two value-2 tiles, score 0.
    ///
    /// `best` and the RNG stream are preserved; only constructing a new
    /// `Board` replaces them.
    pub fn restart(&mut self) {
        self.grid = Grid::new();
        self.empty_cells = self.grid.empty_coords();
        self.score = 0;
        self.max_tile = 2;
        self.status = Status::Playing;
        self.place_random(2);
        self.place_random(2);
    }

    /// Apply a move in the given direction.
    ///
    /// While the game is over this is a no-op for game logic: the grid is
    /// untouched and the returned outcome has zero events. Otherwise the
    /// directional shift runs, `best` is refreshed, exactly one tile spawns
    /// iff the shift produced any event, and the win/loss conditions are
    /// checked.
    ///
    /// # Errors
    ///
    /// Propagates an [`InvariantViolation`] if a spawn is requested with no
    /// empty cell, which a correct shift can never cause.
    pub fn apply_move(&mut self, direction: Direction) -> BoardResult<MoveOutcome> {
        if self.status != Status::Playing {
            return Ok(MoveOutcome {
                events: 0,
                spawned: None,
                status: self.status,
            });
        }

        let events = self.shift(direction);
        self.best = self.best.max(self.score);

        let spawned = if events > 0 {
            Some(self.spawn_random_tile()?)
        } else {
            None
        };

        if self.max_tile >= WINNING_TILE {
            self.status = Status::Won;
        } else if self.empty_cells.is_empty() && !self.has_moves_left() {
            self.status = Status::Lost;
        }

        Ok(MoveOutcome {
            events,
            spawned,
            status: self.status,
        })
    }

    /// Spawn one tile at a uniformly random empty cell: value 2 with
    /// probability 0.9, else 4. Returns the chosen coordinate.
    ///
    /// # Errors
    ///
    /// Returns an [`InvariantViolation`] if there is no empty cell; calling
    /// this on a full board is a programming error.
    pub fn spawn_random_tile(&mut self) -> BoardResult<Coord> {
        if self.empty_cells.is_empty() {
            return Err(InvariantViolation::new(
                "spawn requested with zero empty cells",
            ));
        }
        let value = if self.rng.next_f64() < SPAWN_TWO_CHANCE {
            2
        } else {
            4
        };
        Ok(self.place_random(value))
    }

    /// Place a tile of the given value at a random empty cell.
    ///
    /// Callers guarantee `empty_cells` is non-empty.
    #[allow(clippy::cast_possible_truncation)]
    fn place_random(&mut self, value: u32) -> Coord {
        let idx = self.rng.next_u32(self.empty_cells.len() as u32) as usize;
        let coord = self.empty_cells.swap_remove(idx);
        self.grid.set(coord, Tile::numbered(value));
        // A spawned 4 can exceed every tile merged so far
        self.max_tile = self.max_tile.max(value);
        coord
    }

    /// Shift every line toward the given direction's edge, merging equal
    /// neighbors, and return the total slide/merge event count.
    fn shift(&mut self, direction: Direction) -> u32 {
        let mut events = 0;

        for lane in 0..SIZE {
            let coords = Self::lane_coords(direction, lane);
            let cells = coords.map(|c| self.grid.get(c).unwrap_or_else(Tile::empty));
            let LineResult {
                cells: collapsed,
                events: line_events,
                score_gain,
                max_merged,
            } = line::collapse(cells);

            if line_events > 0 {
                for (coord, tile) in coords.into_iter().zip(collapsed) {
                    self.grid.set(coord, tile);
                }
            }
            events += line_events;
            self.score += score_gain;
            self.max_tile = self.max_tile.max(max_merged);
        }

        if events > 0 {
            self.empty_cells = self.grid.empty_coords();
        }
        events
    }

    /// Coordinates of one lane (row or column), leading edge first: the
    /// first coordinate is the cell at the boundary the tiles migrate
    /// toward.
    #[allow(clippy::cast_possible_truncation)]
    fn lane_coords(direction: Direction, lane: usize) -> [Coord; SIZE] {
        let lane = lane as u8;
        let last = (SIZE - 1) as u8;
        std::array::from_fn(|i| {
            let i = i as u8;
            match direction {
                Direction::Up => Coord::new(i, lane),
                Direction::Down => Coord::new(last - i, lane),
                Direction::Left => Coord::new(lane, i),
                Direction::Right => Coord::new(lane, last - i),
            }
        })
    }

    /// Check whether any orthogonally adjacent pair of equal non-empty
    /// tiles exists (right neighbor or below neighbor of each cell). Only
    /// meaningful, and only consulted, when the grid is full.
    #[must_use]
    pub fn has_moves_left(&self) -> bool {
        for (coord, tile) in self.grid.iter() {
            if tile.is_empty() {
                continue;
            }
            let right = self.grid.get(Coord::new(coord.row, coord.col + 1));
            if right.is_some_and(|t| t.value() == tile.value()) {
                return true;
            }
            let below = self.grid.get(Coord::new(coord.row + 1, coord.col));
            if below.is_some_and(|t| t.value() == tile.value()) {
                return true;
            }
        }
        false
    }

    /// Read-only view of the grid.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable view of the grid, for the renderer to consume spawn flags.
    ///
    /// The rendering collaborator has no other legitimate write access.
    #[must_use]
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Current score: the sum of all merged tile values this game.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Best score observed across the life of this board, restarts included.
    #[must_use]
    pub const fn best(&self) -> u32 {
        self.best
    }

    /// Largest tile value ever present this game.
    #[must_use]
    pub const fn max_tile(&self) -> u32 {
        self.max_tile
    }

    /// Current game status.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Whether the game has ended.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status != Status::Playing
    }

    /// Whether the game ended in a win. Meaningful only when over.
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.status == Status::Won
    }

    /// Number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.empty_cells.len()
    }

    /// The tracked empty-cell coordinates, in arbitrary order.
    #[must_use]
    pub fn empty_cells(&self) -> &[Coord] {
        &self.empty_cells
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Score: {}  Best: {}", self.score, self.best)?;
        for row in 0..SIZE {
            for col in 0..SIZE {
                #[allow(clippy::cast_possible_truncation)]
                let tile = self
                    .grid
                    .get(Coord::new(row as u8, col as u8))
                    .unwrap_or_else(Tile::empty);
                if tile.is_empty() {
                    write!(f, "     .")?;
                } else {
                    write!(f, "{:6}", tile.value())?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
