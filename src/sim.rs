//! Headless simulation: deterministic episodes and parallel batches.
//!
//! An episode is one full game played by a policy from a seed. Batches run
//! many episodes in parallel with a lock-free fold/reduce over per-thread
//! stats, and are the workload the benchmarks measure.

use crate::board::{Board, Direction, Rng, assert_invariants};
use crate::error::BoardResult;
use rayon::prelude::*;

/// Number of tile-exponent buckets in the histogram: bucket `i` counts
/// episodes whose largest tile was `2^i`, clamped into `0..TILE_BUCKETS`.
pub const TILE_BUCKETS: usize = 18;

/// Move-selection policy for headless play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Uniformly random direction each step.
    Random,
    /// Cycle Left, Down, Right, Up.
    Cycle,
    /// The direction with the largest immediate score gain; random
    /// tie-break among directions that change the board.
    Greedy,
}

impl Policy {
    const CYCLE_ORDER: [Direction; 4] = [
        Direction::Left,
        Direction::Down,
        Direction::Right,
        Direction::Up,
    ];

    /// Choose the next direction for the given board.
    fn choose(self, board: &Board, step: u64, rng: &mut Rng) -> Direction {
        match self {
            Policy::Random => Direction::all()[rng.next_u32(4) as usize],
            Policy::Cycle => {
                #[allow(clippy::cast_possible_truncation)]
                let idx = (step % 4) as usize;
                Self::CYCLE_ORDER[idx]
            }
            Policy::Greedy => Self::greedy(board, rng),
        }
    }

    /// Probe all four directions on a clone and keep the best scorer.
    fn greedy(board: &Board, rng: &mut Rng) -> Direction {
        let mut best: Option<(u32, Direction)> = None;
        for direction in Direction::all() {
            let mut probe = board.clone();
            let Ok(outcome) = probe.apply_move(direction) else {
                continue;
            };
            if outcome.events == 0 {
                continue;
            }
            let gain = probe.score() - board.score();
            // Random tie-break keeps greedy play from deadlocking in loops
            let better = match best {
                None => true,
                Some((best_gain, _)) => gain > best_gain || (gain == best_gain && rng.next_u32(2) == 0),
            };
            if better {
                best = Some((gain, direction));
            }
        }
        best.map_or(Direction::Up, |(_, direction)| direction)
    }
}

/// Result of one finished episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpisodeResult {
    /// Seed the episode was played from.
    pub seed: u64,
    /// Final score.
    pub score: u32,
    /// Largest tile reached.
    pub max_tile: u32,
    /// Moves that changed the board.
    pub moves: u64,
    /// Whether a 2048 tile was reached.
    pub won: bool,
}

/// Configuration for a simulation batch.
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    /// Number of episodes to run.
    pub episodes: u64,
    /// Base seed; episode `i` plays from `base_seed + i`.
    pub base_seed: u64,
    /// Move-selection policy.
    pub policy: Policy,
    /// Safety bound on move attempts per episode.
    pub max_moves: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            episodes: 100,
            base_seed: 42,
            policy: Policy::Random,
            max_moves: 100_000,
        }
    }
}

/// Aggregated statistics over a batch of episodes.
#[derive(Debug, Clone, Copy)]
pub struct BatchStats {
    /// Episodes played.
    pub episodes: u64,
    /// Episodes that reached a 2048 tile.
    pub wins: u64,
    /// Sum of final scores.
    pub total_score: u64,
    /// Sum of squared final scores, for the standard deviation.
    pub score_sq_sum: f64,
    /// Largest final score seen.
    pub best_score: u32,
    /// Total board-changing moves across episodes.
    pub total_moves: u64,
    /// Histogram of the per-episode largest tile, indexed by exponent
    /// (`max_tile == 2^i`).
    pub max_tile_histogram: [u64; TILE_BUCKETS],
}

impl Default for BatchStats {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchStats {
    /// Create empty stats.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            episodes: 0,
            wins: 0,
            total_score: 0,
            score_sq_sum: 0.0,
            best_score: 0,
            total_moves: 0,
            max_tile_histogram: [0; TILE_BUCKETS],
        }
    }

    /// Fold one episode result into the stats.
    pub fn add_result(&mut self, result: &EpisodeResult) {
        self.episodes += 1;
        if result.won {
            self.wins += 1;
        }
        self.total_score += u64::from(result.score);
        self.score_sq_sum += f64::from(result.score) * f64::from(result.score);
        self.best_score = self.best_score.max(result.score);
        self.total_moves += result.moves;

        let bucket = (result.max_tile.max(1).ilog2() as usize).min(TILE_BUCKETS - 1);
        self.max_tile_histogram[bucket] += 1;
    }

    /// Merge another thread's stats into this one.
    pub fn merge(&mut self, other: &BatchStats) {
        self.episodes += other.episodes;
        self.wins += other.wins;
        self.total_score += other.total_score;
        self.score_sq_sum += other.score_sq_sum;
        self.best_score = self.best_score.max(other.best_score);
        self.total_moves += other.total_moves;
        for (mine, theirs) in self
            .max_tile_histogram
            .iter_mut()
            .zip(other.max_tile_histogram)
        {
            *mine += theirs;
        }
    }

    /// Mean final score, 0 if no episode ran.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn mean_score(&self) -> f64 {
        if self.episodes == 0 {
            return 0.0;
        }
        self.total_score as f64 / self.episodes as f64
    }

    /// Standard deviation of final scores.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn score_std_dev(&self) -> f64 {
        if self.episodes == 0 {
            return 0.0;
        }
        let mean = self.mean_score();
        let variance = (self.score_sq_sum / self.episodes as f64) - mean * mean;
        variance.max(0.0).sqrt()
    }
}

/// Play one episode to completion (or the move bound).
///
/// The board seed and the policy seed are both derived from `seed`, so an
/// episode is fully reproducible.
///
/// # Errors
///
/// Propagates an [`crate::InvariantViolation`] from the board, which a
/// correct engine never produces.
pub fn run_episode(seed: u64, policy: Policy, max_moves: u64) -> BoardResult<EpisodeResult> {
    let mut board = Board::new(seed);
    // Decorrelate policy choices from the board's spawn stream
    let mut policy_rng = Rng::new(seed ^ 0x9E37_79B9_7F4A_7C15);

    let mut moves = 0u64;
    let mut attempts = 0u64;

    while !board.is_game_over() && attempts < max_moves {
        let direction = policy.choose(&board, attempts, &mut policy_rng);
        let outcome = board.apply_move(direction)?;
        if outcome.events > 0 {
            moves += 1;
        }
        attempts += 1;
        assert_invariants(&board);
    }

    Ok(EpisodeResult {
        seed,
        score: board.score(),
        max_tile: board.max_tile(),
        moves,
        won: board.is_win(),
    })
}

/// Run a batch of episodes in parallel and aggregate their stats.
///
/// Episode `i` plays from `base_seed + i`; results are folded per thread
/// and merged once at the end, so there is no locking in the hot path.
#[must_use]
pub fn run_batch(config: &SimConfig) -> BatchStats {
    (0..config.episodes)
        .into_par_iter()
        .fold(BatchStats::new, |mut local, i| {
            let seed = config.base_seed.wrapping_add(i);
            if let Ok(result) = run_episode(seed, config.policy, config.max_moves) {
                local.add_result(&result);
            }
            local
        })
        .reduce(BatchStats::new, |mut a, b| {
            a.merge(&b);
            a
        })
}
