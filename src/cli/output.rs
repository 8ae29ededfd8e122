//! Output formatting utilities for CLI.

use serde::Serialize;
use twenty48::sim::{BatchStats, TILE_BUCKETS};

/// JSON-serializable batch result.
#[derive(Debug, Serialize)]
pub(super) struct JsonBatchResult {
    /// Base seed the batch ran from.
    pub(super) base_seed: u64,
    /// Episodes played.
    pub(super) episodes: u64,
    /// Episodes that reached 2048.
    pub(super) wins: u64,
    /// Win rate in [0, 1].
    pub(super) win_rate: f64,
    /// Mean final score.
    pub(super) mean_score: f64,
    /// Standard deviation of final scores.
    pub(super) score_std_dev: f64,
    /// Largest final score.
    pub(super) best_score: u32,
    /// Mean board-changing moves per episode.
    pub(super) mean_moves: f64,
    /// Count of episodes per largest-tile value.
    pub(super) max_tiles: Vec<JsonTileCount>,
}

/// One histogram entry: how many episodes topped out at `tile`.
#[derive(Debug, Serialize)]
pub(super) struct JsonTileCount {
    /// The tile value.
    pub(super) tile: u32,
    /// Episodes whose largest tile was this value.
    pub(super) count: u64,
}

impl JsonBatchResult {
    /// Create from batch stats.
    #[allow(clippy::cast_precision_loss)]
    pub(super) fn from_stats(stats: &BatchStats, base_seed: u64) -> Self {
        let win_rate = if stats.episodes == 0 {
            0.0
        } else {
            stats.wins as f64 / stats.episodes as f64
        };
        let mean_moves = if stats.episodes == 0 {
            0.0
        } else {
            stats.total_moves as f64 / stats.episodes as f64
        };
        Self {
            base_seed,
            episodes: stats.episodes,
            wins: stats.wins,
            win_rate,
            mean_score: stats.mean_score(),
            score_std_dev: stats.score_std_dev(),
            best_score: stats.best_score,
            mean_moves,
            max_tiles: histogram_entries(stats),
        }
    }
}

/// Non-empty histogram buckets as (tile value, count) pairs.
fn histogram_entries(stats: &BatchStats) -> Vec<JsonTileCount> {
    (0..TILE_BUCKETS)
        .filter(|&i| stats.max_tile_histogram[i] > 0)
        .map(|i| JsonTileCount {
            tile: 1u32 << i,
            count: stats.max_tile_histogram[i],
        })
        .collect()
}

/// Format batch stats as human-readable text.
#[allow(clippy::cast_precision_loss)]
pub(super) fn format_batch_text(stats: &BatchStats, base_seed: u64) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Simulation ({} episodes, base seed {})\n",
        stats.episodes, base_seed
    ));
    output.push_str(&format!(
        "  Wins (2048 reached): {} ({:.1}%)\n",
        stats.wins,
        if stats.episodes == 0 {
            0.0
        } else {
            100.0 * stats.wins as f64 / stats.episodes as f64
        }
    ));
    output.push_str(&format!(
        "  Score: mean {:.1}, std {:.1}, best {}\n",
        stats.mean_score(),
        stats.score_std_dev(),
        stats.best_score
    ));
    if stats.episodes > 0 {
        output.push_str(&format!(
            "  Moves per episode: {:.1}\n",
            stats.total_moves as f64 / stats.episodes as f64
        ));
    }

    output.push_str("  Largest tile reached:\n");
    for entry in histogram_entries(stats) {
        output.push_str(&format!(
            "    {:>6}: {} ({:.1}%)\n",
            entry.tile,
            entry.count,
            100.0 * entry.count as f64 / stats.episodes.max(1) as f64
        ));
    }

    output
}

/// Format batch stats as CSV (one row per histogram bucket plus a summary).
pub(super) fn format_batch_csv(stats: &BatchStats, base_seed: u64) -> String {
    let mut output = String::new();
    output.push_str("base_seed,episodes,wins,mean_score,score_std_dev,best_score\n");
    output.push_str(&format!(
        "{},{},{},{:.2},{:.2},{}\n",
        base_seed,
        stats.episodes,
        stats.wins,
        stats.mean_score(),
        stats.score_std_dev(),
        stats.best_score
    ));
    output.push_str("max_tile,count\n");
    for entry in histogram_entries(stats) {
        output.push_str(&format!("{},{}\n", entry.tile, entry.count));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use twenty48::sim::EpisodeResult;

    fn sample_stats() -> BatchStats {
        let mut stats = BatchStats::new();
        stats.add_result(&EpisodeResult {
            seed: 1,
            score: 1234,
            max_tile: 128,
            moves: 140,
            won: false,
        });
        stats.add_result(&EpisodeResult {
            seed: 2,
            score: 20000,
            max_tile: 2048,
            moves: 950,
            won: true,
        });
        stats
    }

    #[test]
    fn test_text_mentions_wins_and_tiles() {
        let text = format_batch_text(&sample_stats(), 42);
        assert!(text.contains("2 episodes"));
        assert!(text.contains("Wins (2048 reached): 1"));
        assert!(text.contains("128"));
        assert!(text.contains("2048"));
    }

    #[test]
    fn test_csv_has_header_and_rows() {
        let csv = format_batch_csv(&sample_stats(), 42);
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("base_seed,episodes,wins,mean_score,score_std_dev,best_score")
        );
        assert!(csv.contains("128,1"));
        assert!(csv.contains("2048,1"));
    }

    #[test]
    fn test_json_result_win_rate() {
        let json = JsonBatchResult::from_stats(&sample_stats(), 42);
        assert!((json.win_rate - 0.5).abs() < f64::EPSILON);
        assert_eq!(json.max_tiles.len(), 2);
    }
}
