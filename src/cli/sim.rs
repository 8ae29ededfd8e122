//! Sim command implementation - parallel headless batches.

use super::output::{JsonBatchResult, format_batch_csv, format_batch_text};
use super::{CliError, PolicyArg, SimFormat};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Instant;
use twenty48::sim::{SimConfig, run_batch};

/// Execute the sim command.
///
/// # Errors
///
/// Returns an error if output serialization fails.
pub(crate) fn execute(
    episodes: u64,
    seed: Option<u64>,
    policy: PolicyArg,
    threads: Option<usize>,
    max_moves: u64,
    format: SimFormat,
    progress: bool,
) -> Result<(), CliError> {
    // Set thread pool size if specified
    if let Some(num_threads) = threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .ok(); // Ignore error if already initialized
    }

    // Base seed
    #[allow(clippy::cast_possible_truncation)]
    let base_seed = seed.unwrap_or_else(|| {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42)
    });

    let config = SimConfig {
        episodes,
        base_seed,
        policy: policy.into(),
        max_moves,
    };

    // Progress bar; updated once after the fold/reduce completes so the
    // hot path stays atomic-free
    let pb = if progress {
        let pb = ProgressBar::new(episodes);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} episodes ({per_sec})",
                )
                .expect("valid template")
                .progress_chars("=>-"),
        );
        Some(pb)
    } else {
        None
    };

    let start = Instant::now();
    let stats = run_batch(&config);

    if let Some(pb) = pb {
        pb.set_position(stats.episodes);
        pb.finish_with_message("done");
    }

    let duration = start.elapsed();
    #[allow(clippy::cast_precision_loss)]
    let episodes_per_sec = if duration.as_secs_f64() > 0.0 {
        stats.episodes as f64 / duration.as_secs_f64()
    } else {
        0.0
    };

    match format {
        SimFormat::Text => {
            println!();
            print!("{}", format_batch_text(&stats, base_seed));
            println!();
            println!(
                "Duration: {:.2}s ({episodes_per_sec:.0} episodes/sec)",
                duration.as_secs_f64()
            );
        }
        SimFormat::Json => {
            let json_result = JsonBatchResult::from_stats(&stats, base_seed);
            let json = serde_json::to_string_pretty(&json_result)
                .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
            println!("{json}");
        }
        SimFormat::Csv => {
            print!("{}", format_batch_csv(&stats, base_seed));
        }
    }

    Ok(())
}
