//! Twenty48 CLI - play 2048 in the terminal or run headless simulations.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

/// Twenty48 - a deterministic 2048 engine
#[derive(Parser, Debug)]
#[command(name = "twenty48")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play interactively in a TUI
    Play {
        /// Random seed (default: random)
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Run headless episodes and aggregate statistics
    Sim {
        /// Number of episodes to run (default: 1000)
        #[arg(short, long, default_value = "1000")]
        episodes: u64,

        /// Base seed (increments for each episode)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Move-selection policy
        #[arg(short, long, value_enum, default_value = "random")]
        policy: cli::PolicyArg,

        /// Parallel threads (default: CPU count)
        #[arg(short = 'j', long)]
        threads: Option<usize>,

        /// Safety bound on move attempts per episode (default: 100000)
        #[arg(short, long, default_value = "100000")]
        max_moves: u64,

        /// Output format: text, json, or csv
        #[arg(short, long, default_value = "text")]
        format: cli::SimFormat,

        /// Show progress bar
        #[arg(long)]
        progress: bool,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result = match args.command {
        Commands::Play { seed } => cli::play::execute(seed),

        Commands::Sim {
            episodes,
            seed,
            policy,
            threads,
            max_moves,
            format,
            progress,
        } => cli::sim::execute(episodes, seed, policy, threads, max_moves, format, progress),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
