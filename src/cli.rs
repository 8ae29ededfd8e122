//! CLI command implementations for twenty48.

pub(crate) mod output;
pub(crate) mod play;
pub(crate) mod sim;

use clap::ValueEnum;
use std::error::Error;
use std::fmt;

/// Output format for the `sim` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum SimFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
    /// CSV format.
    Csv,
}

/// Move-selection policy, as exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum PolicyArg {
    /// Uniformly random direction each step.
    Random,
    /// Cycle Left, Down, Right, Up.
    Cycle,
    /// Largest immediate score gain.
    Greedy,
}

impl From<PolicyArg> for twenty48::sim::Policy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Random => Self::Random,
            PolicyArg::Cycle => Self::Cycle,
            PolicyArg::Greedy => Self::Greedy,
        }
    }
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<twenty48::InvariantViolation> for CliError {
    fn from(e: twenty48::InvariantViolation) -> Self {
        Self::new(e.to_string())
    }
}
