//! CLI argument definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "linkrank")]
#[command(
    author,
    version,
    about = "Rank the pages of an HTML corpus by sampled and iterated PageRank"
)]
pub struct Cli {
    /// Directory containing the HTML corpus
    pub corpus: PathBuf,

    /// Probability of following a link rather than teleporting, in (0, 1]
    #[arg(short, long, default_value_t = linkrank_core::DEFAULT_DAMPING)]
    pub damping: f64,

    /// Random-walk length for the sampling estimator
    #[arg(short = 'n', long, default_value_t = linkrank_core::DEFAULT_SAMPLES)]
    pub samples: usize,

    /// RNG seed for a reproducible sampling run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Convergence tolerance for the iterative estimator
    #[arg(long, default_value_t = 0.001)]
    pub tolerance: f64,

    /// Safety cap on relaxation rounds
    #[arg(long, default_value_t = 1000)]
    pub max_iterations: usize,

    /// Output format
    #[arg(long, value_enum, default_value = "cli")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Cli,
    Json,
}
