//! LinkRank CLI
//!
//! Rank the pages of an HTML corpus with two independent PageRank
//! estimators and print both results.

use clap::Parser;
use linkrank_core::{
    crawl, iterate_pagerank, sample_pagerank, IterationConfig, Result, SamplingConfig,
};

mod app;
mod output;

use app::Cli;
use output::RankReport;

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(report) => print!("{report}"),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(err.exit_code());
        }
    }
}

fn run(cli: &Cli) -> Result<String> {
    let graph = crawl(&cli.corpus)?;

    let sampled = sample_pagerank(
        &graph,
        &SamplingConfig {
            damping: cli.damping,
            samples: cli.samples,
            seed: cli.seed,
        },
    )?;

    let iterated = iterate_pagerank(
        &graph,
        &IterationConfig {
            damping: cli.damping,
            tolerance: cli.tolerance,
            max_iterations: cli.max_iterations,
        },
    )?;

    let report = RankReport {
        sampled: &sampled,
        iterated: &iterated,
        samples: cli.samples,
    };
    Ok(output::format_report(&report, cli.format))
}
