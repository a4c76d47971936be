//! Output formatters

pub mod json;
pub mod terminal;

use crate::app::OutputFormat;
use linkrank_core::{Distribution, IterationOutcome};

/// Results of one run, both estimators
pub struct RankReport<'a> {
    pub sampled: &'a Distribution,
    pub iterated: &'a IterationOutcome,
    pub samples: usize,
}

/// Format a rank report
pub fn format_report(report: &RankReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_report(report),
        OutputFormat::Cli => terminal::format_report(report),
    }
}
