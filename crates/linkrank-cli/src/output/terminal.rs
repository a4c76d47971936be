//! Terminal output formatter

use super::RankReport;
use std::fmt::Write;

pub fn format_report(report: &RankReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "PageRank Results from Sampling (n = {})", report.samples);
    for (page, rank) in report.sampled.iter() {
        let _ = writeln!(out, "  {page}: {rank:.4}");
    }

    let _ = writeln!(out, "PageRank Results from Iteration");
    for (page, rank) in report.iterated.ranks.iter() {
        let _ = writeln!(out, "  {page}: {rank:.4}");
    }
    if !report.iterated.converged {
        let _ = writeln!(
            out,
            "  (stopped after {} iterations without converging)",
            report.iterated.iterations
        );
    }

    out
}
