//! JSON output formatter

use super::RankReport;

pub fn format_report(report: &RankReport) -> String {
    let output = serde_json::json!({
        "samples": report.samples,
        "sampling": report.sampled,
        "iteration": {
            "ranks": report.iterated.ranks,
            "iterations": report.iterated.iterations,
            "converged": report.iterated.converged,
        },
    });

    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string()) + "\n"
}
