//! Deterministic PageRank by fixed-point relaxation

use super::{validate_damping, validate_graph};
use crate::error::Result;
use crate::graph::{Distribution, LinkGraph};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{trace, warn};

/// Configuration for the iterative estimator.
#[derive(Debug, Clone, Copy)]
pub struct IterationConfig {
    /// Probability of following a link rather than teleporting.
    pub damping: f64,
    /// Maximum absolute per-page change under which iteration stops.
    pub tolerance: f64,
    /// Safety cap on relaxation rounds; the update is a contraction for
    /// damping < 1, so this only triggers on pathological inputs.
    pub max_iterations: usize,
}

impl Default for IterationConfig {
    fn default() -> Self {
        Self {
            damping: crate::DEFAULT_DAMPING,
            tolerance: 1e-3,
            max_iterations: 1000,
        }
    }
}

/// Result of the iterative estimator.
#[derive(Debug, Clone, Serialize)]
pub struct IterationOutcome {
    pub ranks: Distribution,
    /// Relaxation rounds performed.
    pub iterations: usize,
    /// False when the iteration cap was reached before every page settled
    /// within tolerance; `ranks` then holds the best effort so far.
    pub converged: bool,
}

/// Solve the PageRank fixed point by simultaneous relaxation.
///
/// Every page starts at `1/N`. Each round recomputes all ranks from the
/// previous round's values: a page receives the teleport share `(1-d)/N`,
/// a damped share of each inbound linker's rank split across that linker's
/// outbound links, and a damped share of the rank held by dangling pages,
/// redistributed uniformly so the total stays at 1.
///
/// Deterministic for identical inputs. Non-convergence past the cap is
/// reported through [`IterationOutcome::converged`], not an error.
pub fn iterate_pagerank(graph: &LinkGraph, config: &IterationConfig) -> Result<IterationOutcome> {
    validate_damping(config.damping)?;
    validate_graph(graph)?;

    let pages: Vec<&str> = graph.pages().collect();
    let n = pages.len();
    let n_f64 = n as f64;
    let index: BTreeMap<&str, usize> = pages.iter().enumerate().map(|(i, &p)| (p, i)).collect();

    // Graph invariant: every link target is a page of the graph.
    let out_links: Vec<Vec<usize>> = pages
        .iter()
        .map(|&p| {
            graph
                .links(p)
                .map(|links| links.iter().map(|t| index[t.as_str()]).collect())
                .unwrap_or_default()
        })
        .collect();

    let damping = config.damping;
    let teleport = (1.0 - damping) / n_f64;
    let mut ranks = vec![1.0 / n_f64; n];
    let mut new_ranks = vec![0.0; n];
    let mut iterations = 0;
    let mut converged = false;

    for round in 1..=config.max_iterations {
        let dangling_sum: f64 = out_links
            .iter()
            .enumerate()
            .filter(|(_, links)| links.is_empty())
            .map(|(i, _)| ranks[i])
            .sum();
        new_ranks.fill(teleport + damping * dangling_sum / n_f64);

        for u in 0..n {
            let links = &out_links[u];
            if !links.is_empty() {
                let share = damping * ranks[u] / links.len() as f64;
                for &v in links {
                    new_ranks[v] += share;
                }
            }
        }

        let max_delta = ranks
            .iter()
            .zip(new_ranks.iter())
            .map(|(old, new)| (old - new).abs())
            .fold(0.0f64, f64::max);
        std::mem::swap(&mut ranks, &mut new_ranks);
        iterations = round;
        trace!(round, max_delta, "relaxation step");

        if max_delta <= config.tolerance {
            converged = true;
            break;
        }
    }

    if !converged {
        warn!(
            iterations,
            tolerance = config.tolerance,
            "iteration cap reached before convergence, returning best effort"
        );
    }

    let probs = pages
        .iter()
        .zip(ranks.iter())
        .map(|(&page, &rank)| (page.to_string(), rank))
        .collect();
    Ok(IterationOutcome {
        ranks: Distribution::from_map(probs),
        iterations,
        converged,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LinkRankError;

    fn graph_of(edges: &[(&str, &[&str])]) -> LinkGraph {
        let mut g = LinkGraph::new();
        for (page, _) in edges {
            g.add_page(*page);
        }
        for (page, targets) in edges {
            for t in *targets {
                g.add_link(page, t);
            }
        }
        g
    }

    #[test]
    fn test_ranks_sum_to_one() {
        let g = graph_of(&[
            ("1.html", &["2.html"]),
            ("2.html", &["1.html", "3.html"]),
            ("3.html", &[]),
        ]);
        let outcome = iterate_pagerank(&g, &IterationConfig::default()).unwrap();
        assert!(outcome.converged);
        assert!((outcome.ranks.total() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_mutual_pair_splits_evenly() {
        let g = graph_of(&[("a.html", &["b.html"]), ("b.html", &["a.html"])]);
        let outcome = iterate_pagerank(&g, &IterationConfig::default()).unwrap();
        assert!(outcome.converged);
        assert!((outcome.ranks.get("a.html") - 0.5).abs() < 1e-3);
        assert!((outcome.ranks.get("b.html") - 0.5).abs() < 1e-3);
    }

    #[test]
    fn test_deterministic_across_calls() {
        let g = graph_of(&[
            ("1.html", &["2.html", "3.html"]),
            ("2.html", &["3.html"]),
            ("3.html", &["1.html"]),
        ]);
        let first = iterate_pagerank(&g, &IterationConfig::default()).unwrap();
        let second = iterate_pagerank(&g, &IterationConfig::default()).unwrap();
        for (page, rank) in first.ranks.iter() {
            assert_eq!(rank, second.ranks.get(page));
        }
        assert_eq!(first.iterations, second.iterations);
    }

    #[test]
    fn test_all_dangling_is_uniform() {
        // No page links anywhere, so the fixed point is uniform and the
        // very first round already satisfies it.
        let g = graph_of(&[("a", &[]), ("b", &[]), ("c", &[]), ("d", &[])]);
        let outcome = iterate_pagerank(&g, &IterationConfig::default()).unwrap();
        assert!(outcome.converged);
        assert_eq!(outcome.iterations, 1);
        for (_, rank) in outcome.ranks.iter() {
            assert!((rank - 0.25).abs() < 1e-12);
        }
    }

    #[test]
    fn test_single_page_full_rank() {
        let g = graph_of(&[("only.html", &[])]);
        let outcome = iterate_pagerank(&g, &IterationConfig::default()).unwrap();
        assert!(outcome.converged);
        assert!((outcome.ranks.get("only.html") - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_iteration_cap_reports_non_convergence() {
        let g = graph_of(&[("a.html", &["b.html"]), ("b.html", &[])]);
        let config = IterationConfig {
            max_iterations: 1,
            ..IterationConfig::default()
        };
        let outcome = iterate_pagerank(&g, &config).unwrap();
        assert!(!outcome.converged);
        assert_eq!(outcome.iterations, 1);
        // Best-effort ranks still come back as a distribution.
        assert!((outcome.ranks.total() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let g = graph_of(&[("a", &[])]);
        let bad_damping = IterationConfig {
            damping: 1.5,
            ..IterationConfig::default()
        };
        assert!(matches!(
            iterate_pagerank(&g, &bad_damping).unwrap_err(),
            LinkRankError::InvalidDamping(_)
        ));
        assert!(matches!(
            iterate_pagerank(&LinkGraph::new(), &IterationConfig::default()).unwrap_err(),
            LinkRankError::EmptyGraph
        ));
    }
}
