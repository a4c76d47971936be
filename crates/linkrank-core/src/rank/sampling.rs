//! Monte-Carlo PageRank estimation by simulating a random surfer

use super::{transition_model, validate_damping, validate_graph};
use crate::error::{LinkRankError, Result};
use crate::graph::{Distribution, LinkGraph};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use std::collections::BTreeMap;
use tracing::debug;

/// Configuration for the sampling estimator.
#[derive(Debug, Clone, Copy)]
pub struct SamplingConfig {
    /// Probability of following a link rather than teleporting.
    pub damping: f64,
    /// Length of the random walk. Estimates are only meaningful for large
    /// walks (thousands of samples).
    pub samples: usize,
    /// Fixed RNG seed for reproducible runs; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            damping: crate::DEFAULT_DAMPING,
            samples: crate::DEFAULT_SAMPLES,
            seed: None,
        }
    }
}

/// Estimate PageRank as visitation frequency over one long random walk.
///
/// The walk starts on a page chosen uniformly at random, then repeatedly
/// draws the next page from the transition model of the current one. Each
/// page's rank is its visit count divided by the walk length, so the
/// result partitions the samples and sums to exactly 1.
///
/// Without a fixed seed the result varies between runs; that spread is
/// statistical noise, not an error.
pub fn sample_pagerank(graph: &LinkGraph, config: &SamplingConfig) -> Result<Distribution> {
    validate_damping(config.damping)?;
    validate_graph(graph)?;
    if config.samples == 0 {
        return Err(LinkRankError::InvalidInput(
            "sample count must be at least 1".to_string(),
        ));
    }

    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_os_rng(),
    };

    let pages: Vec<&str> = graph.pages().collect();
    let mut counts: BTreeMap<String, u64> =
        pages.iter().map(|&p| (p.to_string(), 0)).collect();

    let mut current: String = match pages.choose(&mut rng) {
        Some(&page) => page.to_string(),
        None => return Err(LinkRankError::EmptyGraph),
    };
    *counts.entry(current.clone()).or_insert(0) += 1;

    for _ in 1..config.samples {
        // The transition model owns the dangling-page fallback; the walk
        // itself never branches on link structure.
        let dist = transition_model(graph, &current, config.damping)?;
        current = dist.sample(&mut rng).to_string();
        *counts.entry(current.clone()).or_insert(0) += 1;
    }

    debug!(samples = config.samples, pages = pages.len(), "random walk complete");

    let n = config.samples as f64;
    let probs = counts
        .into_iter()
        .map(|(page, count)| (page, count as f64 / n))
        .collect();
    Ok(Distribution::from_map(probs))
}
