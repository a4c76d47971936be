//! Transition model: next-page distribution for a random surfer

use super::{validate_damping, validate_graph};
use crate::error::{LinkRankError, Result};
use crate::graph::{Distribution, LinkGraph};
use std::collections::{BTreeMap, BTreeSet};

/// Probability of visiting each page next, given the current page.
///
/// With probability `damping` the surfer follows one of the current page's
/// links (each equally likely); with probability `1 - damping` it teleports
/// to any page of the graph. A dangling page has no links to follow, so the
/// next page is drawn uniformly from the whole graph instead.
///
/// The returned distribution covers exactly the graph's pages and sums
/// to 1.
pub fn transition_model(graph: &LinkGraph, page: &str, damping: f64) -> Result<Distribution> {
    validate_damping(damping)?;
    validate_graph(graph)?;
    let links = graph
        .links(page)
        .ok_or_else(|| LinkRankError::PageNotFound(page.to_string()))?;
    Ok(transition_unchecked(graph, links, damping))
}

/// Core of the transition model, past input validation.
///
/// The dangling branch is what keeps the link term free of division by
/// zero; a zero link count reaching the `else` arm would mean the graph
/// invariants were broken upstream.
pub(crate) fn transition_unchecked(
    graph: &LinkGraph,
    links: &BTreeSet<String>,
    damping: f64,
) -> Distribution {
    let n = graph.len() as f64;
    let mut probs: BTreeMap<String, f64> = BTreeMap::new();

    if links.is_empty() {
        for page in graph.pages() {
            probs.insert(page.to_string(), 1.0 / n);
        }
    } else {
        let base = (1.0 - damping) / n;
        let link_share = damping / links.len() as f64;
        for page in graph.pages() {
            probs.insert(page.to_string(), base);
        }
        for target in links {
            if let Some(p) = probs.get_mut(target) {
                *p += link_share;
            }
        }
    }

    Distribution::from_map(probs)
}
