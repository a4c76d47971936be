//! Link graph and probability distribution types

use rand::Rng;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Directed graph of pages and their outbound links.
///
/// Pages are keyed by name. Targets of every stored link are themselves
/// pages of the graph, and a page never links to itself; `add_link`
/// enforces both. Pages with no outbound links ("dangling" pages) are
/// valid members.
///
/// `BTreeMap` keeps page iteration sorted, so results derived from the
/// graph print in a stable order without extra sorting.
#[derive(Debug, Clone, Default)]
pub struct LinkGraph {
    pages: BTreeMap<String, BTreeSet<String>>,
}

impl LinkGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a page with no links (yet). Idempotent.
    pub fn add_page(&mut self, name: impl Into<String>) {
        self.pages.entry(name.into()).or_default();
    }

    /// Add a directed link between two already-registered pages.
    ///
    /// Self-links and links whose endpoint is not a page of the graph are
    /// silently dropped, matching the corpus contract.
    pub fn add_link(&mut self, from: &str, to: &str) {
        if from == to || !self.pages.contains_key(to) {
            return;
        }
        if let Some(links) = self.pages.get_mut(from) {
            links.insert(to.to_string());
        }
    }

    /// Number of pages in the graph.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.pages.contains_key(name)
    }

    /// Page names in sorted order.
    pub fn pages(&self) -> impl Iterator<Item = &str> {
        self.pages.keys().map(String::as_str)
    }

    /// Outbound links of a page, or `None` if the page is unknown.
    pub fn links(&self, name: &str) -> Option<&BTreeSet<String>> {
        self.pages.get(name)
    }
}

/// Probability distribution over the pages of a graph.
///
/// Values are non-negative and sum to 1 within floating-point tolerance.
/// Immutable once constructed.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Distribution {
    probs: BTreeMap<String, f64>,
}

impl Distribution {
    pub(crate) fn from_map(probs: BTreeMap<String, f64>) -> Self {
        Self { probs }
    }

    /// Probability assigned to a page; 0.0 for unknown pages.
    pub fn get(&self, page: &str) -> f64 {
        self.probs.get(page).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.probs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probs.is_empty()
    }

    /// Entries in page-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.probs.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Sum of all probabilities. 1.0 up to floating-point error.
    pub fn total(&self) -> f64 {
        self.probs.values().sum()
    }

    /// Draw one page at random, weighted by probability.
    ///
    /// Cumulative scan against a uniform variate in [0, 1). Accumulated
    /// rounding can leave the variate just past the running total, in
    /// which case the draw resolves to the last page.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        let r: f64 = rng.random();
        let mut acc = 0.0;
        let mut last = "";
        for (page, p) in self.iter() {
            acc += p;
            last = page;
            if r < acc {
                return page;
            }
        }
        last
    }
}
