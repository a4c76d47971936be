//! LinkRank Core Library
//!
//! Ranks the pages of a hyperlink corpus with two independent PageRank
//! formulations and reports both.
//!
//! # Features
//! - Corpus crawler that turns a directory of HTML pages into a link graph
//! - Transition model for the damped random-surfer chain
//! - Monte-Carlo estimator driven by a long seedable random walk
//! - Deterministic fixed-point estimator with dangling-mass redistribution

pub mod corpus;
pub mod error;
pub mod graph;
pub mod rank;

pub use corpus::crawl;
pub use error::{Error, LinkRankError, Result};
pub use graph::{Distribution, LinkGraph};
pub use rank::{
    iterate_pagerank, sample_pagerank, transition_model, IterationConfig, IterationOutcome,
    SamplingConfig,
};

/// Default probability of following a link rather than teleporting
pub const DEFAULT_DAMPING: f64 = 0.85;

/// Default random-walk length for the sampling estimator
pub const DEFAULT_SAMPLES: usize = 10_000;
