//! PageRank estimators: transition model, random-walk sampling, fixed-point iteration

mod iterative;
mod sampling;
mod transition;

pub use iterative::{iterate_pagerank, IterationConfig, IterationOutcome};
pub use sampling::{sample_pagerank, SamplingConfig};
pub use transition::transition_model;

use crate::error::{LinkRankError, Result};
use crate::graph::LinkGraph;

/// Reject damping factors outside (0, 1] before any computation starts.
pub(crate) fn validate_damping(damping: f64) -> Result<()> {
    if damping > 0.0 && damping <= 1.0 {
        Ok(())
    } else {
        Err(LinkRankError::InvalidDamping(damping))
    }
}

pub(crate) fn validate_graph(graph: &LinkGraph) -> Result<()> {
    if graph.is_empty() {
        Err(LinkRankError::EmptyGraph)
    } else {
        Ok(())
    }
}
