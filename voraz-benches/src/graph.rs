//! Seeded synthetic graphs for tour benchmarks.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use voraz_core::TourEdge;

/// Weights are drawn uniformly from this range.
const WEIGHT_RANGE: std::ops::Range<f64> = 1.0..1_000.0;

/// Errors raised while generating synthetic graphs.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticGraphError {
    /// A tour needs at least three nodes.
    #[error("a complete graph for touring needs at least 3 nodes, got {node_count}")]
    TooFewNodes {
        /// The requested node count.
        node_count: usize,
    },
}

/// Configuration for [`SyntheticGraph::complete`].
#[derive(Clone, Copy, Debug)]
pub struct GraphConfig {
    /// Number of nodes.
    pub node_count: usize,
    /// Seed for the weight generator.
    pub seed: u64,
}

/// A complete graph with random positive weights.
#[derive(Clone, Debug)]
pub struct SyntheticGraph {
    node_count: usize,
    edges: Vec<TourEdge>,
}

impl SyntheticGraph {
    /// Generates every unordered pair of `config.node_count` nodes once, with
    /// weights drawn from a generator seeded by `config.seed`.
    ///
    /// # Errors
    /// Returns [`SyntheticGraphError::TooFewNodes`] below three nodes.
    pub fn complete(config: &GraphConfig) -> Result<Self, SyntheticGraphError> {
        let node_count = config.node_count;
        if node_count < 3 {
            return Err(SyntheticGraphError::TooFewNodes { node_count });
        }
        let mut rng = SmallRng::seed_from_u64(config.seed);
        let edge_count: usize = (1..node_count).sum();
        let mut edges = Vec::with_capacity(edge_count);
        for source in 0..node_count {
            for target in (source + 1)..node_count {
                edges.push(TourEdge::new(source, target, rng.gen_range(WEIGHT_RANGE)));
            }
        }
        Ok(Self { node_count, edges })
    }

    /// Returns the number of nodes.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.node_count
    }

    /// Returns the generated edges.
    #[must_use]
    pub fn edges(&self) -> &[TourEdge] {
        &self.edges
    }
}
