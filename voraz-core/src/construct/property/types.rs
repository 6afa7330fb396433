//! Fixture types for construction property tests.

use test_strategy::Arbitrary;

use crate::TourEdge;

/// Shape of the generated input graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum GraphShape {
    /// Every pair of nodes joined, each with a distinct weight.
    #[weight(3)]
    CompleteDistinct,
    /// Every pair of nodes joined, weights drawn from a tiny pool.
    #[weight(2)]
    CompleteTied,
    /// Each pair present with moderate probability.
    #[weight(2)]
    Sparse,
    /// Several components with no edges between them.
    #[weight(1)]
    Disconnected,
}

/// Generated input for one property case.
#[derive(Clone, Debug)]
pub(super) struct TourFixture {
    /// Number of nodes in the graph.
    pub node_count: usize,
    /// Candidate edges, one per unordered pair at most.
    pub edges: Vec<TourEdge>,
    /// Shape used during generation.
    pub shape: GraphShape,
}
