//! Request and response shapes exchanged with callers.
//!
//! With the `serde` feature the types serialise to the wire format
//! `{ edges: [{u, v, w}], numNodes, mode }` and
//! `{ path, details: [{from, to, dist}], cost, complete }`.

use std::collections::HashSet;

use tracing::instrument;

use crate::{
    edge::{SelectionMode, TourEdge},
    error::{Result, TourError},
    summary::StepDetail,
    tour::{TourResult, compute_greedy_tour},
};

/// Input to one tour computation.
///
/// # Examples
/// ```
/// use voraz_core::{SelectionMode, TourEdge, TourRequest};
///
/// let request = TourRequest::new(
///     vec![TourEdge::new(0, 1, 5.0), TourEdge::new(1, 2, 5.0), TourEdge::new(2, 0, 5.0)],
///     3,
///     SelectionMode::Max,
/// );
/// let tour = request.solve().expect("request is valid");
/// assert!(tour.is_complete());
/// assert_eq!(tour.cost(), 15.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct TourRequest {
    edges: Vec<TourEdge>,
    num_nodes: usize,
    mode: SelectionMode,
}

impl TourRequest {
    /// Creates a request.
    #[must_use]
    pub const fn new(edges: Vec<TourEdge>, num_nodes: usize, mode: SelectionMode) -> Self {
        Self {
            edges,
            num_nodes,
            mode,
        }
    }

    /// Returns the candidate edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[TourEdge] { &self.edges }

    /// Returns the declared node count.
    #[must_use]
    #[rustfmt::skip]
    pub const fn num_nodes(&self) -> usize { self.num_nodes }

    /// Returns the selection mode.
    #[must_use]
    #[rustfmt::skip]
    pub const fn mode(&self) -> SelectionMode { self.mode }

    /// Returns a copy of this request with a different mode.
    #[must_use]
    pub fn with_mode(&self, mode: SelectionMode) -> Self {
        Self {
            edges: self.edges.clone(),
            num_nodes: self.num_nodes,
            mode,
        }
    }

    /// Checks the obligations the heuristic places on its callers.
    ///
    /// The heuristic itself never filters input; this is the place to reject
    /// edges it would mishandle.
    ///
    /// # Errors
    /// Returns the first violation found, in edge order:
    /// [`TourError::InvalidNodeId`], [`TourError::SelfLoop`],
    /// [`TourError::NonFiniteWeight`], [`TourError::NonPositiveWeight`], or
    /// [`TourError::DuplicateEdge`].
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.edges.len());
        for edge in &self.edges {
            validate_edge(edge, self.num_nodes)?;
            let (left, right) = edge.canonical_pair();
            if !seen.insert((left, right)) {
                return Err(TourError::DuplicateEdge { left, right });
            }
        }
        Ok(())
    }

    /// Validates the request and computes its tour.
    ///
    /// # Errors
    /// Returns any error reported by [`Self::validate`].
    #[instrument(
        name = "core.request",
        err,
        skip(self),
        fields(edges = self.edges.len(), num_nodes = self.num_nodes, mode = %self.mode),
    )]
    pub fn solve(&self) -> Result<TourResult> {
        self.validate()?;
        Ok(compute_greedy_tour(&self.edges, self.num_nodes, self.mode))
    }
}

fn validate_edge(edge: &TourEdge, node_count: usize) -> Result<()> {
    let (left, right) = (edge.source(), edge.target());
    for node in [left, right] {
        if node >= node_count {
            return Err(TourError::InvalidNodeId { node, node_count });
        }
    }
    if left == right {
        return Err(TourError::SelfLoop { node: left });
    }
    let weight = edge.weight();
    if !weight.is_finite() {
        return Err(TourError::NonFiniteWeight { left, right });
    }
    if weight <= 0.0 {
        return Err(TourError::NonPositiveWeight {
            left,
            right,
            weight,
        });
    }
    Ok(())
}

/// Result of one computation in wire form.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TourResponse {
    /// Visiting order starting at node 0.
    pub path: Vec<usize>,
    /// One record per consecutive pair of `path`.
    pub details: Vec<StepDetail>,
    /// Summed weight of every accepted edge.
    pub cost: f64,
    /// Whether a full tour was closed.
    pub complete: bool,
}

impl From<&TourResult> for TourResponse {
    fn from(result: &TourResult) -> Self {
        Self {
            path: result.path().to_vec(),
            details: result.details().to_vec(),
            cost: result.cost(),
            complete: result.is_complete(),
        }
    }
}

impl From<TourResult> for TourResponse {
    fn from(result: TourResult) -> Self {
        Self::from(&result)
    }
}
