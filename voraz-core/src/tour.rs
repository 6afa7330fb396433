//! End-to-end tour computation for one or both selection modes.

use tracing::{debug, instrument};

use crate::{
    assembler::assemble,
    cancel::CancellationToken,
    construct::{Construction, construct, construct_cancellable},
    edge::{SelectionMode, TourEdge},
    error::Result,
    summary::{StepDetail, summarize},
};

/// Output of one greedy tour computation.
///
/// # Examples
/// ```
/// use voraz_core::{SelectionMode, TourEdge, compute_greedy_tour};
///
/// let edges = [
///     TourEdge::new(0, 1, 10.0),
///     TourEdge::new(1, 2, 10.0),
///     TourEdge::new(2, 3, 10.0),
///     TourEdge::new(3, 0, 10.0),
///     TourEdge::new(0, 2, 15.0),
///     TourEdge::new(1, 3, 15.0),
/// ];
/// let tour = compute_greedy_tour(&edges, 4, SelectionMode::Min);
/// assert!(tour.is_complete());
/// assert_eq!(tour.path(), &[0, 1, 2, 3, 0]);
/// assert_eq!(tour.cost(), 40.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TourResult {
    mode: SelectionMode,
    node_count: usize,
    path: Vec<usize>,
    details: Vec<StepDetail>,
    cost: f64,
    selected_edges: Vec<TourEdge>,
}

impl TourResult {
    /// Returns the mode the tour was built with.
    #[must_use]
    #[rustfmt::skip]
    pub fn mode(&self) -> SelectionMode { self.mode }

    /// Returns the number of nodes in the input graph.
    #[must_use]
    #[rustfmt::skip]
    pub fn node_count(&self) -> usize { self.node_count }

    /// Returns the visiting order starting at node 0.
    #[must_use]
    #[rustfmt::skip]
    pub fn path(&self) -> &[usize] { &self.path }

    /// Returns one record per consecutive pair of [`Self::path`].
    #[must_use]
    #[rustfmt::skip]
    pub fn details(&self) -> &[StepDetail] { &self.details }

    /// Returns the summed weight of every accepted edge.
    ///
    /// For incomplete tours this may exceed the sum of [`Self::details`].
    #[must_use]
    #[rustfmt::skip]
    pub fn cost(&self) -> f64 { self.cost }

    /// Returns the accepted edges in acceptance order.
    #[must_use]
    #[rustfmt::skip]
    pub fn selected_edges(&self) -> &[TourEdge] { &self.selected_edges }

    /// Returns `true` when the accepted edges close one cycle over all nodes.
    ///
    /// An incomplete tour is a normal outcome for sparse or disconnected
    /// inputs, not an error.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.node_count > 0 && self.selected_edges.len() == self.node_count
    }

    fn from_construction(construction: Construction, mode: SelectionMode) -> Self {
        let node_count = construction.node_count();
        let path = assemble(construction.adjacency(), node_count);
        let (details, cost) = summarize(&path, construction.adjacency(), construction.selected_edges());
        let (selected_edges, _) = construction.into_parts();
        let result = Self {
            mode,
            node_count,
            path,
            details,
            cost,
            selected_edges,
        };
        if !result.is_complete() {
            debug!(
                mode = %mode,
                node_count,
                selected = result.selected_edges.len(),
                path_len = result.path.len(),
                "no full tour could be closed"
            );
        }
        result
    }
}

/// Builds the greedy tour for `mode` and derives its path, steps, and cost.
///
/// Pure and total over its preconditions (see [`construct`]); every call owns
/// its working state, so concurrent calls never interfere.
///
/// # Panics
/// Panics when an edge endpoint is `>= node_count`.
#[must_use]
#[instrument(
    name = "core.tour",
    skip(edges),
    fields(edges = edges.len()),
)]
pub fn compute_greedy_tour(
    edges: &[TourEdge],
    node_count: usize,
    mode: SelectionMode,
) -> TourResult {
    TourResult::from_construction(construct(edges, node_count, mode), mode)
}

/// Like [`compute_greedy_tour`], but abandons the work once `token` is
/// cancelled.
///
/// # Errors
/// Returns [`crate::TourError::Cancelled`] when the token trips before
/// construction finishes.
///
/// # Panics
/// Panics when an edge endpoint is `>= node_count`.
#[instrument(
    name = "core.tour",
    err,
    skip(edges, token),
    fields(edges = edges.len()),
)]
pub fn compute_greedy_tour_cancellable(
    edges: &[TourEdge],
    node_count: usize,
    mode: SelectionMode,
    token: &CancellationToken,
) -> Result<TourResult> {
    let construction = construct_cancellable(edges, node_count, mode, token)?;
    Ok(TourResult::from_construction(construction, mode))
}

/// Shortest-leaning and longest-leaning tours over the same input.
#[derive(Clone, Debug, PartialEq)]
pub struct TourPair {
    shortest: TourResult,
    longest: TourResult,
}

impl TourPair {
    /// Returns the [`SelectionMode::Min`] tour.
    #[must_use]
    #[rustfmt::skip]
    pub fn shortest(&self) -> &TourResult { &self.shortest }

    /// Returns the [`SelectionMode::Max`] tour.
    #[must_use]
    #[rustfmt::skip]
    pub fn longest(&self) -> &TourResult { &self.longest }

    /// Returns the tour built with `mode`.
    #[must_use]
    pub fn get(&self, mode: SelectionMode) -> &TourResult {
        match mode {
            SelectionMode::Min => &self.shortest,
            SelectionMode::Max => &self.longest,
        }
    }

    /// Splits the pair into `(shortest, longest)`.
    #[must_use]
    pub fn into_parts(self) -> (TourResult, TourResult) {
        (self.shortest, self.longest)
    }
}

/// Computes both tours in parallel on the Rayon pool.
///
/// The two computations share only the read-only edge slice.
///
/// # Panics
/// Panics when an edge endpoint is `>= node_count`.
///
/// # Examples
/// ```
/// use voraz_core::{TourEdge, solve_both};
///
/// let edges = [
///     TourEdge::new(0, 1, 1.0),
///     TourEdge::new(1, 2, 2.0),
///     TourEdge::new(2, 0, 3.0),
/// ];
/// let pair = solve_both(&edges, 3);
/// assert_eq!(pair.shortest().cost(), pair.longest().cost());
/// ```
#[must_use]
pub fn solve_both(edges: &[TourEdge], node_count: usize) -> TourPair {
    let (shortest, longest) = rayon::join(
        || compute_greedy_tour(edges, node_count, SelectionMode::Min),
        || compute_greedy_tour(edges, node_count, SelectionMode::Max),
    );
    TourPair { shortest, longest }
}
