//! Greedy degree-constrained edge selection.
//!
//! Edges are considered in weight order (ascending for
//! [`SelectionMode::Min`], descending for [`SelectionMode::Max`]). An edge is
//! accepted when neither endpoint already has two tour neighbours and it does
//! not close a cycle, with one exception: the edge that closes a cycle through
//! every node is accepted as the final tour edge.
//!
//! The sort is stable, so equal weights are considered in input order. This is
//! observable in the output and must not be replaced with an unstable sort.

use rayon::prelude::*;
use tracing::{Span, debug, field, instrument, trace};

use crate::{
    adjacency::Adjacency,
    cancel::CancellationToken,
    edge::{SelectionMode, TourEdge},
    error::{Result, TourError},
    union_find::DisjointSetForest,
};

/// A tour node has exactly two neighbours.
const MAX_DEGREE: u8 = 2;

/// Edge lists at least this long are sorted on the Rayon pool.
const PARALLEL_SORT_THRESHOLD: usize = 4_096;

/// Cancellation is polled once per this many candidate edges.
const CANCELLATION_POLL_INTERVAL: usize = 256;

/// Counters describing how candidate edges were handled.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ConstructionStats {
    /// Candidate edges examined before construction stopped.
    pub examined: usize,
    /// Edges accepted into the tour.
    pub accepted: usize,
    /// Edges rejected because an endpoint already had two neighbours.
    pub degree_rejections: usize,
    /// Edges rejected because they would close a cycle shorter than the tour.
    pub cycle_rejections: usize,
}

/// The selected edges and adjacency produced by one construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Construction {
    node_count: usize,
    selected_edges: Vec<TourEdge>,
    adjacency: Adjacency,
    stats: ConstructionStats,
}

impl Construction {
    /// Returns the number of nodes the construction ran over.
    #[must_use]
    #[rustfmt::skip]
    pub fn node_count(&self) -> usize { self.node_count }

    /// Returns the accepted edges in acceptance order.
    #[must_use]
    #[rustfmt::skip]
    pub fn selected_edges(&self) -> &[TourEdge] { &self.selected_edges }

    /// Returns the adjacency view built from the accepted edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn adjacency(&self) -> &Adjacency { &self.adjacency }

    /// Returns the decision counters.
    #[must_use]
    #[rustfmt::skip]
    pub fn stats(&self) -> ConstructionStats { self.stats }

    /// Returns `true` when the accepted edges form one cycle over every node.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.node_count > 0 && self.selected_edges.len() == self.node_count
    }

    /// Splits the construction into its selected edges and adjacency view.
    #[must_use]
    pub fn into_parts(self) -> (Vec<TourEdge>, Adjacency) {
        (self.selected_edges, self.adjacency)
    }
}

/// Outcome of offering a single candidate edge.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Decision {
    /// Joined two fragments.
    Extended,
    /// Closed the cycle over every node.
    Closed,
    /// An endpoint already had two neighbours.
    DegreeCapped,
    /// Would have closed a cycle shorter than the full tour.
    PrematureCycle,
}

/// Working state owned by one construction call.
struct Builder {
    node_count: usize,
    degrees: Vec<u8>,
    forest: DisjointSetForest,
    selected_edges: Vec<TourEdge>,
    adjacency: Adjacency,
    stats: ConstructionStats,
}

impl Builder {
    fn new(node_count: usize) -> Self {
        Self {
            node_count,
            degrees: vec![0; node_count],
            forest: DisjointSetForest::new(node_count),
            selected_edges: Vec::with_capacity(node_count),
            adjacency: Adjacency::with_node_count(node_count),
            stats: ConstructionStats::default(),
        }
    }

    fn offer(&mut self, edge: TourEdge) -> Decision {
        let (source, target) = (edge.source(), edge.target());
        self.stats.examined = self.stats.examined.saturating_add(1);

        if self.degrees[source] >= MAX_DEGREE || self.degrees[target] >= MAX_DEGREE {
            self.stats.degree_rejections = self.stats.degree_rejections.saturating_add(1);
            return Decision::DegreeCapped;
        }

        if !self.forest.connected(source, target) {
            self.accept(edge);
            return Decision::Extended;
        }

        // Evaluated before the union: the fragment must already span every
        // node and be one edge short of a full tour.
        if self.forest.component_size(source) == self.node_count
            && self.selected_edges.len() == self.node_count.saturating_sub(1)
        {
            self.accept(edge);
            return Decision::Closed;
        }

        self.stats.cycle_rejections = self.stats.cycle_rejections.saturating_add(1);
        Decision::PrematureCycle
    }

    fn accept(&mut self, edge: TourEdge) {
        let (source, target) = (edge.source(), edge.target());
        self.forest.union(source, target);
        self.selected_edges.push(edge);
        self.degrees[source] = self.degrees[source].saturating_add(1);
        self.degrees[target] = self.degrees[target].saturating_add(1);
        self.adjacency.link(&edge);
        self.stats.accepted = self.stats.accepted.saturating_add(1);
    }

    fn is_full(&self) -> bool {
        self.selected_edges.len() == self.node_count
    }

    fn finish(self) -> Construction {
        Construction {
            node_count: self.node_count,
            selected_edges: self.selected_edges,
            adjacency: self.adjacency,
            stats: self.stats,
        }
    }
}

/// Returns a copy of `edges` stably sorted in the order `mode` prefers.
pub(crate) fn sort_for_mode(edges: &[TourEdge], mode: SelectionMode) -> Vec<TourEdge> {
    let mut sorted = edges.to_vec();
    let by_weight = |left: &TourEdge, right: &TourEdge| mode.compare(left.weight(), right.weight());
    if sorted.len() >= PARALLEL_SORT_THRESHOLD {
        sorted.par_sort_by(by_weight);
    } else {
        sorted.sort_by(by_weight);
    }
    sorted
}

/// Runs the greedy heuristic over `edges` for a graph of `node_count` nodes.
///
/// Never fails: when the graph is too sparse to close a tour the returned
/// [`Construction`] simply holds fewer than `node_count` edges, possibly as
/// several disconnected path fragments.
///
/// Endpoints must lie in `0..node_count`, weights must be positive and finite,
/// and each unordered pair must appear at most once. These are not re-checked
/// here; see [`crate::TourRequest::validate`].
///
/// # Panics
/// Panics when an edge endpoint is `>= node_count`.
///
/// # Examples
/// ```
/// use voraz_core::{SelectionMode, TourEdge, construct};
///
/// let edges = [
///     TourEdge::new(0, 1, 1.0),
///     TourEdge::new(1, 2, 1.0),
///     TourEdge::new(2, 0, 1.0),
/// ];
/// let construction = construct(&edges, 3, SelectionMode::Min);
/// assert!(construction.is_complete());
/// assert_eq!(construction.selected_edges().len(), 3);
/// ```
#[must_use]
pub fn construct(edges: &[TourEdge], node_count: usize, mode: SelectionMode) -> Construction {
    let mut builder = Builder::new(node_count);
    run(&mut builder, &sort_for_mode(edges, mode), mode, || false);
    builder.finish()
}

/// Like [`construct`], but stops early once `token` is cancelled.
///
/// # Errors
/// Returns [`TourError::Cancelled`] when the token is observed as cancelled
/// before construction finishes.
///
/// # Panics
/// Panics when an edge endpoint is `>= node_count`.
pub fn construct_cancellable(
    edges: &[TourEdge],
    node_count: usize,
    mode: SelectionMode,
    token: &CancellationToken,
) -> Result<Construction> {
    if token.is_cancelled() {
        return Err(TourError::Cancelled { mode });
    }
    let sorted = sort_for_mode(edges, mode);
    let mut builder = Builder::new(node_count);
    if run(&mut builder, &sorted, mode, || token.is_cancelled()) {
        return Err(TourError::Cancelled { mode });
    }
    Ok(builder.finish())
}

/// Feeds `sorted` through `builder`. Returns `true` when interrupted.
#[instrument(
    name = "core.construct",
    skip(builder, sorted, interrupted),
    fields(
        node_count = builder.node_count,
        edges = sorted.len(),
        mode = %mode,
        accepted = field::Empty,
        complete = field::Empty,
    ),
)]
fn run(
    builder: &mut Builder,
    sorted: &[TourEdge],
    mode: SelectionMode,
    interrupted: impl Fn() -> bool,
) -> bool {
    for (position, edge) in sorted.iter().enumerate() {
        if position % CANCELLATION_POLL_INTERVAL == 0 && interrupted() {
            debug!(position, "construction interrupted");
            return true;
        }
        if builder.is_full() {
            break;
        }
        let decision = builder.offer(*edge);
        trace!(
            source = edge.source(),
            target = edge.target(),
            weight = edge.weight(),
            ?decision,
            "edge considered"
        );
        if decision == Decision::Closed {
            break;
        }
    }

    let span = Span::current();
    span.record("accepted", builder.stats.accepted);
    span.record("complete", builder.node_count > 0 && builder.is_full());
    debug!(
        examined = builder.stats.examined,
        degree_rejections = builder.stats.degree_rejections,
        cycle_rejections = builder.stats.cycle_rejections,
        "construction finished"
    );
    false
}


#[cfg(test)]
mod property;
