//! Per-step distances and aggregate cost for an assembled tour.

use crate::{adjacency::Adjacency, edge::TourEdge};

/// Distance travelled between two consecutive path entries.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepDetail {
    from: usize,
    to: usize,
    #[cfg_attr(feature = "serde", serde(rename = "dist"))]
    distance: f64,
}

impl StepDetail {
    /// Creates a step record.
    #[must_use]
    pub const fn new(from: usize, to: usize, distance: f64) -> Self {
        Self { from, to, distance }
    }

    /// Returns the node the step leaves.
    #[must_use]
    #[rustfmt::skip]
    pub const fn from(&self) -> usize { self.from }

    /// Returns the node the step arrives at.
    #[must_use]
    #[rustfmt::skip]
    pub const fn to(&self) -> usize { self.to }

    /// Returns the step distance.
    #[must_use]
    #[rustfmt::skip]
    pub const fn distance(&self) -> f64 { self.distance }
}

/// Derives step details from `path` and the total cost from `selected_edges`.
///
/// Each step's distance is the weight of the first adjacency entry of the
/// departing node that leads to the arriving node, or `0.0` when there is none.
///
/// The cost is the sum over `selected_edges` and does not look at `path`. For
/// an incomplete tour the two can disagree: fragments unreachable from node 0
/// count towards the cost but never appear as steps.
///
/// # Examples
/// ```
/// use voraz_core::{SelectionMode, TourEdge, assemble, construct, summarize};
///
/// let edges = [TourEdge::new(0, 1, 4.0), TourEdge::new(2, 3, 6.0)];
/// let construction = construct(&edges, 4, SelectionMode::Min);
/// let path = assemble(construction.adjacency(), 4);
/// let (details, cost) = summarize(&path, construction.adjacency(), construction.selected_edges());
/// assert_eq!(path, vec![0, 1]);
/// assert_eq!(details.len(), 1);
/// assert_eq!(cost, 10.0);
/// ```
#[must_use]
pub fn summarize(
    path: &[usize],
    adjacency: &Adjacency,
    selected_edges: &[TourEdge],
) -> (Vec<StepDetail>, f64) {
    let details = path
        .iter()
        .zip(path.iter().skip(1))
        .map(|(&from, &to)| {
            StepDetail::new(from, to, adjacency.weight_between(from, to).unwrap_or(0.0))
        })
        .collect();
    let cost = selected_edges.iter().map(TourEdge::weight).sum();
    (details, cost)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_adjacency_entries_report_zero() {
        let mut adjacency = Adjacency::with_node_count(3);
        let edge = TourEdge::new(0, 1, 9.0);
        adjacency.link(&edge);
        let (details, cost) = summarize(&[0, 1, 2], &adjacency, &[edge]);
        assert_eq!(
            details,
            vec![StepDetail::new(0, 1, 9.0), StepDetail::new(1, 2, 0.0)]
        );
        assert_eq!(cost, 9.0);
    }

    #[test]
    fn empty_path_has_no_steps_but_keeps_cost() {
        let adjacency = Adjacency::with_node_count(3);
        let edges = [TourEdge::new(1, 2, 3.5)];
        let (details, cost) = summarize(&[], &adjacency, &edges);
        assert!(details.is_empty());
        assert_eq!(cost, 3.5);
    }
}
