//! Adjacency view over the accepted tour edges.

use crate::edge::TourEdge;

/// One entry of a node's adjacency list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Neighbour {
    node: usize,
    weight: f64,
}

impl Neighbour {
    /// Returns the neighbouring node id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn node(&self) -> usize { self.node }

    /// Returns the weight of the connecting edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> f64 { self.weight }
}

/// Per-node neighbour lists, kept in edge acceptance order.
///
/// Lists are never re-sorted: traversal order follows the order in which the
/// constructor accepted edges.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Adjacency {
    lists: Vec<Vec<Neighbour>>,
}

impl Adjacency {
    /// Creates empty adjacency lists for `node_count` nodes.
    #[must_use]
    pub fn with_node_count(node_count: usize) -> Self {
        Self {
            lists: vec![Vec::new(); node_count],
        }
    }

    /// Records `edge` in both endpoints' lists.
    ///
    /// # Panics
    /// Panics when an endpoint is outside the node range.
    pub fn link(&mut self, edge: &TourEdge) {
        let (source, target, weight) = (edge.source(), edge.target(), edge.weight());
        self.lists[source].push(Neighbour {
            node: target,
            weight,
        });
        self.lists[target].push(Neighbour {
            node: source,
            weight,
        });
    }

    /// Returns the number of nodes covered by the view.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.lists.len()
    }

    /// Returns `node`'s neighbours in acceptance order.
    ///
    /// Unknown nodes have no neighbours.
    #[must_use]
    pub fn neighbours(&self, node: usize) -> &[Neighbour] {
        self.lists.get(node).map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns the number of accepted edges touching `node`.
    #[must_use]
    pub fn degree(&self, node: usize) -> usize {
        self.neighbours(node).len()
    }

    /// Returns the weight of the first recorded edge from `from` to `to`.
    #[must_use]
    pub fn weight_between(&self, from: usize, to: usize) -> Option<f64> {
        self.neighbours(from)
            .iter()
            .find(|neighbour| neighbour.node == to)
            .map(Neighbour::weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_records_both_directions_in_order() {
        let mut adjacency = Adjacency::with_node_count(3);
        adjacency.link(&TourEdge::new(0, 2, 4.0));
        adjacency.link(&TourEdge::new(1, 0, 7.0));

        let around_zero: Vec<usize> = adjacency.neighbours(0).iter().map(Neighbour::node).collect();
        assert_eq!(around_zero, vec![2, 1]);
        assert_eq!(adjacency.degree(0), 2);
        assert_eq!(adjacency.degree(1), 1);
        assert_eq!(adjacency.weight_between(2, 0), Some(4.0));
        assert_eq!(adjacency.weight_between(0, 1), Some(7.0));
    }

    #[test]
    fn missing_entries_are_reported_as_absent() {
        let adjacency = Adjacency::with_node_count(2);
        assert_eq!(adjacency.weight_between(0, 1), None);
        assert!(adjacency.neighbours(9).is_empty());
        assert_eq!(adjacency.node_count(), 2);
    }
}
