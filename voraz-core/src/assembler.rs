//! Reconstruction of the visiting order from the tour adjacency.
//!
//! The walk starts at node 0 and repeatedly moves to the first unvisited
//! neighbour in acceptance order, backtracking when a node has none left. An
//! explicit stack replaces recursion so long tours cannot exhaust the thread
//! stack. Nodes that are not reachable from node 0 are not part of the path.

use crate::adjacency::Adjacency;

/// Fixed starting node of every walk.
pub const ANCHOR: usize = 0;

/// One suspended step of the depth-first walk.
struct Frame {
    node: usize,
    next_neighbour: usize,
}

/// Produces the ordered node sequence reachable from node 0.
///
/// Returns an empty path when node 0 does not exist or has no accepted edge.
/// When the walk covers every node and each has two tour neighbours, the
/// accepted edges form a closed tour and node 0 is appended again so the path
/// reads `[0, .., 0]`. Otherwise the path is left open. This includes two
/// nodes joined by one edge: the path is `[0, 1]`, not `[0, 1, 0]`, and no
/// zero-distance return step is reported for it.
///
/// # Examples
/// ```
/// use voraz_core::{SelectionMode, TourEdge, assemble, construct};
///
/// let edges = [
///     TourEdge::new(0, 1, 2.0),
///     TourEdge::new(1, 2, 2.0),
///     TourEdge::new(2, 0, 2.0),
/// ];
/// let construction = construct(&edges, 3, SelectionMode::Min);
/// assert_eq!(assemble(construction.adjacency(), 3), vec![0, 1, 2, 0]);
/// ```
#[must_use]
pub fn assemble(adjacency: &Adjacency, node_count: usize) -> Vec<usize> {
    if node_count == 0 || adjacency.neighbours(ANCHOR).is_empty() {
        return Vec::new();
    }

    let mut visited = vec![false; node_count];
    let mut path = Vec::with_capacity(node_count.saturating_add(1));
    let mut stack = vec![Frame {
        node: ANCHOR,
        next_neighbour: 0,
    }];
    visited[ANCHOR] = true;
    path.push(ANCHOR);

    while let Some(frame) = stack.last_mut() {
        let unvisited = adjacency
            .neighbours(frame.node)
            .iter()
            .enumerate()
            .skip(frame.next_neighbour)
            .find(|(_, neighbour)| !visited[neighbour.node()]);

        match unvisited {
            Some((index, neighbour)) => {
                frame.next_neighbour = index + 1;
                let next = neighbour.node();
                visited[next] = true;
                path.push(next);
                stack.push(Frame {
                    node: next,
                    next_neighbour: 0,
                });
            }
            None => {
                stack.pop();
            }
        }
    }

    if closes_tour(adjacency, &path, node_count) {
        path.push(ANCHOR);
    }
    path
}

fn closes_tour(adjacency: &Adjacency, path: &[usize], node_count: usize) -> bool {
    path.len() == node_count && path.iter().all(|&node| adjacency.degree(node) == 2)
}
