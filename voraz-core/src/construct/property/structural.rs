//! Structural invariants of a construction.
//!
//! For any input the selected edge set must satisfy:
//!
//! - **Edge budget**: at most `N` edges.
//! - **Degree cap**: no node touches more than two selected edges. Degrees
//!   only grow during construction, so the final cap bounds every step.
//! - **No short cycles**: without the closing edge the selection is a forest.
//! - **Full cycle shape**: with exactly `N` edges every node has degree two
//!   and all nodes share one representative.
//! - **Determinism**: repeated runs give identical selections and paths.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{DisjointSetForest, SelectionMode, TourEdge, compute_greedy_tour, construct};

use super::types::TourFixture;

/// Runs every structural check for both selection modes.
pub(super) fn run_structural_invariants_property(fixture: &TourFixture) -> TestCaseResult {
    for mode in SelectionMode::ALL {
        let construction = construct(&fixture.edges, fixture.node_count, mode);
        let selected = construction.selected_edges();
        let context = describe(fixture, mode);

        validate_edge_budget(fixture.node_count, selected, &context)?;
        let degrees = validate_degree_cap(fixture.node_count, selected, &context)?;
        validate_cycle_structure(fixture.node_count, selected, &degrees, &context)?;
    }
    Ok(())
}

/// Runs construction and traversal twice per mode and compares the outputs.
pub(super) fn run_determinism_property(fixture: &TourFixture) -> TestCaseResult {
    for mode in SelectionMode::ALL {
        let first = compute_greedy_tour(&fixture.edges, fixture.node_count, mode);
        let second = compute_greedy_tour(&fixture.edges, fixture.node_count, mode);
        if first != second {
            return Err(TestCaseError::fail(format!(
                "repeated runs diverged ({})",
                describe(fixture, mode)
            )));
        }
    }
    Ok(())
}

/// Checks that a complete tour has the closed path shape `[0, .., 0]`.
pub(super) fn run_closure_shape_property(fixture: &TourFixture) -> TestCaseResult {
    for mode in SelectionMode::ALL {
        let tour = compute_greedy_tour(&fixture.edges, fixture.node_count, mode);
        if !tour.is_complete() {
            continue;
        }
        let path = tour.path();
        let closed = path.len() == fixture.node_count + 1
            && path.first() == Some(&0)
            && path.last() == Some(&0);
        if !closed {
            return Err(TestCaseError::fail(format!(
                "complete tour has open path {path:?} ({})",
                describe(fixture, mode)
            )));
        }
        let step_total: f64 = tour.details().iter().map(|step| step.distance()).sum();
        if (step_total - tour.cost()).abs() > 1e-6 * tour.cost().max(1.0) {
            return Err(TestCaseError::fail(format!(
                "step total {step_total} differs from cost {} ({})",
                tour.cost(),
                describe(fixture, mode)
            )));
        }
    }
    Ok(())
}

/// Checks that MIN mode closes a full tour on a complete graph.
pub(super) fn run_complete_graph_closure_property(fixture: &TourFixture) -> TestCaseResult {
    let construction = construct(&fixture.edges, fixture.node_count, SelectionMode::Min);
    if construction.is_complete() {
        Ok(())
    } else {
        Err(TestCaseError::fail(format!(
            "complete graph left open with {} edges ({})",
            construction.selected_edges().len(),
            describe(fixture, SelectionMode::Min)
        )))
    }
}

fn describe(fixture: &TourFixture, mode: SelectionMode) -> String {
    format!(
        "shape={:?}, mode={mode}, nodes={}, edges={}",
        fixture.shape,
        fixture.node_count,
        fixture.edges.len()
    )
}

fn validate_edge_budget(node_count: usize, selected: &[TourEdge], context: &str) -> TestCaseResult {
    if selected.len() > node_count {
        return Err(TestCaseError::fail(format!(
            "selected {} edges for {node_count} nodes ({context})",
            selected.len()
        )));
    }
    Ok(())
}

fn validate_degree_cap(
    node_count: usize,
    selected: &[TourEdge],
    context: &str,
) -> Result<Vec<usize>, TestCaseError> {
    let mut degrees = vec![0_usize; node_count];
    for edge in selected {
        degrees[edge.source()] += 1;
        degrees[edge.target()] += 1;
    }
    if let Some((node, degree)) = degrees.iter().enumerate().find(|(_, degree)| **degree > 2) {
        return Err(TestCaseError::fail(format!(
            "node {node} has degree {degree} ({context})"
        )));
    }
    Ok(degrees)
}

fn validate_cycle_structure(
    node_count: usize,
    selected: &[TourEdge],
    degrees: &[usize],
    context: &str,
) -> TestCaseResult {
    let mut forest = DisjointSetForest::new(node_count);
    let complete = node_count > 0 && selected.len() == node_count;

    for (index, edge) in selected.iter().enumerate() {
        let is_closing_edge = complete && index + 1 == selected.len();
        if !forest.union(edge.source(), edge.target()) && !is_closing_edge {
            return Err(TestCaseError::fail(format!(
                "edge {index} ({}, {}) closes a short cycle ({context})",
                edge.source(),
                edge.target()
            )));
        }
    }

    if complete {
        if forest.component_count() != 1 {
            return Err(TestCaseError::fail(format!(
                "full selection spans {} components ({context})",
                forest.component_count()
            )));
        }
        if degrees.iter().any(|&degree| degree != 2) {
            return Err(TestCaseError::fail(format!(
                "full selection has a node without degree two ({context})"
            )));
        }
    }
    Ok(())
}
