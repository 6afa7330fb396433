//! Property-based test runners for greedy tour construction.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::test_utils::suite_proptest_config;

use super::strategies::{complete_distinct_strategy, generate_fixture, tour_fixture_strategy};
use super::structural::{
    run_closure_shape_property, run_complete_graph_closure_property, run_determinism_property,
    run_structural_invariants_property,
};
use super::types::GraphShape;

proptest! {
    #![proptest_config(suite_proptest_config(128))]

    #[test]
    fn construction_structural_invariants(fixture in tour_fixture_strategy()) {
        run_structural_invariants_property(&fixture)?;
    }

    #[test]
    fn construction_is_deterministic(fixture in tour_fixture_strategy()) {
        run_determinism_property(&fixture)?;
    }

    #[test]
    fn complete_tours_close_on_node_zero(fixture in tour_fixture_strategy()) {
        run_closure_shape_property(&fixture)?;
    }

    #[test]
    fn complete_graphs_always_close(fixture in complete_distinct_strategy()) {
        run_complete_graph_closure_property(&fixture)?;
    }
}

#[rstest::rstest]
#[case::complete_distinct_42(GraphShape::CompleteDistinct, 42)]
#[case::complete_tied_42(GraphShape::CompleteTied, 42)]
#[case::complete_tied_999(GraphShape::CompleteTied, 999)]
#[case::sparse_42(GraphShape::Sparse, 42)]
#[case::sparse_7777(GraphShape::Sparse, 7777)]
#[case::disconnected_42(GraphShape::Disconnected, 42)]
fn structural_invariants_hold_for_seeded_shapes(#[case] shape: GraphShape, #[case] seed: u64) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let fixture = generate_fixture(shape, &mut rng);
    run_structural_invariants_property(&fixture).expect("structural invariants must hold");
    run_closure_shape_property(&fixture).expect("closure shape must hold");
}
