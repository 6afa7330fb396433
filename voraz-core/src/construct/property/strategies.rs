//! Graph generators for construction property tests.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng, seq::SliceRandom};

use crate::TourEdge;

use super::types::{GraphShape, TourFixture};

/// Smallest generated node count (includes the degenerate sizes).
const MIN_NODES: usize = 0;
/// Largest generated node count.
const MAX_NODES: usize = 40;

/// Generates fixtures across every [`GraphShape`].
pub(super) fn tour_fixture_strategy() -> impl Strategy<Value = TourFixture> {
    (any::<GraphShape>(), any::<u64>()).prop_map(|(shape, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(shape, &mut rng)
    })
}

/// Generates complete graphs with distinct weights and at least three nodes.
pub(super) fn complete_distinct_strategy() -> impl Strategy<Value = TourFixture> {
    (3_usize..=MAX_NODES, any::<u64>()).prop_map(|(node_count, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        complete_distinct(node_count, &mut rng)
    })
}

/// Generates a fixture of the requested shape.
pub(super) fn generate_fixture(shape: GraphShape, rng: &mut SmallRng) -> TourFixture {
    match shape {
        GraphShape::CompleteDistinct => {
            let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
            complete_distinct(node_count, rng)
        }
        GraphShape::CompleteTied => complete_tied(rng),
        GraphShape::Sparse => sparse(rng),
        GraphShape::Disconnected => disconnected(rng),
    }
}

fn all_pairs(offset: usize, size: usize) -> impl Iterator<Item = (usize, usize)> {
    (offset..offset + size)
        .flat_map(move |left| (left + 1..offset + size).map(move |right| (left, right)))
}

/// Complete graph whose weights are a shuffled `1..=pairs` sequence.
fn complete_distinct(node_count: usize, rng: &mut SmallRng) -> TourFixture {
    let mut pairs: Vec<(usize, usize)> = all_pairs(0, node_count).collect();
    pairs.shuffle(rng);
    let edges = pairs
        .into_iter()
        .zip(1_u32..)
        .map(|((left, right), weight)| orient(left, right, f64::from(weight), rng))
        .collect();
    TourFixture {
        node_count,
        edges,
        shape: GraphShape::CompleteDistinct,
    }
}

fn complete_tied(rng: &mut SmallRng) -> TourFixture {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let pool: Vec<f64> = (0..rng.gen_range(1..=3))
        .map(|_| f64::from(rng.gen_range(1_u8..=10)))
        .collect();
    let edges = all_pairs(0, node_count)
        .map(|(left, right)| {
            let weight = pool.choose(rng).copied().unwrap_or(1.0);
            orient(left, right, weight, rng)
        })
        .collect();
    TourFixture {
        node_count,
        edges,
        shape: GraphShape::CompleteTied,
    }
}

fn sparse(rng: &mut SmallRng) -> TourFixture {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let probability: f64 = rng.gen_range(0.05..=0.4);
    let edges = all_pairs(0, node_count)
        .filter(|_| rng.gen_bool(probability))
        .collect::<Vec<_>>()
        .into_iter()
        .map(|(left, right)| {
            let weight = rng.gen_range(0.5..500.0);
            orient(left, right, weight, rng)
        })
        .collect();
    TourFixture {
        node_count,
        edges,
        shape: GraphShape::Sparse,
    }
}

fn disconnected(rng: &mut SmallRng) -> TourFixture {
    let sizes: Vec<usize> = (0..rng.gen_range(2..=4))
        .map(|_| rng.gen_range(3..=10))
        .collect();
    let mut edges = Vec::new();
    let mut offset = 0;
    for &size in &sizes {
        for (left, right) in all_pairs(offset, size) {
            let weight = rng.gen_range(0.5..500.0);
            edges.push(orient(left, right, weight, rng));
        }
        offset += size;
    }
    edges.shuffle(rng);
    TourFixture {
        node_count: offset,
        edges,
        shape: GraphShape::Disconnected,
    }
}

/// Randomly swaps endpoints so the constructor never relies on `u < v`.
fn orient(left: usize, right: usize, weight: f64, rng: &mut SmallRng) -> TourEdge {
    if rng.gen_bool(0.5) {
        TourEdge::new(left, right, weight)
    } else {
        TourEdge::new(right, left, weight)
    }
}
