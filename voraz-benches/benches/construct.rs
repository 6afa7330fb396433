//! Greedy tour construction benchmarks.
//!
//! Measures sorting, edge selection, path assembly, and summarising for one
//! mode at a time over seeded complete graphs.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
#![expect(
    clippy::shadow_reuse,
    reason = "Criterion bench_with_input closures rebind parameter names"
)]
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use voraz_benches::{
    graph::{GraphConfig, SyntheticGraph, SyntheticGraphError},
    params::TourBenchParams,
};
use voraz_core::{SelectionMode, compute_greedy_tour};

/// Seed used for all synthetic graphs in this benchmark.
const SEED: u64 = 42;

/// Complete-graph sizes to benchmark. The largest crosses the parallel sort
/// threshold.
const NODE_COUNTS: &[usize] = &[50, 200, 500];

fn greedy_tour_impl(c: &mut Criterion) -> Result<(), SyntheticGraphError> {
    let mut group = c.benchmark_group("greedy_tour");
    group.sample_size(20);

    for &node_count in NODE_COUNTS {
        let graph = SyntheticGraph::complete(&GraphConfig {
            node_count,
            seed: SEED,
        })?;
        for mode in SelectionMode::ALL {
            let params = TourBenchParams { node_count, mode };
            group.bench_with_input(
                BenchmarkId::from_parameter(params),
                &(&graph, mode),
                |b, &(graph, mode)| {
                    b.iter(|| compute_greedy_tour(graph.edges(), graph.node_count(), mode));
                },
            );
        }
    }

    group.finish();
    Ok(())
}

fn greedy_tour(c: &mut Criterion) {
    if let Err(err) = greedy_tour_impl(c) {
        panic!("greedy_tour benchmark setup failed: {err}");
    }
}

criterion_group!(benches, greedy_tour);
criterion_main!(benches);
