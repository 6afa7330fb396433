//! Both-mode benchmarks: Rayon `join` against dedicated worker threads.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
#![expect(
    clippy::shadow_reuse,
    reason = "Criterion bench_with_input closures rebind parameter names"
)]
use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use voraz_benches::graph::{GraphConfig, SyntheticGraph, SyntheticGraphError};
use voraz_core::{TourDispatcher, TourEdge, solve_both};

const SEED: u64 = 7;

const NODE_COUNTS: &[usize] = &[200, 500];

fn both_modes_impl(c: &mut Criterion) -> Result<(), SyntheticGraphError> {
    let mut group = c.benchmark_group("both_modes");
    group.sample_size(20);

    for &node_count in NODE_COUNTS {
        let graph = SyntheticGraph::complete(&GraphConfig {
            node_count,
            seed: SEED,
        })?;
        let shared: Arc<[TourEdge]> = Arc::from(graph.edges());

        group.bench_with_input(
            BenchmarkId::new("rayon_join", node_count),
            &graph,
            |b, graph| {
                b.iter(|| solve_both(graph.edges(), graph.node_count()));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("dispatcher", node_count),
            &shared,
            |b, shared| {
                let (dispatcher, updates) = TourDispatcher::new();
                b.iter(|| {
                    if let Err(err) = dispatcher
                        .submit(Arc::clone(shared), node_count)
                        .and_then(voraz_core::Submission::join)
                    {
                        panic!("dispatch failed: {err}");
                    }
                    updates.try_iter().count()
                });
            },
        );
    }

    group.finish();
    Ok(())
}

fn both_modes(c: &mut Criterion) {
    if let Err(err) = both_modes_impl(c) {
        panic!("both_modes benchmark setup failed: {err}");
    }
}

criterion_group!(benches, both_modes);
criterion_main!(benches);
