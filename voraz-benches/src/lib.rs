//! Benchmark support crate for voraz.
//!
//! Provides seeded synthetic graphs and parameter labels for the Criterion
//! benchmarks of greedy tour construction and concurrent dispatch.

pub mod graph;
pub mod params;
