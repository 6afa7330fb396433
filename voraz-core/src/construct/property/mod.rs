//! Property-based tests for greedy tour construction.
//!
//! Generates graphs with varied topologies and weight distributions and
//! checks the structural invariants of the selected edge set (degree cap,
//! edge budget, full-cycle shape), determinism across repeated runs, and
//! guaranteed closure on complete graphs.

mod strategies;
mod structural;
#[cfg(test)]
mod tests;
mod types;
