//! Benchmark parameter labels.

use std::fmt;

use voraz_core::SelectionMode;

/// Parameters for one construction benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct TourBenchParams {
    /// Number of nodes in the complete graph.
    pub node_count: usize,
    /// Edge ordering under test.
    pub mode: SelectionMode,
}

impl fmt::Display for TourBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},mode={}", self.node_count, self.mode)
    }
}
