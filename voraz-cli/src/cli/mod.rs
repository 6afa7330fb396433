//! Command-line interface for computing greedy tours over a distance matrix.
//!
//! The `run` command loads a delimited matrix, computes the shortest-leaning
//! and/or longest-leaning tour, and renders them with location labels.

mod commands;
mod render;

pub use commands::{
    Cli, CliError, Command, DelimiterArg, ExecutionSummary, ModeArg, OutputFormat, RunCommand,
    run_cli,
};
pub use render::render_summary;
