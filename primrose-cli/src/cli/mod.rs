//! Command-line interface for computing minimum spanning trees.
//!
//! The `run` command loads an edge-list file, runs one or both Prim builders,
//! and reports the tree weight and timing for each.

mod commands;

pub use commands::{
    AlgorithmChoice, AlgorithmRun, Cli, CliError, Command, ExecutionSummary, RunCommand,
    render_summary, run_cli,
};
