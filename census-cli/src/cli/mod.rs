//! Command-line interface orchestration for the census counter.
//!
//! The CLI offers a single `count` command that runs the isomorphism-class
//! enumeration for a chosen vertex count and reports the result together
//! with the elapsed wall-clock time.

mod commands;

pub use commands::{
    Cli, CliError, Command, CountCommand, ExecutionSummary, StrategyArg, render_summary, run_cli,
};

#[cfg(test)]
mod tests;
