//! Command implementations and argument parsing for the census CLI.

use std::fmt;
use std::io::{self, Write};
use std::time::{Duration, Instant};

use census_core::{CensusBuilder, CensusError, CensusResult, ExecutionStrategy};
use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

const DEFAULT_VERTICES: usize = 7;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "census",
    about = "Count the isomorphism classes of simple undirected graphs."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Run the isomorphism-class enumeration.
    Count(CountCommand),
}

/// Options accepted by the `count` command.
#[derive(Debug, Args, Clone)]
pub struct CountCommand {
    /// Number of labelled vertices to enumerate over. Counts above eight
    /// are accepted up to the representation bound but impractical to run.
    #[arg(
        long,
        default_value_t = DEFAULT_VERTICES,
        value_parser = clap::value_parser!(usize),
    )]
    pub vertices: usize,

    /// Backend used for the per-class permutation fan-out.
    #[arg(long, value_enum, default_value_t = StrategyArg::Auto)]
    pub strategy: StrategyArg,
}

/// Execution strategies selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Let the library pick a backend.
    Auto,
    /// Force the single-threaded backend.
    Sequential,
    /// Require the Rayon-backed fan-out.
    Parallel,
}

impl From<StrategyArg> for ExecutionStrategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::Auto => Self::Auto,
            StrategyArg::Sequential => Self::Sequential,
            StrategyArg::Parallel => Self::Parallel,
        }
    }
}

impl fmt::Display for StrategyArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Auto => "auto",
            Self::Sequential => "sequential",
            Self::Parallel => "parallel",
        };
        f.write_str(label)
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Core enumeration failed.
    #[error(transparent)]
    Core(#[from] CensusError),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Vertex count the enumeration ran on.
    pub vertices: usize,
    /// Class counts produced by the enumeration.
    pub result: CensusResult,
    /// Wall-clock time spent inside the enumeration.
    pub elapsed: Duration,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when validation or execution fails.
///
/// # Examples
/// ```
/// use census_cli::cli::{Cli, Command, CountCommand, StrategyArg, run_cli};
///
/// let cli = Cli {
///     command: Command::Count(CountCommand {
///         vertices: 4,
///         strategy: StrategyArg::Auto,
///     }),
/// };
/// let summary = run_cli(cli).expect("four vertices run in microseconds");
/// assert_eq!(summary.result.class_count(), 11);
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Count(count) => {
            Span::current().record("command", field::display("count"));
            count_command(count)
        }
    }
}

#[instrument(
    name = "cli.count",
    err,
    skip(command),
    fields(vertices = field::Empty, strategy = field::Empty),
)]
pub(super) fn count_command(command: CountCommand) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    span.record("vertices", field::display(command.vertices));
    span.record("strategy", field::display(command.strategy));

    let census = CensusBuilder::new()
        .with_vertices(command.vertices)
        .with_execution_strategy(command.strategy.into())
        .build()?;

    let started = Instant::now();
    let result = census.run()?;
    let elapsed = started.elapsed();

    info!(
        vertices = result.vertices(),
        classes = result.class_count(),
        elapsed_ms = elapsed.as_millis() as u64,
        "count completed"
    );
    Ok(ExecutionSummary {
        vertices: result.vertices(),
        result,
        elapsed,
    })
}

/// Renders `summary` to `writer` in a human-readable text format: one line
/// with the class count, one line with the elapsed whole milliseconds.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::io::Cursor;
/// use census_cli::cli::{Cli, Command, CountCommand, StrategyArg, render_summary, run_cli};
///
/// let cli = Cli {
///     command: Command::Count(CountCommand {
///         vertices: 3,
///         strategy: StrategyArg::Sequential,
///     }),
/// };
/// let summary = run_cli(cli).expect("three vertices run in microseconds");
/// let mut buffer = Cursor::new(Vec::new());
/// render_summary(&summary, &mut buffer).expect("writing to memory cannot fail");
/// let rendered = String::from_utf8(buffer.into_inner()).expect("output is UTF-8");
/// assert!(rendered.starts_with("isomorphism classes on 3 vertices: 4"));
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(
        writer,
        "isomorphism classes on {} vertices: {}",
        summary.vertices,
        summary.result.class_count()
    )?;
    writeln!(writer, "elapsed: {} ms", summary.elapsed.as_millis())?;
    Ok(())
}
