//! Unit tests for the CLI commands and rendering helpers.

use std::io::Cursor;
use std::time::Duration;

use census_core::{CensusError, ExecutionStrategy};
use clap::Parser;
use rstest::rstest;

use super::{Cli, CliError, Command, CountCommand, StrategyArg, render_summary, run_cli};

type TestResult = Result<(), Box<dyn std::error::Error>>;

#[rstest]
fn parse_defaults_to_the_reference_workload() -> TestResult {
    let cli = Cli::try_parse_from(["census", "count"])?;
    let Command::Count(count) = cli.command;
    assert_eq!(count.vertices, 7);
    assert_eq!(count.strategy, StrategyArg::Auto);
    Ok(())
}

#[rstest]
#[case::auto("auto", StrategyArg::Auto)]
#[case::sequential("sequential", StrategyArg::Sequential)]
#[case::parallel("parallel", StrategyArg::Parallel)]
fn parse_accepts_each_strategy(#[case] raw: &str, #[case] expected: StrategyArg) -> TestResult {
    let cli = Cli::try_parse_from(["census", "count", "--vertices", "5", "--strategy", raw])?;
    let Command::Count(count) = cli.command;
    assert_eq!(count.vertices, 5);
    assert_eq!(count.strategy, expected);
    Ok(())
}

#[rstest]
#[case(StrategyArg::Auto, ExecutionStrategy::Auto)]
#[case(StrategyArg::Sequential, ExecutionStrategy::Sequential)]
#[case(StrategyArg::Parallel, ExecutionStrategy::Parallel)]
fn strategy_args_map_onto_core_strategies(
    #[case] arg: StrategyArg,
    #[case] expected: ExecutionStrategy,
) {
    assert_eq!(ExecutionStrategy::from(arg), expected);
}

#[rstest]
#[case(3, 4)]
#[case(4, 11)]
#[case(5, 34)]
fn count_reports_the_known_class_counts(#[case] vertices: usize, #[case] expected: u64) -> TestResult {
    let cli = Cli {
        command: Command::Count(CountCommand {
            vertices,
            strategy: StrategyArg::Auto,
        }),
    };
    let summary = run_cli(cli)?;
    assert_eq!(summary.vertices, vertices);
    assert_eq!(summary.result.class_count(), expected);
    Ok(())
}

#[rstest]
fn count_rejects_oversized_vertex_counts() {
    let cli = Cli {
        command: Command::Count(CountCommand {
            vertices: 20,
            strategy: StrategyArg::Auto,
        }),
    };
    let err = run_cli(cli).expect_err("vertex counts past the mask bound must fail");
    assert!(matches!(
        err,
        CliError::Core(CensusError::VertexCountTooLarge { got: 20, .. })
    ));
}

#[rstest]
fn render_summary_emits_count_then_elapsed() -> TestResult {
    let cli = Cli {
        command: Command::Count(CountCommand {
            vertices: 4,
            strategy: StrategyArg::Sequential,
        }),
    };
    let mut summary = run_cli(cli)?;
    summary.elapsed = Duration::from_millis(1234);

    let mut buffer = Cursor::new(Vec::new());
    render_summary(&summary, &mut buffer)?;
    let rendered = String::from_utf8(buffer.into_inner())?;
    assert_eq!(
        rendered,
        "isomorphism classes on 4 vertices: 11\nelapsed: 1234 ms\n"
    );
    Ok(())
}
