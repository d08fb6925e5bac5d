//! Unit tests for CLI argument handling and command execution.

use clap::Parser;
use rstest::{fixture, rstest};

use benchset_core::{Policy, SequenceError};

use super::{Cli, CliError, Command, ElementType, GenerateCommand, PolicyArg, render_summary, run_cli};

#[fixture]
fn generate_command() -> GenerateCommand {
    GenerateCommand {
        length: 16,
        policy: PolicyArg::Random,
        element: ElementType::I64,
        lower: 0,
        upper: 1000,
        seed: Some(7),
    }
}

fn run(command: GenerateCommand) -> Result<super::GenerationSummary, CliError> {
    run_cli(Cli {
        command: Command::Generate(command),
    })
}

#[rstest]
fn generate_produces_the_requested_length(generate_command: GenerateCommand) {
    let summary = run(generate_command).expect("generation succeeds");

    assert_eq!(summary.length, 16);
    assert_eq!(summary.policy, Policy::Random);
    assert_eq!(summary.values.split_whitespace().count(), 16);
}

#[rstest]
fn seeded_runs_are_reproducible(generate_command: GenerateCommand) {
    let left = run(generate_command.clone()).expect("first run succeeds");
    let right = run(generate_command).expect("second run succeeds");

    assert_eq!(left.values, right.values);
}

#[rstest]
fn sorted_policy_output_is_ordered(generate_command: GenerateCommand) {
    let summary = run(GenerateCommand {
        policy: PolicyArg::Sorted,
        ..generate_command
    })
    .expect("generation succeeds");

    let values: Vec<i64> = summary
        .values
        .split_whitespace()
        .map(|token| token.parse().expect("token is an integer"))
        .collect();
    assert!(values.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[rstest]
fn narrow_element_rejects_unrepresentable_bounds(generate_command: GenerateCommand) {
    let err = run(GenerateCommand {
        element: ElementType::U8,
        ..generate_command
    })
    .expect_err("upper bound 1000 does not fit u8");

    assert!(matches!(
        err,
        CliError::BoundOutOfRange {
            value: 1000,
            element: "u8"
        }
    ));
}

#[rstest]
fn inverted_bounds_surface_the_core_error(generate_command: GenerateCommand) {
    let err = run(GenerateCommand {
        lower: 10,
        upper: 5,
        ..generate_command
    })
    .expect_err("inverted range must fail");

    assert!(matches!(
        err,
        CliError::Core(SequenceError::InvalidBounds { .. })
    ));
}

#[rstest]
fn narrow_element_accepts_representable_bounds(generate_command: GenerateCommand) {
    let summary = run(GenerateCommand {
        element: ElementType::U8,
        upper: 255,
        ..generate_command
    })
    .expect("u8 generation succeeds with a representable range");

    assert_eq!(summary.values.split_whitespace().count(), 16);
}

#[rstest]
fn arguments_parse_into_the_generate_command() {
    let cli = Cli::try_parse_from([
        "benchset",
        "generate",
        "32",
        "--policy",
        "few-unique",
        "--element",
        "u32",
        "--seed",
        "99",
    ])
    .expect("arguments are valid");

    let Command::Generate(command) = cli.command;
    assert_eq!(command.length, 32);
    assert_eq!(command.policy, PolicyArg::FewUnique);
    assert_eq!(command.element, ElementType::U32);
    assert_eq!(command.seed, Some(99));
    assert_eq!(command.lower, 0);
    assert_eq!(command.upper, 1000);
}

#[rstest]
fn render_appends_a_trailing_newline(generate_command: GenerateCommand) {
    let summary = run(generate_command).expect("generation succeeds");

    let mut buffer = Vec::new();
    render_summary(&summary, &mut buffer).expect("writing to memory succeeds");
    let rendered = String::from_utf8(buffer).expect("output is UTF-8");
    assert_eq!(rendered, format!("{}\n", summary.values));
}
