//! Command-line interface orchestration for benchset.
//!
//! Offers a single `generate` command that builds a sequence from the
//! requested policy, element type, and bounds, and prints it as one line of
//! space-separated values on stdout.

mod commands;

pub use commands::{
    Cli, CliError, Command, ElementType, GenerateCommand, GenerationSummary, PolicyArg,
    render_summary, run_cli,
};

#[cfg(test)]
mod tests;
