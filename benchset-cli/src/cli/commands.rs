//! Command implementations and argument parsing for the benchset CLI.

use std::fmt;
use std::io::{self, Write};

use benchset_core::{Bounds, Element, Policy, Sequence, SequenceError};
use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

const DEFAULT_LOWER: i128 = 0;
const DEFAULT_UPPER: i128 = 1000;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "benchset", about = "Generate integral benchmark input sequences.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate a sequence and print it as space-separated values.
    Generate(GenerateCommand),
}

/// Options accepted by the `generate` command.
#[derive(Debug, Args, Clone)]
pub struct GenerateCommand {
    /// Number of elements to generate.
    pub length: usize,

    /// Arrangement of the generated values.
    #[arg(long, value_enum, default_value_t = PolicyArg::Random)]
    pub policy: PolicyArg,

    /// Element type of the generated values.
    #[arg(long, value_enum, default_value_t = ElementType::I64)]
    pub element: ElementType,

    /// Inclusive lower bound of the draw range.
    #[arg(long, default_value_t = DEFAULT_LOWER)]
    pub lower: i128,

    /// Inclusive upper bound of the draw range.
    #[arg(long, default_value_t = DEFAULT_UPPER)]
    pub upper: i128,

    /// RNG seed; omit for a fresh seed from entropy.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Generation policies selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Independent uniform draws in draw order.
    Random,
    /// Draws sorted ascending.
    Sorted,
    /// Draws sorted descending.
    ReverseSorted,
    /// Sorted ascending, then lightly perturbed.
    NearlySorted,
    /// At most `floor(sqrt(N))` distinct values.
    FewUnique,
}

impl From<PolicyArg> for Policy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Random => Self::Random,
            PolicyArg::Sorted => Self::Sorted,
            PolicyArg::ReverseSorted => Self::ReverseSorted,
            PolicyArg::NearlySorted => Self::NearlySorted,
            PolicyArg::FewUnique => Self::FewUnique,
        }
    }
}

impl fmt::Display for PolicyArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Policy::from(*self).as_str())
    }
}

/// Element types selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ElementType {
    /// Signed 8-bit integers.
    I8,
    /// Signed 16-bit integers.
    I16,
    /// Signed 32-bit integers.
    I32,
    /// Signed 64-bit integers.
    I64,
    /// Unsigned 8-bit integers.
    U8,
    /// Unsigned 16-bit integers.
    U16,
    /// Unsigned 32-bit integers.
    U32,
    /// Unsigned 64-bit integers.
    U64,
}

impl ElementType {
    /// Returns the primitive type name for logs and diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// A bound literal does not fit the selected element type.
    #[error("bound {value} cannot be represented as {element}")]
    BoundOutOfRange {
        /// Literal supplied on the command line.
        value: i128,
        /// Name of the selected element type.
        element: &'static str,
    },
    /// Sequence construction failed.
    #[error(transparent)]
    Core(#[from] SequenceError),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct GenerationSummary {
    /// Policy the sequence was generated under.
    pub policy: Policy,
    /// Number of generated elements.
    pub length: usize,
    /// The generated values rendered as a space-separated line.
    pub values: String,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when argument conversion or generation fails.
///
/// # Examples
/// ```
/// use benchset_cli::cli::{Cli, Command, ElementType, GenerateCommand, PolicyArg, run_cli};
///
/// let cli = Cli {
///     command: Command::Generate(GenerateCommand {
///         length: 4,
///         policy: PolicyArg::Sorted,
///         element: ElementType::I32,
///         lower: 0,
///         upper: 9,
///         seed: Some(11),
///     }),
/// };
/// let summary = run_cli(cli).expect("generation succeeds");
/// assert_eq!(summary.length, 4);
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<GenerationSummary, CliError> {
    match cli.command {
        Command::Generate(generate) => {
            Span::current().record("command", field::display("generate"));
            run_generate(generate)
        }
    }
}

#[instrument(
    name = "cli.generate",
    err,
    skip(command),
    fields(
        length = field::Empty,
        policy = field::Empty,
        element = field::Empty,
        seed = field::Empty,
    ),
)]
pub(super) fn run_generate(command: GenerateCommand) -> Result<GenerationSummary, CliError> {
    let span = Span::current();
    span.record("length", field::display(command.length));
    span.record("policy", field::display(Policy::from(command.policy)));
    span.record("element", field::display(command.element.as_str()));
    if let Some(seed) = command.seed {
        span.record("seed", field::display(seed));
    }

    match command.element {
        ElementType::I8 => generate_with::<i8>(&command),
        ElementType::I16 => generate_with::<i16>(&command),
        ElementType::I32 => generate_with::<i32>(&command),
        ElementType::I64 => generate_with::<i64>(&command),
        ElementType::U8 => generate_with::<u8>(&command),
        ElementType::U16 => generate_with::<u16>(&command),
        ElementType::U32 => generate_with::<u32>(&command),
        ElementType::U64 => generate_with::<u64>(&command),
    }
}

fn generate_with<T: Element>(command: &GenerateCommand) -> Result<GenerationSummary, CliError> {
    let policy = Policy::from(command.policy);
    let lower = convert_bound::<T>(command.lower)?;
    let upper = convert_bound::<T>(command.upper)?;
    let bounds = Bounds::new(lower, upper)?;

    let mut builder = Sequence::<T>::builder(command.length)
        .with_policy(policy)
        .with_bounds(bounds);
    if let Some(seed) = command.seed {
        builder = builder.with_seed(seed);
    }
    let sequence = builder.build()?;

    info!(
        policy = %policy,
        length = sequence.len(),
        bounds = %sequence.bounds(),
        "sequence generated"
    );
    Ok(GenerationSummary {
        policy,
        length: sequence.len(),
        values: sequence.to_string(),
    })
}

fn convert_bound<T: Element>(value: i128) -> Result<T, CliError> {
    T::try_from(value).map_err(|_| CliError::BoundOutOfRange {
        value,
        element: T::NAME,
    })
}

/// Renders the generated values to `writer` as one newline-terminated line.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// use std::io::Cursor;
/// use benchset_cli::cli::{GenerationSummary, render_summary};
/// use benchset_core::Policy;
///
/// let summary = GenerationSummary {
///     policy: Policy::Random,
///     length: 3,
///     values: "4 8 15".to_owned(),
/// };
/// let mut buffer = Cursor::new(Vec::new());
/// render_summary(&summary, &mut buffer).expect("writing to memory succeeds");
/// assert_eq!(buffer.into_inner(), b"4 8 15\n");
/// ```
pub fn render_summary(summary: &GenerationSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "{}", summary.values)
}
