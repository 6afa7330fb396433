//! Command implementations and argument parsing for the voraz CLI.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing::{Span, field, info, instrument};
use voraz_core::{SelectionMode, TourDispatcher, TourError, TourResult, compute_greedy_tour};
use voraz_providers_matrix::{Delimiter, DistanceMatrix, DistanceMatrixError};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "voraz",
    about = "Compute greedy shortest and longest tours over a distance matrix."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Load a distance matrix and compute its tours.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Path to a delimited distance matrix with labelled rows and columns.
    pub path: PathBuf,

    /// Which tour(s) to compute.
    #[arg(long, value_enum, default_value_t = ModeArg::Both)]
    pub mode: ModeArg,

    /// Output format written to stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Cell separator used by the matrix.
    #[arg(long, value_enum, default_value_t = DelimiterArg::Auto)]
    pub delimiter: DelimiterArg,

    /// Override name for the data source (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,
}

/// Tour selection requested on the command line.
#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum ModeArg {
    /// Shortest-leaning tour only.
    Min,
    /// Longest-leaning tour only.
    Max,
    /// Both tours, computed concurrently.
    Both,
}

impl ModeArg {
    fn single(self) -> Option<SelectionMode> {
        match self {
            Self::Min => Some(SelectionMode::Min),
            Self::Max => Some(SelectionMode::Max),
            Self::Both => None,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Min => "min",
            Self::Max => "max",
            Self::Both => "both",
        }
    }
}

/// Rendering applied by [`crate::cli::render_summary`].
#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable listing.
    Text,
    /// A single JSON document.
    Json,
}

/// Matrix cell separator.
#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum DelimiterArg {
    /// Detect from the header row.
    Auto,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// Horizontal tab.
    Tab,
}

impl From<DelimiterArg> for Delimiter {
    fn from(value: DelimiterArg) -> Self {
        match value {
            DelimiterArg::Auto => Self::Auto,
            DelimiterArg::Comma => Self::Comma,
            DelimiterArg::Semicolon => Self::Semicolon,
            DelimiterArg::Tab => Self::Tab,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Loading the distance matrix failed.
    #[error("failed to load `{path}`: {source}")]
    Matrix {
        /// Path of the matrix file.
        path: PathBuf,
        /// Underlying provider error.
        #[source]
        source: DistanceMatrixError,
    },
    /// Tour computation or dispatch failed.
    #[error(transparent)]
    Core(#[from] TourError),
    /// A dispatched worker finished without publishing its tour.
    #[error("no {mode} tour was produced")]
    MissingTour {
        /// Mode whose result never arrived.
        mode: SelectionMode,
    },
}

/// Outcome of a `run` command, ready for rendering.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name of the matrix the tours were computed over.
    pub data_source: String,
    /// Location labels indexed by node id.
    pub labels: Vec<String>,
    /// Requested output format.
    pub format: OutputFormat,
    /// Computed tours, `MIN` before `MAX`.
    pub tours: Vec<TourResult>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading the matrix or computing a tour fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use voraz_cli::cli::{Cli, Command, DelimiterArg, ModeArg, OutputFormat, RunCommand, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "from,A,B,C\nA,,1,2\nB,,,3\n")?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         path: file.path().to_path_buf(),
///         mode: ModeArg::Both,
///         format: OutputFormat::Text,
///         delimiter: DelimiterArg::Auto,
///         name: None,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.tours.len(), 2);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(path = field::Empty, mode = field::Empty, override_name = field::Empty),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let RunCommand {
        path,
        mode,
        format,
        delimiter,
        name,
    } = command;
    let span = Span::current();
    span.record("path", field::display(path.display()));
    span.record("mode", field::display(mode.as_str()));
    span.record(
        "override_name",
        field::display(name.as_deref().unwrap_or("<derived>")),
    );

    let chosen_name = derive_data_source_name(&path, name.as_deref());
    let matrix = load_matrix(&path, chosen_name, delimiter.into())?;
    matrix.request(SelectionMode::Min).validate()?;

    let tours = match mode.single() {
        Some(selected) => vec![compute_greedy_tour(
            matrix.edges(),
            matrix.node_count(),
            selected,
        )],
        None => dispatch_both(&matrix)?,
    };

    info!(
        data_source = matrix.name(),
        locations = matrix.node_count(),
        tours = tours.len(),
        "command completed"
    );
    Ok(ExecutionSummary {
        data_source: matrix.name().to_owned(),
        labels: matrix.labels().to_vec(),
        format,
        tours,
    })
}

#[instrument(
    name = "cli.load_matrix",
    err,
    skip(path, name, delimiter),
    fields(path = field::Empty, edges = field::Empty),
)]
pub(super) fn load_matrix(
    path: &Path,
    name: String,
    delimiter: Delimiter,
) -> Result<DistanceMatrix, CliError> {
    let span = Span::current();
    span.record("path", field::display(path.display()));
    let matrix =
        DistanceMatrix::try_from_path(name, path, delimiter).map_err(|source| CliError::Matrix {
            path: path.to_path_buf(),
            source,
        })?;
    span.record("edges", matrix.edges().len());
    Ok(matrix)
}

/// Runs both modes on the dispatcher's worker threads and gathers one tour
/// per mode, whichever finishes first.
#[instrument(name = "cli.dispatch", err, skip(matrix))]
pub(super) fn dispatch_both(matrix: &DistanceMatrix) -> Result<Vec<TourResult>, CliError> {
    let (dispatcher, updates) = TourDispatcher::new();
    let submission = dispatcher.submit(matrix.edges().to_vec(), matrix.node_count())?;
    submission.join()?;

    let mut received = HashMap::new();
    for update in updates.try_iter() {
        info!(
            mode = %update.mode(),
            generation = update.generation(),
            cost = update.result().cost(),
            complete = update.result().is_complete(),
            "tour received"
        );
        received.insert(update.mode(), update.result().clone());
    }

    SelectionMode::ALL
        .into_iter()
        .map(|mode| {
            received
                .remove(&mode)
                .ok_or(CliError::MissingTour { mode })
        })
        .collect()
}

pub(super) fn derive_data_source_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| "data_source".to_owned())
}
