//! Command implementations and argument parsing for the `spanning` CLI.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use spanning_core::{Graph, GraphError};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::edge_list::{ParseError, parse_edge_list};
use super::report::{SpanningReport, render_report};

const DEFAULT_OUTPUT: &str = "output_spanning.txt";

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "spanning",
    about = "Compute the smallest and second-smallest spanning trees of a graph."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Read an edge list and report both spanning trees.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Edge list: a `<vertices> <edges>` header, then one `<u> <v> <w>` per line.
    pub input: PathBuf,

    /// File receiving the report.
    #[arg(long, short, default_value = DEFAULT_OUTPUT, conflicts_with = "stdout")]
    pub output: PathBuf,

    /// Print the report to stdout instead of writing a file.
    #[arg(long)]
    pub stdout: bool,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Opening, reading, or writing a file failed.
    #[error("failed to access `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The edge list was malformed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The graph was invalid or disconnected.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Where the report of a successful run should go.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ReportDestination {
    /// The report has been written to this file.
    File(PathBuf),
    /// The caller is responsible for printing the report to stdout.
    Stdout,
}

/// Outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Computed spanning trees.
    pub report: SpanningReport,
    /// Where the report belongs.
    pub destination: ReportDestination,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when reading, parsing, computing, or writing fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use spanning_cli::cli::{Cli, Command, ReportDestination, RunCommand, run_cli};
/// # use tempfile::TempDir;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let dir = TempDir::new()?;
/// let input = dir.path().join("graph.txt");
/// std::fs::write(&input, "3 3\n1 2 1\n2 3 2\n1 3 3\n")?;
/// let output = dir.path().join("report.txt");
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         input,
///         output: output.clone(),
///         stdout: false,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.report.smallest.weight(), 3);
/// assert_eq!(summary.report.second_weight(), 4);
/// assert_eq!(summary.destination, ReportDestination::File(output));
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<RunSummary, CliError> {
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
    fields(
        input = %command.input.display(),
        smallest_weight = field::Empty,
        second_weight = field::Empty,
    ),
)]
pub(super) fn run_command(command: RunCommand) -> Result<RunSummary, CliError> {
    let mut graph = read_graph(&command.input)?;
    let report = SpanningReport {
        smallest: graph.smallest_mst()?,
        second: graph.second_smallest_mst()?,
    };

    let span = Span::current();
    span.record("smallest_weight", report.smallest.weight());
    span.record("second_weight", report.second_weight());

    let destination = if command.stdout {
        ReportDestination::Stdout
    } else {
        write_report(&command.output, &report)?;
        ReportDestination::File(command.output)
    };

    info!(
        vertices = graph.number_of_vertices(),
        edges = graph.number_of_edges(),
        smallest_weight = report.smallest.weight(),
        second_weight = report.second_weight(),
        "spanning trees computed"
    );
    Ok(RunSummary {
        report,
        destination,
    })
}

#[instrument(
    name = "cli.read_graph",
    err,
    fields(path = %path.display(), vertices = field::Empty, edges = field::Empty),
)]
pub(super) fn read_graph(path: &Path) -> Result<Graph, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let (info, edges) = parse_edge_list(BufReader::new(file))?;

    let span = Span::current();
    span.record("vertices", info.number_of_vertices);
    span.record("edges", info.number_of_edges);
    Ok(Graph::new(info, edges)?)
}

#[instrument(name = "cli.write_report", err, skip(report), fields(path = %path.display()))]
pub(super) fn write_report(path: &Path, report: &SpanningReport) -> Result<(), CliError> {
    let io_error = |source| CliError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    render_report(report, &mut writer).map_err(io_error)?;
    writer.flush().map_err(io_error)
}
