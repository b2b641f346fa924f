//! Entry point for the `spanning` binary.
//!
//! Parses arguments, runs the requested command, and prints the report when
//! stdout was chosen as its destination. Failures are logged with their error
//! code before exiting non-zero.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use spanning_cli::{
    cli::{Cli, CliError, ReportDestination, render_report, run_cli},
    logging::{self, LoggingError},
};
use tracing::{error, field, info};

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let summary = run_cli(cli).context("failed to execute command")?;
    match summary.destination {
        ReportDestination::File(path) => {
            info!(path = %path.display(), "report written");
        }
        ReportDestination::Stdout => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            render_report(&summary.report, &mut writer).context("failed to render report")?;
            writer.flush().context("failed to flush output")?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let code = err
            .downcast_ref::<CliError>()
            .and_then(|cli_error| match cli_error {
                CliError::Graph(graph) => Some(graph.code()),
                _ => None,
            })
            .map(|code| field::display(code.as_str()));
        error!(error = %format!("{err:#}"), code, "command execution failed");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialized"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
