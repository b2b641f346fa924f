//! Command-line interface for computing spanning tree reports.
//!
//! The `run` command reads an edge list, computes the minimum and
//! second-smallest spanning trees, and writes the report to a file or stdout.

mod commands;
mod edge_list;
mod report;

pub use commands::{Cli, CliError, Command, ReportDestination, RunCommand, RunSummary, run_cli};
pub use edge_list::{ParseError, parse_edge_list};
pub use report::{SpanningReport, render_report};

#[cfg(test)]
mod test_helpers;
