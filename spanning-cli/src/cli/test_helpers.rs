//! Small helpers shared across CLI tests.

use std::fs;
use std::io;
use std::path::PathBuf;

use tempfile::TempDir;

use super::{CliError, RunCommand};
use super::commands::run_command;

pub(super) const FOUR_CYCLE: &str = "4 5\n1 2 1\n2 3 2\n3 4 3\n1 4 4\n1 3 5\n";

pub(super) const FOUR_CYCLE_REPORT: &str = "\
Smallest Spanning Tree Weight = 6
#List of edges in the smallest spanning tree:
1 2 1
2 3 2
3 4 3
Second-smallest Spanning Tree Weight = 7
#List of edges in the second smallest spanning tree:
1 2 1
1 4 4
2 3 2
";

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn write_input(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    fs::write(&path, contents)?;
    Ok(path)
}

/// Builds a `run` command writing its report into `dir`.
pub(super) fn command_for(dir: &TempDir, input: PathBuf) -> RunCommand {
    RunCommand {
        input,
        output: dir.path().join("report.txt"),
        stdout: false,
    }
}

pub(super) fn run_command_expecting_error(cmd: RunCommand, panic_msg: &str) -> CliError {
    match run_command(cmd) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
