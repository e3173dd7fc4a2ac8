//! Command-line layer: argument parsing, command dispatch, and printing.

use anyhow::Result;

mod args;
pub mod commands;
mod exit_status;
pub mod report;
mod run;

pub use args::{Arguments, CheckArgs, Command};
pub use exit_status::ExitStatus;

/// Run the parsed command and print its output.
pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();
    run::run(args, verbose)
}
