use std::io;

use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{check::check, init::init},
    exit_status::ExitStatus,
    report,
};

/// Dispatch to the requested command. Without a subcommand the scan runs.
pub fn run(args: Arguments, verbose: bool) -> Result<ExitStatus> {
    match args.command {
        Some(Command::Init) => init(),
        None => {
            let result = check(&args.check, &mut io::stdout().lock())?;
            if verbose {
                report::print_details(&result);
            }
            Ok(ExitStatus::Success)
        }
    }
}
