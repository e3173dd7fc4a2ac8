//! CLI argument definitions using clap.
//!
//! Running without a subcommand scans the configured file list. The only
//! subcommand is `init`, which writes a default configuration file.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None, args_conflicts_with_subcommands = true)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub check: CheckArgs,
}

impl Arguments {
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Init) => false,
            None => self.check.verbose,
        }
    }
}

/// Arguments for the default scan.
#[derive(Debug, Clone, Default, Args)]
pub struct CheckArgs {
    /// Files to scan (overrides the configured file list).
    ///
    /// A path spelled like a subcommand (e.g. a file named `init`) must follow
    /// `--`: `i18n-audit -- init`.
    pub paths: Vec<PathBuf>,

    /// Config file to use instead of searching for .i18nauditrc.json
    #[arg(short, long, env = "I18N_AUDIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// JSON file with extra literal-to-key mappings
    #[arg(long)]
    pub mappings: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initialize a new .i18nauditrc.json configuration file
    Init,
}
