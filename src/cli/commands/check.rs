use std::{env, io::Write, path::PathBuf};

use anyhow::{Context, Result};

use super::super::args::CheckArgs;
use super::super::report::{self, ReportLabels};
use crate::{
    config::{Config, load_config, read_config},
    mapping::MappingTable,
    scan::{ScanContext, ScanOutcome, scan_files_with},
};

/// What is left after the report has been written.
#[derive(Debug)]
pub struct CheckResult {
    pub labels: ReportLabels,
    pub outcome: ScanOutcome,
    pub mappings: MappingTable,
}

/// Run the scan, writing each file's section to `writer` as soon as the file
/// has been read. If a later file fails, the sections already written stay.
pub fn check<W: Write>(args: &CheckArgs, writer: &mut W) -> Result<CheckResult> {
    let config = resolve_config(args)?;

    let mut ctx = ScanContext::from_config(&config, MappingTable::builtin());
    if let Some(path) = &args.mappings {
        ctx.mappings = ctx.mappings.with_entries(MappingTable::load_entries(path)?);
    }

    let paths: Vec<PathBuf> = if args.paths.is_empty() {
        config.file_paths()
    } else {
        args.paths.clone()
    };

    let labels = ReportLabels::from_config(&config);
    report::print_header_to(&labels, writer);
    let outcome = scan_files_with(&paths, &ctx, |file| {
        report::print_file_report(file, &labels, writer)
    })?;
    report::print_footer_to(&labels, writer);
    let _ = writer.flush();

    Ok(CheckResult {
        labels,
        outcome,
        mappings: ctx.mappings,
    })
}

fn resolve_config(args: &CheckArgs) -> Result<Config> {
    match &args.config {
        Some(path) => read_config(path),
        None => {
            let cwd = env::current_dir().context("Failed to get current directory")?;
            Ok(load_config(&cwd)?.config)
        }
    }
}
