//! Report formatting and printing utilities.
//!
//! Separate from the scanner so the library can be used without printing.
//! All writers take a generic `Write` so output can be captured in tests.

use std::{
    io::{self, Write},
    path::PathBuf,
};

use colored::Colorize;

use super::commands::CheckResult;
use crate::config::Config;
use crate::mapping::MappingTable;
use crate::scan::{FileReport, ScanOutcome};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2705}"; // ✅

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{274c}"; // ❌

const GLOBE_MARK: &str = "\u{1f30d}"; // 🌍
const FILE_MARK: &str = "\u{1f4c4}"; // 📄
const ARROW: &str = "\u{2192}"; // →

const BANNER_WIDTH: usize = 60;

/// Text that varies with configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLabels {
    pub app_name: String,
    pub marker: String,
    pub import_statement: String,
    pub hook_statement: String,
    pub guide_file: String,
}

impl ReportLabels {
    pub fn from_config(config: &Config) -> Self {
        Self {
            app_name: config.app_name.clone(),
            marker: config.marker.clone(),
            import_statement: config.import_statement.clone(),
            hook_statement: config.hook_statement.clone(),
            guide_file: config.guide_file.clone(),
        }
    }
}

impl Default for ReportLabels {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Print the verbose extras to stderr: skipped paths and a one-line summary.
pub fn print_details(result: &CheckResult) {
    let mut stderr = io::stderr().lock();
    print_skipped_to(&result.outcome.skipped, &mut stderr);
    print_summary_to(&result.outcome, &result.mappings, &mut stderr);
}

/// Write the banner that opens every report.
pub fn print_header_to<W: Write>(labels: &ReportLabels, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{}",
        format!("{} i18n Checker - {}", GLOBE_MARK, labels.app_name).bold()
    );
    let _ = writeln!(writer, "{}", "=".repeat(BANNER_WIDTH));
}

/// Write the closing lines after the last file section.
pub fn print_footer_to<W: Write>(labels: &ReportLabels, writer: &mut W) {
    let _ = writeln!(
        writer,
        "\n{} {}",
        SUCCESS_MARK,
        "Check complete!".green().bold()
    );
    let _ = writeln!(
        writer,
        "\nSee {} for full translation guide",
        labels.guide_file.cyan()
    );
}

/// Write a single file's section.
pub fn print_file_report<W: Write>(report: &FileReport, labels: &ReportLabels, writer: &mut W) {
    let _ = writeln!(
        writer,
        "\n{} {}",
        FILE_MARK,
        report.path.display().to_string().bold()
    );

    if report.missing_wiring() {
        for statement in [&labels.import_statement, &labels.hook_statement] {
            let _ = writeln!(
                writer,
                "  {} {} {}",
                FAILURE_MARK,
                "Missing:".red(),
                statement
            );
        }
    } else {
        let _ = writeln!(
            writer,
            "  {} {}",
            SUCCESS_MARK,
            format!("{} imported", labels.marker).green()
        );
    }

    if report.candidate_count > 0 {
        let _ = writeln!(
            writer,
            "  Found {} potential hardcoded strings",
            report.candidate_count.to_string().yellow()
        );
        for suggestion in &report.suggestions {
            let _ = writeln!(
                writer,
                "    {} {} {}",
                suggestion.candidate,
                ARROW,
                suggestion.replacement.cyan()
            );
        }
    }
}

/// Warn about paths that were skipped because they do not exist.
pub fn print_skipped_to<W: Write>(skipped: &[PathBuf], writer: &mut W) {
    for path in skipped {
        let _ = writeln!(
            writer,
            "{} File not found, skipped: {}",
            "warning:".bold().yellow(),
            path.display()
        );
    }
}

/// Print scanned/skipped/missing counts and the size of the mapping table.
pub fn print_summary_to<W: Write>(outcome: &ScanOutcome, mappings: &MappingTable, writer: &mut W) {
    let scanned = outcome.reports.len();
    let _ = writeln!(
        writer,
        "{} {} {} scanned, {} skipped, {} missing i18n wiring, {} candidate strings",
        "summary:".bold(),
        scanned,
        if scanned == 1 { "file" } else { "files" },
        outcome.skipped.len(),
        outcome.files_missing_wiring(),
        outcome.total_candidates()
    );
    if mappings.is_empty() {
        let _ = writeln!(
            writer,
            "{} no mappings loaded, suggestions are disabled",
            "warning:".bold().yellow()
        );
    } else {
        let _ = writeln!(writer, "{} {} mappings loaded", "summary:".bold(), mappings.len());
    }
}
