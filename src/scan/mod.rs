//! Per-file scanning pipeline.
//!
//! Every path goes through the same steps once: existence check, marker
//! detection, literal extraction, filtering, deduplication, and preview lookup.
//! Files are processed sequentially in the order given.

use std::{fs, path::Path};

use anyhow::{Context, Result};

use crate::{config::Config, mapping::MappingTable};

pub mod extract;
mod types;

pub use extract::{CandidateFilter, extract_literals, find_candidates};
pub use types::*;

/// Everything a scan needs besides the file list. Fixed for the whole run.
#[derive(Debug, Clone)]
pub struct ScanContext {
    pub marker: String,
    pub filter: CandidateFilter,
    pub preview_limit: usize,
    pub mappings: MappingTable,
}

impl Default for ScanContext {
    fn default() -> Self {
        Self::from_config(&Config::default(), MappingTable::builtin())
    }
}

impl ScanContext {
    /// Build from config, merging its extra mappings over `mappings`.
    pub fn from_config(config: &Config, mappings: MappingTable) -> Self {
        Self {
            marker: config.marker.clone(),
            filter: CandidateFilter {
                min_length: config.min_length,
                excluded_prefixes: config.excluded_prefixes.clone(),
            },
            preview_limit: config.preview_limit,
            mappings: mappings.with_entries(config.mappings.clone()),
        }
    }
}

/// Scan `paths` in order. Missing files are recorded as skipped; any other
/// read failure aborts the scan.
pub fn scan_files<P: AsRef<Path>>(paths: &[P], ctx: &ScanContext) -> Result<ScanOutcome> {
    scan_files_with(paths, ctx, |_| {})
}

/// Like [`scan_files`], but hands each report to `on_report` as soon as it is
/// built, so reports for earlier files are delivered even if a later read fails.
pub fn scan_files_with<P, F>(paths: &[P], ctx: &ScanContext, mut on_report: F) -> Result<ScanOutcome>
where
    P: AsRef<Path>,
    F: FnMut(&FileReport),
{
    let mut outcome = ScanOutcome::default();

    for path in paths {
        let path = path.as_ref();
        match scan_file(path, ctx)? {
            Some(report) => {
                on_report(&report);
                outcome.reports.push(report);
            }
            None => outcome.skipped.push(path.to_path_buf()),
        }
    }

    Ok(outcome)
}

/// Scan a single file. Returns `Ok(None)` when `path` is not an existing file.
pub fn scan_file(path: &Path, ctx: &ScanContext) -> Result<Option<FileReport>> {
    if !path.is_file() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    Ok(Some(analyze_content(path, &content, ctx)))
}

/// Analyze already-loaded source text.
pub fn analyze_content(path: &Path, content: &str, ctx: &ScanContext) -> FileReport {
    let has_marker = content.contains(ctx.marker.as_str());
    let candidates = find_candidates(content, &ctx.filter);

    let suggestions = candidates
        .iter()
        .take(ctx.preview_limit)
        .filter_map(|candidate| {
            ctx.mappings.lookup(candidate).map(|replacement| Suggestion {
                candidate: candidate.clone(),
                replacement: replacement.to_string(),
            })
        })
        .collect();

    FileReport {
        path: path.to_path_buf(),
        has_marker,
        candidate_count: candidates.len(),
        suggestions,
    }
}
