use std::path::PathBuf;

/// A candidate with a known replacement expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// Quoted literal as it appears in the source.
    pub candidate: String,
    pub replacement: String,
}

/// What one scanned file looks like from an i18n point of view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    /// Whether the capability marker occurs anywhere in the file.
    pub has_marker: bool,
    /// Number of distinct candidates after filtering.
    pub candidate_count: usize,
    /// Mapped candidates among the preview subset.
    pub suggestions: Vec<Suggestion>,
}

impl FileReport {
    /// Import and hook are reported together; one cannot be missing without the other.
    pub fn missing_wiring(&self) -> bool {
        !self.has_marker
    }
}

/// Result of scanning an ordered list of paths.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanOutcome {
    /// One report per existing file, in input order.
    pub reports: Vec<FileReport>,
    /// Paths that did not resolve to a file.
    pub skipped: Vec<PathBuf>,
}

impl ScanOutcome {
    pub fn files_missing_wiring(&self) -> usize {
        self.reports.iter().filter(|r| r.missing_wiring()).count()
    }

    pub fn total_candidates(&self) -> usize {
        self.reports.iter().map(|r| r.candidate_count).sum()
    }
}
