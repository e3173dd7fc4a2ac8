//! Quoted-literal extraction and the UI-string heuristic.

use std::{collections::HashSet, sync::LazyLock};

use regex::Regex;

/// Double-quoted span. A backslash escapes the next character (newline excluded),
/// so `\"` does not terminate the literal.
static QUOTED_LITERAL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"\\]*(?:\\.[^"\\]*)*)""#).unwrap());

/// Filter applied to every raw literal before deduplication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFilter {
    /// Interiors with this many characters or fewer are dropped.
    pub min_length: usize,
    /// Interiors starting with any of these are dropped.
    pub excluded_prefixes: Vec<char>,
}

impl Default for CandidateFilter {
    fn default() -> Self {
        Self {
            min_length: 2,
            excluded_prefixes: vec!['/', '#'],
        }
    }
}

impl CandidateFilter {
    pub fn accepts(&self, interior: &str) -> bool {
        if interior.chars().count() <= self.min_length {
            return false;
        }
        match interior.chars().next() {
            Some(first) => !self.excluded_prefixes.contains(&first),
            None => false,
        }
    }
}

/// Interiors of every non-overlapping double-quoted literal, escapes kept verbatim.
pub fn extract_literals(content: &str) -> impl Iterator<Item = &str> {
    QUOTED_LITERAL_REGEX
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Distinct candidate strings, re-wrapped in double quotes, in first-seen order.
pub fn find_candidates(content: &str, filter: &CandidateFilter) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    extract_literals(content)
        .filter(|interior| filter.accepts(interior))
        .filter(|interior| seen.insert(*interior))
        .map(|interior| format!("\"{}\"", interior))
        .collect()
}
