use std::path::Path;

use globset::{GlobBuilder, GlobMatcher};
use rayon::prelude::*;
use walkdir::WalkDir;

use crate::error::{AssetGuardError, Result};
use crate::path_utils::normalize_separators;
use crate::schema::FileRule;

/// The files one rule's pattern resolved to in a single run.
///
/// `files` are relative to the base directory, forward-slash-normalized,
/// and sorted. One `MatchResult` per rule, in rule order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub pattern: String,
    pub files: Vec<String>,
    pub required: bool,
}

impl MatchResult {
    #[must_use]
    pub fn new(pattern: impl Into<String>, files: Vec<String>, required: bool) -> Self {
        Self {
            pattern: pattern.into(),
            files,
            required,
        }
    }
}

/// Expand each rule's glob pattern against `base_dir`.
///
/// Matching is case-sensitive with standard glob semantics (`*` does not
/// cross a separator, `**` does) and includes hidden (dot-prefixed)
/// entries, since asset pipelines frequently hide generated files behind a
/// dot prefix. Rules resolve independently on the rayon pool; the output
/// preserves rule order.
///
/// A missing or unreadable `base_dir` is not an error: every rule then
/// resolves to an empty match set and the checker decides severity.
///
/// # Errors
/// Returns an error if any rule's glob pattern is invalid. Patterns are
/// compiled up front so a bad pattern fails before any filesystem work.
pub fn resolve(base_dir: &Path, rules: &[FileRule]) -> Result<Vec<MatchResult>> {
    let matchers = rules
        .iter()
        .map(|rule| compile(&rule.pattern))
        .collect::<Result<Vec<_>>>()?;

    Ok(rules
        .par_iter()
        .zip(matchers)
        .map(|(rule, matcher)| {
            MatchResult::new(&rule.pattern, match_files(base_dir, &matcher), rule.required)
        })
        .collect())
}

fn compile(pattern: &str) -> Result<GlobMatcher> {
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map(|glob| glob.compile_matcher())
        .map_err(|e| AssetGuardError::InvalidPattern {
            pattern: pattern.to_string(),
            source: e,
        })
}

fn match_files(base_dir: &Path, matcher: &GlobMatcher) -> Vec<String> {
    let mut files: Vec<String> = WalkDir::new(base_dir)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| {
            let relative = entry.path().strip_prefix(base_dir).ok()?;
            Some(normalize_separators(&relative.to_string_lossy()))
        })
        .filter(|relative| matcher.is_match(relative))
        .collect();

    // Sorted within a rule so repeated runs report identically.
    files.sort();
    files
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
