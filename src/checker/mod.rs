//! Consistency checking of resolved match results.
//!
//! A pure function from match results to diagnostics: the checker owns no
//! state, never touches the filesystem, and never fails. It is the single
//! authority on severity; upstream I/O absence arrives here as empty match
//! sets.

mod report;

pub use report::{CheckReport, Diagnostic, DiagnosticCode, Severity};

use indexmap::IndexSet;

use crate::path_utils::first_segment;
use crate::resolver::MatchResult;

/// Reconcile resolved match results into a diagnostic report.
///
/// The first path segment of every matched path, across all rules, decides
/// the check mode. No segments means a flat layout: required rules are
/// checked for presence and blank matches. One or more segments means a
/// multi-tenant layout: each required rule is additionally judged against
/// every subdirectory that any rule's matches revealed, so an asset present
/// for one tenant but forgotten for another is surfaced.
///
/// Diagnostics are emitted in rule order; within a rule, per-subdirectory
/// findings precede the global ones, in subdirectory discovery order. The
/// output is deterministic for identical input.
#[must_use]
pub fn check(results: &[MatchResult]) -> CheckReport {
    let subdirs = discover_subdirs(results);

    let mut diagnostics = Vec::new();
    if subdirs.is_empty() {
        for result in results {
            check_flat(result, &mut diagnostics);
        }
    } else {
        for result in results {
            check_multi_tenant(result, &subdirs, &mut diagnostics);
        }
    }

    CheckReport::new(diagnostics)
}

/// Collect the distinct first path segments over all matched paths, in
/// first-observed order.
fn discover_subdirs(results: &[MatchResult]) -> IndexSet<String> {
    let mut subdirs = IndexSet::new();
    for result in results {
        for file in &result.files {
            if let Some(segment) = first_segment(file) {
                subdirs.insert(segment.to_string());
            }
        }
    }
    subdirs
}

fn check_flat(result: &MatchResult, diagnostics: &mut Vec<Diagnostic>) {
    // Non-required rules are never flagged, whatever their match state.
    if !result.required {
        return;
    }

    if result.files.is_empty() {
        diagnostics.push(Diagnostic::file_not_found(&result.pattern));
    }

    if has_blank_path(&result.files) {
        diagnostics.push(Diagnostic::empty_match(&result.pattern));
    }
}

fn check_multi_tenant(
    result: &MatchResult,
    subdirs: &IndexSet<String>,
    diagnostics: &mut Vec<Diagnostic>,
) {
    if !result.required {
        return;
    }

    // Judged against every subdirectory any rule revealed, not just the
    // ones this rule matched under.
    let covered: IndexSet<&str> = result
        .files
        .iter()
        .filter_map(|file| first_segment(file))
        .collect();

    for subdir in subdirs {
        if !covered.contains(subdir.as_str()) {
            diagnostics.push(Diagnostic::subdir_missing(&result.pattern, subdir));
        }
    }

    // Global checks layered on top of the per-subdirectory ones: a rule
    // with zero matches yields both kinds in the same pass.
    if result.files.is_empty() {
        diagnostics.push(Diagnostic::file_not_found(&result.pattern));
    }

    if has_blank_path(&result.files) {
        diagnostics.push(Diagnostic::empty_match(&result.pattern));
    }
}

/// An empty or whitespace-only matched path counts as blank. Pathological,
/// but it must be flagged rather than crash the checker.
fn has_blank_path(files: &[String]) -> bool {
    files.iter().any(|file| file.trim().is_empty())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
