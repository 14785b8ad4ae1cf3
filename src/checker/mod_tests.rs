use crate::resolver::MatchResult;

use super::*;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

// ============================================================================
// Flat mode
// ============================================================================

#[test]
fn flat_required_with_no_match_reports_file_not_found() {
    let results = vec![MatchResult::new("*.png", vec![], true)];

    let report = check(&results);
    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(report.diagnostics[0].code, DiagnosticCode::FileNotFound);
    assert_eq!(report.diagnostics[0].severity, Severity::Error);
    assert_eq!(report.diagnostics[0].pattern, "*.png");
    assert!(report.has_error);
}

#[test]
fn flat_non_required_with_no_match_is_accepted() {
    let results = vec![MatchResult::new("logo.png", vec![], false)];

    let report = check(&results);
    assert!(report.is_empty());
    assert!(!report.has_error);
}

#[test]
fn flat_satisfied_rules_produce_no_diagnostics() {
    let results = vec![
        MatchResult::new("*.png", strings(&["logo.png"]), true),
        MatchResult::new("*.css", strings(&["site.css"]), false),
    ];

    let report = check(&results);
    assert!(report.is_empty());
    assert!(!report.has_error);
}

#[test]
fn flat_required_blank_path_is_an_error() {
    let results = vec![MatchResult::new("*.png", strings(&["logo.png", "  "]), true)];

    let report = check(&results);
    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(report.diagnostics[0].code, DiagnosticCode::PatternEmptyMatch);
    assert_eq!(report.diagnostics[0].severity, Severity::Error);
    assert!(report.has_error);
}

#[test]
fn flat_non_required_blank_path_is_accepted() {
    let results = vec![
        MatchResult::new("*.png", strings(&["  "]), false),
        MatchResult::new("*.css", strings(&[""]), false),
    ];

    let report = check(&results);
    assert!(report.is_empty(), "non-required rules are never flagged");
    assert!(!report.has_error);
}

#[test]
fn flat_required_zero_matches_never_reports_subdir_diagnostics() {
    let results = vec![MatchResult::new("*.png", vec![], true)];

    let report = check(&results);
    assert!(
        report
            .diagnostics
            .iter()
            .all(|d| d.code != DiagnosticCode::SubdirMissingPattern)
    );
}

// ============================================================================
// Multi-tenant mode
// ============================================================================

#[test]
fn required_rule_missing_in_one_subdirectory() {
    let results = vec![
        MatchResult::new("**/logo.png", strings(&["domain-a/logo.png"]), true),
        MatchResult::new(
            "**/style.css",
            strings(&["domain-a/style.css", "domain-b/style.css"]),
            true,
        ),
    ];

    let report = check(&results);
    assert_eq!(report.diagnostics.len(), 1);
    let diagnostic = &report.diagnostics[0];
    assert_eq!(diagnostic.code, DiagnosticCode::SubdirMissingPattern);
    assert_eq!(diagnostic.pattern, "**/logo.png");
    assert_eq!(diagnostic.subdir.as_deref(), Some("domain-b"));
    assert!(diagnostic.message.contains("**/logo.png"));
    assert!(diagnostic.message.contains("domain-b"));
    assert!(report.has_error);
}

#[test]
fn subdirectory_revealed_by_another_rule_counts() {
    // The logo rule has no match at all under domain-b; only the css rule
    // reveals that domain-b exists.
    let results = vec![
        MatchResult::new("**/logo.png", strings(&["domain-a/logo.png"]), true),
        MatchResult::new("**/*.css", strings(&["domain-b/site.css"]), false),
    ];

    let report = check(&results);
    let subdir_diags: Vec<_> = report
        .diagnostics
        .iter()
        .filter(|d| d.code == DiagnosticCode::SubdirMissingPattern)
        .collect();
    assert_eq!(subdir_diags.len(), 1);
    assert_eq!(subdir_diags[0].subdir.as_deref(), Some("domain-b"));
}

#[test]
fn satisfied_subdirectories_are_not_flagged() {
    let results = vec![MatchResult::new(
        "**/logo.png",
        strings(&["domain-a/logo.png", "domain-b/logo.png"]),
        true,
    )];

    let report = check(&results);
    assert!(report.is_empty());
    assert!(!report.has_error);
}

#[test]
fn non_required_rules_never_produce_subdir_diagnostics() {
    let results = vec![
        MatchResult::new("**/extra.svg", strings(&["domain-a/extra.svg"]), false),
        MatchResult::new(
            "**/logo.png",
            strings(&["domain-a/logo.png", "domain-b/logo.png"]),
            true,
        ),
    ];

    let report = check(&results);
    assert!(report.is_empty());
}

#[test]
fn non_required_blank_path_is_accepted_in_multi_tenant_mode() {
    let results = vec![
        MatchResult::new("**/extra.svg", strings(&["domain-a/extra.svg", " "]), false),
        MatchResult::new(
            "**/logo.png",
            strings(&["domain-a/logo.png", "domain-b/logo.png"]),
            true,
        ),
    ];

    let report = check(&results);
    assert!(report.is_empty(), "non-required rules are never flagged");
}

#[test]
fn zero_matches_in_multi_tenant_mode_reports_both_kinds() {
    let results = vec![
        MatchResult::new("**/logo.png", vec![], true),
        MatchResult::new(
            "**/style.css",
            strings(&["domain-a/style.css", "domain-b/style.css"]),
            true,
        ),
    ];

    let report = check(&results);
    let codes: Vec<_> = report.diagnostics.iter().map(|d| d.code).collect();
    assert_eq!(
        codes,
        vec![
            DiagnosticCode::SubdirMissingPattern,
            DiagnosticCode::SubdirMissingPattern,
            DiagnosticCode::FileNotFound,
        ]
    );
    let subdirs: Vec<_> = report
        .diagnostics
        .iter()
        .filter_map(|d| d.subdir.as_deref())
        .collect();
    assert_eq!(subdirs, vec!["domain-a", "domain-b"]);
}

#[test]
fn blank_path_flagged_alongside_subdir_diagnostics() {
    let results = vec![
        MatchResult::new(
            "**/logo.png",
            strings(&["domain-a/logo.png", "  "]),
            true,
        ),
        MatchResult::new("**/style.css", strings(&["domain-b/style.css"]), true),
    ];

    let report = check(&results);
    let logo_codes: Vec<_> = report
        .diagnostics
        .iter()
        .filter(|d| d.pattern == "**/logo.png")
        .map(|d| d.code)
        .collect();
    assert_eq!(
        logo_codes,
        vec![
            DiagnosticCode::SubdirMissingPattern,
            DiagnosticCode::PatternEmptyMatch,
        ]
    );
}

#[test]
fn flat_matches_do_not_create_subdirectories() {
    // A bare filename has no first segment; only nested paths switch the
    // checker into multi-tenant mode.
    let results = vec![
        MatchResult::new("logo.png", strings(&["logo.png"]), true),
        MatchResult::new("*.css", vec![], true),
    ];

    let report = check(&results);
    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(report.diagnostics[0].code, DiagnosticCode::FileNotFound);
}

// ============================================================================
// Ordering and report assembly
// ============================================================================

#[test]
fn diagnostics_follow_rule_order() {
    let results = vec![
        MatchResult::new("first.png", vec![], true),
        MatchResult::new("second.png", vec![], true),
        MatchResult::new("third.png", vec![], true),
    ];

    let report = check(&results);
    let patterns: Vec<_> = report
        .diagnostics
        .iter()
        .map(|d| d.pattern.as_str())
        .collect();
    assert_eq!(patterns, vec!["first.png", "second.png", "third.png"]);
}

#[test]
fn subdirectory_order_follows_discovery_order() {
    let results = vec![
        MatchResult::new(
            "**/style.css",
            strings(&["zeta/style.css", "alpha/style.css"]),
            true,
        ),
        MatchResult::new("**/logo.png", vec![], true),
    ];

    let report = check(&results);
    let subdirs: Vec<_> = report
        .diagnostics
        .iter()
        .filter(|d| d.pattern == "**/logo.png")
        .filter_map(|d| d.subdir.as_deref())
        .collect();
    // "zeta" was observed before "alpha" in the match results.
    assert_eq!(subdirs, vec!["zeta", "alpha"]);
}

#[test]
fn check_is_deterministic_across_runs() {
    let results = vec![
        MatchResult::new("**/logo.png", strings(&["domain-a/logo.png"]), true),
        MatchResult::new("**/style.css", strings(&["domain-b/style.css"]), true),
        MatchResult::new("**/icon.svg", vec![], false),
    ];

    let first = check(&results);
    let second = check(&results);
    assert_eq!(first, second);
}

#[test]
fn has_error_reflects_error_severity_only() {
    // Warning severity is part of the report model even though every
    // currently emitted diagnostic is an error.
    let warning_only = CheckReport::new(vec![Diagnostic {
        severity: Severity::Warning,
        code: DiagnosticCode::PatternNoMatch,
        message: "Pattern \"*.png\" did not match any files".to_string(),
        pattern: "*.png".to_string(),
        subdir: None,
    }]);
    assert_eq!(warning_only.warning_count(), 1);
    assert_eq!(warning_only.error_count(), 0);
    assert!(!warning_only.has_error, "warnings never drive has_error");

    let with_error = check(&[MatchResult::new("*.png", vec![], true)]);
    assert_eq!(with_error.error_count(), 1);
    assert!(with_error.has_error);
}

#[test]
fn empty_input_yields_empty_report() {
    let report = check(&[]);
    assert!(report.is_empty());
    assert!(!report.has_error);
}
