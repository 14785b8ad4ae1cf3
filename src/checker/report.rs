use std::fmt;

use serde::Serialize;

/// Severity of a diagnostic. Only errors drive [`CheckReport::has_error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "ERROR"),
            Self::Warning => write!(f, "WARNING"),
        }
    }
}

/// Machine-readable diagnostic category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiagnosticCode {
    /// A required pattern matched zero files.
    FileNotFound,
    /// A pattern matched zero files (advisory form of `FileNotFound`).
    PatternNoMatch,
    /// A pattern matched empty or whitespace-only paths.
    PatternEmptyMatch,
    /// A required pattern is satisfied in some subdirectories but not all.
    SubdirMissingPattern,
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileNotFound => write!(f, "FILE_NOT_FOUND"),
            Self::PatternNoMatch => write!(f, "PATTERN_NO_MATCH"),
            Self::PatternEmptyMatch => write!(f, "PATTERN_EMPTY_MATCH"),
            Self::SubdirMissingPattern => write!(f, "SUBDIR_MISSING_PATTERN"),
        }
    }
}

/// One reportable finding about a rule's match state.
///
/// The message is self-contained: it embeds the pattern (and subdirectory,
/// where relevant) so it can be printed standalone. `pattern` and `subdir`
/// duplicate that information as structured fields for programmatic
/// filtering. Never mutated once emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub code: DiagnosticCode,
    pub message: String,
    pub pattern: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subdir: Option<String>,
}

impl Diagnostic {
    pub(super) fn file_not_found(pattern: &str) -> Self {
        Self {
            severity: Severity::Error,
            code: DiagnosticCode::FileNotFound,
            message: format!("Required pattern \"{pattern}\" did not match any files"),
            pattern: pattern.to_string(),
            subdir: None,
        }
    }

    pub(super) fn empty_match(pattern: &str) -> Self {
        Self {
            severity: Severity::Error,
            code: DiagnosticCode::PatternEmptyMatch,
            message: format!(
                "Required pattern \"{pattern}\" matched empty or whitespace-only paths"
            ),
            pattern: pattern.to_string(),
            subdir: None,
        }
    }

    pub(super) fn subdir_missing(pattern: &str, subdir: &str) -> Self {
        Self {
            severity: Severity::Error,
            code: DiagnosticCode::SubdirMissingPattern,
            message: format!(
                "Required pattern \"{pattern}\" is missing in subdirectory \"{subdir}\""
            ),
            pattern: pattern.to_string(),
            subdir: Some(subdir.to_string()),
        }
    }
}

/// The ordered outcome of one check invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub diagnostics: Vec<Diagnostic>,
    /// True iff any diagnostic has error severity. Warnings are advisory
    /// and never drive this flag.
    pub has_error: bool,
}

impl CheckReport {
    #[must_use]
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        let has_error = diagnostics.iter().any(|d| d.severity == Severity::Error);
        Self {
            diagnostics,
            has_error,
        }
    }

    #[must_use]
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }

    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
