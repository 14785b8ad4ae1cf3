use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// A single field-level schema violation.
///
/// Validation collects every violation it finds before failing, so one
/// validation pass reports all problems in a schema document at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Path of the offending field, e.g. `files[2].pattern`.
    pub field: String,
    pub message: String,
}

impl Violation {
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn format_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| format!("  - {v}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Error, Debug)]
pub enum AssetGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Schema file not found in {}", .dir.display())]
    SchemaNotFound { dir: PathBuf },

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Invalid schema:\n{}", format_violations(.violations))]
    Validation { violations: Vec<Violation> },
}

pub type Result<T> = std::result::Result<T, AssetGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
