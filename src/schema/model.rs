use serde::Serialize;

/// Supported schema version.
pub const SCHEMA_VERSION: &str = "1.0.0";

/// One declared asset expectation: a glob pattern and whether it must match.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FileRule {
    /// Target files as a glob pattern, relative to the target directory.
    pub pattern: String,

    /// Whether the pattern must match at least one file.
    ///
    /// Non-required rules produce warnings instead of errors and are exempt
    /// from subdirectory-consistency checking. Defaults to `false`.
    pub required: bool,
}

impl FileRule {
    #[must_use]
    pub fn new(pattern: impl Into<String>, required: bool) -> Self {
        Self {
            pattern: pattern.into(),
            required,
        }
    }
}

/// A validated schema document.
///
/// Constructed once by [`validate_document`](super::validate_document) (or
/// the parser on top of it) and immutable thereafter. The shape is closed:
/// unknown fields are rejected at validation time so typos like `targetir`
/// fail loudly instead of being silently ignored.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SchemaDocument {
    /// Schema version literal; currently always [`SCHEMA_VERSION`].
    pub version: String,

    /// Directory, relative to the project root, that all rules resolve
    /// against.
    pub target_dir: String,

    /// Declared expectations, in document order. Never empty.
    pub files: Vec<FileRule>,
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
