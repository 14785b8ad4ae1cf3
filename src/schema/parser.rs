use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{AssetGuardError, Result};

use super::finder::find_schema_file;
use super::model::SchemaDocument;
use super::validation::validate_document;

/// On-disk encoding of a schema file, decided by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaFormat {
    Json,
    Yaml,
}

impl SchemaFormat {
    /// `.json` parses as JSON; everything else parses as YAML (YAML is a
    /// superset of JSON, so this is the forgiving default).
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        if path.extension().is_some_and(|ext| ext == "json") {
            Self::Json
        } else {
            Self::Yaml
        }
    }
}

/// A schema document together with where and how it was parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSchema {
    pub path: PathBuf,
    pub format: SchemaFormat,
    pub document: SchemaDocument,
}

/// Parse and validate the schema file at `path`.
///
/// # Errors
/// Returns an error if the file cannot be read, decoded, or validated.
pub fn parse_file(path: &Path) -> Result<ParsedSchema> {
    let content = fs::read_to_string(path).map_err(|e| AssetGuardError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let format = SchemaFormat::from_path(path);
    let value: Value = match format {
        SchemaFormat::Json => serde_json::from_str(&content)?,
        SchemaFormat::Yaml => serde_yaml::from_str(&content)?,
    };

    let document = validate_document(&value)?;

    Ok(ParsedSchema {
        path: path.to_path_buf(),
        format,
        document,
    })
}

/// Parse a schema, discovering the file in `dir` when no explicit path is
/// given.
///
/// # Errors
/// Returns [`AssetGuardError::SchemaNotFound`] when discovery finds no
/// schema file, otherwise the same errors as [`parse_file`].
pub fn parse(dir: &Path, schema_file: Option<&Path>) -> Result<ParsedSchema> {
    let path = match schema_file {
        Some(path) => path.to_path_buf(),
        None => find_schema_file(dir).ok_or_else(|| AssetGuardError::SchemaNotFound {
            dir: dir.to_path_buf(),
        })?,
    };
    parse_file(&path)
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
