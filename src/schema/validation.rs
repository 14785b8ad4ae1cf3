//! Structural schema validation.
//!
//! Validates the raw decoded document (JSON or YAML, as a generic value)
//! against the closed schema shape. Every violation found is collected and
//! reported in one pass; a [`SchemaDocument`] is never partially
//! constructed.

use serde_json::Value;

use crate::error::{AssetGuardError, Result, Violation};

use super::model::{FileRule, SCHEMA_VERSION, SchemaDocument};

const KNOWN_DOCUMENT_KEYS: &[&str] = &["version", "targetDir", "files"];
const KNOWN_RULE_KEYS: &[&str] = &["pattern", "required"];

/// Validate a raw decoded document and construct a typed [`SchemaDocument`].
///
/// An absent `version` defaults to [`SCHEMA_VERSION`]; an absent `required`
/// defaults to `false`. Unknown keys are rejected, both at the top level
/// and inside each rule.
///
/// # Errors
/// Returns [`AssetGuardError::Validation`] carrying the full list of
/// field-level violations.
pub fn validate_document(value: &Value) -> Result<SchemaDocument> {
    let Value::Object(map) = value else {
        return Err(AssetGuardError::Validation {
            violations: vec![Violation::new(
                "schema",
                format!("Expected object, received {}", json_type_name(value)),
            )],
        });
    };

    let mut violations = Vec::new();

    for key in map.keys() {
        if !KNOWN_DOCUMENT_KEYS.contains(&key.as_str()) {
            violations.push(Violation::new(key.clone(), "Unrecognized key"));
        }
    }

    let version = validate_version(map.get("version"), &mut violations);
    let target_dir = validate_target_dir(map.get("targetDir"), &mut violations);
    let files = validate_files(map.get("files"), &mut violations);

    match (violations.is_empty(), version, target_dir, files) {
        (true, Some(version), Some(target_dir), Some(files)) => Ok(SchemaDocument {
            version,
            target_dir,
            files,
        }),
        _ => Err(AssetGuardError::Validation { violations }),
    }
}

fn validate_version(value: Option<&Value>, violations: &mut Vec<Violation>) -> Option<String> {
    match value {
        None => Some(SCHEMA_VERSION.to_string()),
        Some(Value::String(s)) if s == SCHEMA_VERSION => Some(s.clone()),
        Some(Value::String(s)) => {
            violations.push(Violation::new(
                "version",
                format!("Unsupported schema version \"{s}\", expected \"{SCHEMA_VERSION}\""),
            ));
            None
        }
        Some(other) => {
            violations.push(Violation::new(
                "version",
                format!("Expected string, received {}", json_type_name(other)),
            ));
            None
        }
    }
}

fn validate_target_dir(value: Option<&Value>, violations: &mut Vec<Violation>) -> Option<String> {
    match value {
        None => {
            violations.push(Violation::new("targetDir", "Target directory is required"));
            None
        }
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::String(_)) => {
            violations.push(Violation::new(
                "targetDir",
                "Target directory must not be empty",
            ));
            None
        }
        Some(other) => {
            violations.push(Violation::new(
                "targetDir",
                format!("Expected string, received {}", json_type_name(other)),
            ));
            None
        }
    }
}

fn validate_files(value: Option<&Value>, violations: &mut Vec<Violation>) -> Option<Vec<FileRule>> {
    match value {
        None => {
            violations.push(Violation::new(
                "files",
                "At least one file pattern must be specified",
            ));
            None
        }
        Some(Value::Array(entries)) => {
            if entries.is_empty() {
                violations.push(Violation::new(
                    "files",
                    "At least one file pattern must be specified",
                ));
                return None;
            }

            let mut rules = Vec::with_capacity(entries.len());
            for (index, entry) in entries.iter().enumerate() {
                if let Some(rule) = validate_rule(index, entry, violations) {
                    rules.push(rule);
                }
            }
            (rules.len() == entries.len()).then_some(rules)
        }
        Some(other) => {
            violations.push(Violation::new(
                "files",
                format!("Expected array, received {}", json_type_name(other)),
            ));
            None
        }
    }
}

fn validate_rule(
    index: usize,
    value: &Value,
    violations: &mut Vec<Violation>,
) -> Option<FileRule> {
    let Value::Object(map) = value else {
        violations.push(Violation::new(
            format!("files[{index}]"),
            format!("Expected object, received {}", json_type_name(value)),
        ));
        return None;
    };

    let mut unknown_key = false;
    for key in map.keys() {
        if !KNOWN_RULE_KEYS.contains(&key.as_str()) {
            violations.push(Violation::new(
                format!("files[{index}].{key}"),
                "Unrecognized key",
            ));
            unknown_key = true;
        }
    }

    let pattern = validate_pattern(index, map.get("pattern"), violations);
    let required = validate_required(index, map.get("required"), violations);

    match (unknown_key, pattern, required) {
        (false, Some(pattern), Some(required)) => Some(FileRule { pattern, required }),
        _ => None,
    }
}

fn validate_pattern(
    index: usize,
    value: Option<&Value>,
    violations: &mut Vec<Violation>,
) -> Option<String> {
    match value {
        None => {
            violations.push(Violation::new(
                format!("files[{index}].pattern"),
                "Pattern is required",
            ));
            None
        }
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
        Some(Value::String(_)) => {
            violations.push(Violation::new(
                format!("files[{index}].pattern"),
                "Pattern must not be empty",
            ));
            None
        }
        Some(other) => {
            violations.push(Violation::new(
                format!("files[{index}].pattern"),
                format!("Expected string, received {}", json_type_name(other)),
            ));
            None
        }
    }
}

fn validate_required(
    index: usize,
    value: Option<&Value>,
    violations: &mut Vec<Violation>,
) -> Option<bool> {
    match value {
        None => Some(false),
        Some(Value::Bool(b)) => Some(*b),
        Some(other) => {
            violations.push(Violation::new(
                format!("files[{index}].required"),
                format!("Expected boolean, received {}", json_type_name(other)),
            ));
            None
        }
    }
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
