use serde::Serialize;

use crate::checker::{CheckReport, Diagnostic};
use crate::error::Result;

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    has_error: bool,
    diagnostics: &'a [Diagnostic],
}

#[derive(Serialize)]
struct Summary {
    total: usize,
    errors: usize,
    warnings: usize,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &CheckReport) -> Result<String> {
        let output = JsonOutput {
            summary: Summary {
                total: report.diagnostics.len(),
                errors: report.error_count(),
                warnings: report.warning_count(),
            },
            has_error: report.has_error,
            diagnostics: &report.diagnostics,
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
