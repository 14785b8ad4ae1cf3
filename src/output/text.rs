use std::io::Write as IoWrite;

use crate::checker::{CheckReport, Diagnostic, Severity};
use crate::error::Result;

use super::OutputFormatter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                // Check if stdout is a TTY
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    const fn status_icon(severity: Severity) -> &'static str {
        match severity {
            Severity::Error => "✗",
            Severity::Warning => "⚠",
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_diagnostic(&self, diagnostic: &Diagnostic, output: &mut Vec<u8>) {
        let icon = Self::status_icon(diagnostic.severity);
        let color = match diagnostic.severity {
            Severity::Error => ansi::RED,
            Severity::Warning => ansi::YELLOW,
        };
        let status = self.colorize(&diagnostic.severity.to_string(), color);

        writeln!(
            output,
            "{icon} {status} [{}]: {}",
            diagnostic.code, diagnostic.message
        )
        .ok();

        if self.verbose >= 1 {
            writeln!(output, "   Pattern: {}", diagnostic.pattern).ok();
            if let Some(subdir) = &diagnostic.subdir {
                writeln!(output, "   Subdirectory: {subdir}").ok();
            }
        }
    }

    fn format_summary(&self, report: &CheckReport) -> String {
        if report.is_empty() {
            return self.colorize("All asset checks passed", ansi::GREEN);
        }

        let errors = self.colorize(&report.error_count().to_string(), ansi::RED);
        let warnings = self.colorize(&report.warning_count().to_string(), ansi::YELLOW);
        format!(
            "Summary: {} diagnostics, {errors} errors, {warnings} warnings",
            report.diagnostics.len()
        )
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &CheckReport) -> Result<String> {
        let mut output = Vec::new();

        for diagnostic in &report.diagnostics {
            self.format_diagnostic(diagnostic, &mut output);
        }

        writeln!(output, "{}", self.format_summary(report)).ok();

        Ok(String::from_utf8_lossy(&output).to_string())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
