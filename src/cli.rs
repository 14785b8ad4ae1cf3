use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "asset-guard")]
#[command(author, version, about = "Asset schema guard - verify declared asset files exist")]
#[command(long_about = "A tool that checks deployed asset files against a versioned schema\n\
    of glob patterns, catching missing assets before they reach production.\n\n\
    Exit codes:\n  \
    0 - All checks passed\n  \
    1 - Missing or malformed assets found\n  \
    2 - Configuration or schema error")]
pub struct Cli {
    /// Increase output verbosity (-v for diagnostic details)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check asset files against the schema's patterns
    Check(CheckArgs),

    /// Parse and validate a schema file without checking assets
    Validate(ValidateArgs),

    /// Generate a starter schema file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Path to the schema file (default: discover schemasset.{json,yaml,yml})
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Working directory for schema discovery and target resolution
    #[arg(short = 'd', long, default_value = ".")]
    pub cwd: PathBuf,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Only warn, don't fail on missing assets
    #[arg(long)]
    pub warn_only: bool,
}

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to the schema file (default: discover schemasset.{json,yaml,yml})
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Working directory for schema discovery
    #[arg(short = 'd', long, default_value = ".")]
    pub cwd: PathBuf,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for the schema file
    #[arg(short, long, default_value = "schemasset.json")]
    pub output: PathBuf,

    /// Overwrite existing schema file
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
