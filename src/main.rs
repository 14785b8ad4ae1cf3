use std::fs;
use std::path::Path;

use clap::Parser;

use asset_guard::checker;
use asset_guard::cli::{CheckArgs, Cli, ColorChoice, Commands, InitArgs, ValidateArgs};
use asset_guard::output::{
    ColorMode, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter,
};
use asset_guard::resolver;
use asset_guard::schema::{self, FileRule, SCHEMA_VERSION, SchemaDocument};
use asset_guard::{EXIT_CHECK_FAILED, EXIT_CONFIG_ERROR, EXIT_SUCCESS};

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Validate(args) => run_validate(args, &cli),
        Commands::Init(args) => run_init(args, &cli),
    };

    std::process::exit(exit_code);
}

fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_check_impl(args: &CheckArgs, cli: &Cli) -> asset_guard::Result<i32> {
    // 1. Parse and validate the schema
    let parsed = schema::parse(&args.cwd, args.config.as_deref())?;

    // 2. Resolve each rule's glob against the target directory
    let base_dir = args.cwd.join(&parsed.document.target_dir);
    let results = resolver::resolve(&base_dir, &parsed.document.files)?;

    // 3. Reconcile match results into diagnostics
    let report = checker::check(&results);

    // 4. Format and write output
    let color_mode = color_choice_to_mode(cli.color);
    let output = match args.format {
        OutputFormat::Text => {
            TextFormatter::with_verbose(color_mode, cli.verbose).format(&report)?
        }
        OutputFormat::Json => JsonFormatter.format(&report)?,
    };
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    // 5. Determine exit code
    if args.warn_only {
        return Ok(EXIT_SUCCESS);
    }

    Ok(if report.has_error {
        EXIT_CHECK_FAILED
    } else {
        EXIT_SUCCESS
    })
}

fn run_validate(args: &ValidateArgs, cli: &Cli) -> i32 {
    match schema::parse(&args.cwd, args.config.as_deref()) {
        Ok(parsed) => {
            if !cli.quiet {
                println!("Schema is valid: {}", parsed.path.display());
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_init(args: &InitArgs, cli: &Cli) -> i32 {
    match run_init_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_init_impl(args: &InitArgs, cli: &Cli) -> asset_guard::Result<i32> {
    if args.output.exists() && !args.force {
        return Err(asset_guard::AssetGuardError::Config(format!(
            "Schema file already exists: {}. Use --force to overwrite.",
            args.output.display()
        )));
    }

    let content = serde_json::to_string_pretty(&starter_schema())?;
    fs::write(&args.output, content + "\n")?;

    if !cli.quiet {
        println!("Created schema file: {}", args.output.display());
    }
    Ok(EXIT_SUCCESS)
}

fn starter_schema() -> SchemaDocument {
    SchemaDocument {
        version: SCHEMA_VERSION.to_string(),
        target_dir: "assets".to_string(),
        files: vec![
            FileRule::new("**/logo.png", true),
            FileRule::new("**/*.svg", false),
        ],
    }
}

fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> asset_guard::Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}
