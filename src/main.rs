use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use piet_cleaner::error::{AppError, EXIT_OTHER};
use piet_cleaner::models::{ConfigOverrides, RemapConfig};
use piet_cleaner::services::{palette_rows, ConsoleReporter, JsonReporter, RemapService};

#[derive(Parser)]
#[command(name = "piet-cleaner", version)]
#[command(about = "Snap a Piet program image onto the canonical 20-color palette")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Remap every color of an image to its canonical Piet color
    Remap {
        /// Input image (PNG, BMP, GIF, PNM or JPEG)
        file: PathBuf,

        /// Per-channel tolerance used to identify the 20 colors
        #[arg(short, long)]
        diff_threshold: Option<u32>,

        /// Tolerance used to decide which channels define a hue
        #[arg(short, long)]
        level_threshold: Option<u32>,

        /// Output PNG file (default: <name>.remapped.png)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the full color mapping and enable info logging
        #[arg(short, long)]
        verbose: bool,

        /// YAML config file (default: $PIET_CLEANER_CONFIG)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Write an indexed PNG with the canonical palette
        #[arg(long)]
        indexed: bool,

        /// Print a JSON report instead of progress lines
        #[arg(long)]
        json: bool,
    },
    /// Print the canonical 20-color palette
    Palette {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let verbose = matches!(cli.command, Commands::Remap { verbose: true, .. });
    init_tracing(verbose);

    let result = match cli.command {
        Commands::Remap {
            file,
            diff_threshold,
            level_threshold,
            output,
            verbose,
            config,
            indexed,
            json,
        } => {
            let overrides = ConfigOverrides {
                diff_threshold,
                level_threshold,
                verbose,
                indexed_output: indexed,
            };
            run_remap_command(&file, output.as_deref(), config.as_deref(), &overrides, json)
        }
        Commands::Palette { json } => run_palette_command(json),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(exit_code_for(&e))
        }
    }
}

/// Logs go to stderr so `--json` output stays clean
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "piet_cleaner=info"
    } else {
        "piet_cleaner=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

fn exit_code_for(error: &anyhow::Error) -> u8 {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<AppError>())
        .map_or(EXIT_OTHER, AppError::exit_code)
}

fn load_service(
    config_path: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<RemapService, AppError> {
    let config = RemapConfig::load(config_path)?.with_overrides(overrides);
    RemapService::new(config)
}

fn run_remap_command(
    file: &Path,
    output: Option<&Path>,
    config_path: Option<&Path>,
    overrides: &ConfigOverrides,
    json: bool,
) -> anyhow::Result<()> {
    if json {
        return run_remap_json(file, output, config_path, overrides);
    }

    let service =
        load_service(config_path, overrides).context("Failed to load configuration")?;
    let mut reporter = ConsoleReporter::stdout();
    let outcome = service
        .run(file, output, &mut reporter)
        .with_context(|| format!("Failed to remap {}", file.display()))?;
    reporter.saved(&outcome.output);
    Ok(())
}

/// Prints exactly one report, whether the run fails in configuration, in
/// the pipeline or not at all.
fn run_remap_json(
    file: &Path,
    output: Option<&Path>,
    config_path: Option<&Path>,
    overrides: &ConfigOverrides,
) -> anyhow::Result<()> {
    let mut reporter = JsonReporter::new();

    let service = match load_service(config_path, overrides) {
        Ok(service) => service,
        Err(e) => {
            let report = reporter.into_report(e.exit_code(), None, Some(e.full_message()));
            print_json(&report)?;
            return Err(anyhow::Error::new(e).context("Failed to load configuration"));
        }
    };

    let result = service.run(file, output, &mut reporter);
    let report = match &result {
        Ok(outcome) => {
            reporter.into_report(0, Some(outcome.output.display().to_string()), None)
        }
        Err(e) => reporter.into_report(e.exit_code(), None, Some(e.full_message())),
    };
    print_json(&report)?;
    result.with_context(|| format!("Failed to remap {}", file.display()))?;
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let text = serde_json::to_string_pretty(value)?;
    println!("{text}");
    Ok(())
}

fn run_palette_command(json: bool) -> anyhow::Result<()> {
    let rows = palette_rows();

    if json {
        print_json(&rows)?;
        return Ok(());
    }

    for row in rows {
        println!(
            "{:>2}  {:<8} {:<7} {}",
            row.index,
            row.hue,
            row.lightness.as_deref().unwrap_or("-"),
            row.color
        );
    }
    Ok(())
}
