use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use dispersion::aggregate::SourceSummary;
use dispersion::config::Config;
use dispersion::output::json::{write_summary, SummaryReport};
use dispersion::output::terminal;
use dispersion::plot::ImageFormat;

/// Dispersion: per-line semantic dispersion across embedding models.
///
/// Reads one CSV per poem, measures how much four embedding models disagree
/// on each line, and charts the result.
#[derive(Parser)]
#[command(name = "dispersion", version, about)]
struct Cli {
    #[command(flatten)]
    opts: GlobalOpts,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct GlobalOpts {
    /// Directory holding the source CSV files (overrides DISPERSION_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Directory the charts are written to (overrides DISPERSION_OUTPUT_DIR)
    #[arg(long, global = true)]
    out_dir: Option<PathBuf>,

    /// Image format for the charts: png or svg (overrides DISPERSION_FORMAT)
    #[arg(long, global = true)]
    format: Option<ImageFormat>,

    /// Also write a JSON summary of E′ / ρ′ to this path
    #[arg(long, global = true)]
    json: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Load sources, compute dispersion, render all charts (default)
    Run,

    /// Compute and print E′ / ρ′ without rendering charts
    Summary,

    /// Show which source files are present and where charts would go
    Status,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("dispersion=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli.opts)?;

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            config.require_sources()?;
            info!(
                data_dir = %config.data_dir.display(),
                sources = config.sources.len(),
                "Computing dispersion"
            );

            let (analysis, paths) = dispersion::pipeline::run(&config)?;
            let summaries = analysis.summaries();

            terminal::display_summaries(&summaries);
            write_json(&cli.opts, summaries)?;
            terminal::display_output_files(&paths.all());
        }

        Commands::Summary => {
            config.require_sources()?;
            let analysis = dispersion::pipeline::analyze(&config)?;
            let summaries = analysis.summaries();

            terminal::display_summaries(&summaries);
            write_json(&cli.opts, summaries)?;
        }

        Commands::Status => {
            let missing = dispersion::status::show(&config);
            if missing == 0 {
                println!("\n{}", "All source files present.".bold());
            }
        }
    }

    Ok(())
}

/// Environment configuration with CLI overrides applied on top.
fn load_config(opts: &GlobalOpts) -> Result<Config> {
    let mut config = Config::load()?;
    if let Some(dir) = &opts.data_dir {
        config.data_dir = dir.clone();
    }
    if let Some(dir) = &opts.out_dir {
        config.output_dir = dir.clone();
    }
    if let Some(format) = opts.format {
        config.format = format;
    }
    Ok(config)
}

fn write_json(opts: &GlobalOpts, summaries: Vec<SourceSummary>) -> Result<()> {
    if let Some(path) = &opts.json {
        write_summary(path, &SummaryReport::new(summaries))?;
        println!("\nSummary written to {}", path.display());
    }
    Ok(())
}
