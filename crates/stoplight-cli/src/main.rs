//! stoplight - false color exposure LUT generator
//!
//! Generates .cube LUTs that paint exposure stops (or IRE levels) in solid
//! colors for on-set monitoring.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "stoplight")]
#[command(author, version, about = "False color exposure LUT generator")]
#[command(long_about = "
Generates false color exposure monitoring LUTs (.cube) from a camera
log/gamut profile and a saved band configuration.

Examples:
  stoplight profiles                        # List camera/target profiles
  stoplight profiles --json                 # Machine-readable listing
  stoplight generate --config setup.json    # Generate with derived filename
  stoplight generate -c setup.json -o my_assist.cube
  stoplight preview --config setup.json     # Terminal band preview
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a .cube LUT from a saved configuration
    #[command(visible_alias = "g")]
    Generate(GenerateArgs),

    /// List supported camera and target profiles
    #[command(visible_alias = "p")]
    Profiles(ProfilesArgs),

    /// Render the configured bands as a terminal exposure bar
    Preview(PreviewArgs),
}

#[derive(Args)]
struct GenerateArgs {
    /// Path to a JSON configuration file
    #[arg(short, long)]
    config: PathBuf,

    /// Output .cube path (default: derived from camera and target)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct ProfilesArgs {
    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct PreviewArgs {
    /// Path to a JSON configuration file
    #[arg(short, long)]
    config: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Generate(args) => commands::generate::run(args, cli.verbose),
        Commands::Profiles(args) => commands::profiles::run(args),
        Commands::Preview(args) => commands::preview::run(args),
    }
}
