//! Veritas IDV CLI — Work with collected verification data on disk.
//!
//! Subcommands: init, merge, clear, inspect, update.

mod commands;
mod config;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use config::IdvConfig;

/// Veritas IDV — collected identity-verification data.
#[derive(Parser, Debug)]
#[command(name = "veritas-idv", version, about, long_about = None)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, global = true, default_value = "veritas-idv.toml")]
    config: PathBuf,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a default configuration file.
    Init,
    /// Merge step records, later files winning.
    Merge(commands::merge::MergeArgs),
    /// Clear fields from a record.
    Clear(commands::clear::ClearArgs),
    /// Show which fields a record holds and its front document score.
    Inspect(commands::inspect::InspectArgs),
    /// Build the data update request for sending a record.
    Update(commands::update::UpdateArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = IdvConfig::load(&cli.config)?;

    // Initialize tracing
    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.clone());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&level));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);
    if config.json_logs() {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    match &cli.command {
        Commands::Init => {
            IdvConfig::default().save(&cli.config)?;
            tracing::info!(path = %cli.config.display(), "wrote default config");
            Ok(())
        }
        Commands::Merge(args) => commands::merge::run(args, &config),
        Commands::Clear(args) => commands::clear::run(args, &config),
        Commands::Inspect(args) => commands::inspect::run(args),
        Commands::Update(args) => commands::update::run(args, &config),
    }
}
