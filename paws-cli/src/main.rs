//! P.A.W.S CLI: headless catalog and navigation commands.
//!
//! Commands:
//! - `catalog show`: list plants, devices, notifications, library
//! - `catalog stats`: dashboard quick stats
//! - `catalog check`: validate a catalog TOML file
//! - `nav replay`: run navigation events and print each screen

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use paws_cli::{catalog_json, catalog_text, check_file, replay, replay_text, stats_text};
use paws_core::config::{LogConfig, LOG_ENV};
use paws_core::PawsConfig;

#[derive(Parser)]
#[command(name = "paws", about = "P.A.W.S CLI: plant monitor catalog and navigation")]
struct Cli {
    /// Config file. Defaults to <config_dir>/paws/config.toml when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Catalog TOML file, overriding the config.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Catalog inspection commands.
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Navigation commands.
    Nav {
        #[command(subcommand)]
        action: NavAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// Print every collection in the catalog.
    Show {
        /// Print JSON instead of a table.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print total, healthy and needs-care counts.
    Stats,
    /// Load and validate a catalog TOML file.
    Check {
        /// Path to the catalog file.
        file: PathBuf,
    },
}

#[derive(Subcommand)]
enum NavAction {
    /// Apply events (tab:<id>, plant:<id>, scan, back) and print each screen.
    Replay {
        #[arg(required = true)]
        events: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = PawsConfig::load(cli.config.as_deref())?;
    if let Some(path) = cli.catalog {
        config.catalog = Some(path);
    }
    init_logging(&config.log);

    match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::Show { json } => {
                let catalog = config.load_catalog().context("load catalog")?;
                if json {
                    println!("{}", catalog_json(&catalog)?);
                } else {
                    print!("{}", catalog_text(&catalog));
                }
            }
            CatalogAction::Stats => {
                let catalog = config.load_catalog().context("load catalog")?;
                print!("{}", stats_text(&catalog));
            }
            CatalogAction::Check { file } => println!("{}", check_file(&file)?),
        },
        Commands::Nav { action } => match action {
            NavAction::Replay { events } => {
                let catalog = config.load_catalog().context("load catalog")?;
                let steps = replay(&events)?;
                tracing::info!(events = steps.len(), "replayed navigation");
                print!("{}", replay_text(&steps, &catalog));
            }
        },
    }
    Ok(())
}

/// Log to stderr so command output on stdout stays clean.
fn init_logging(config: &LogConfig) {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(&config.level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
