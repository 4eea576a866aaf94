//! Risk CLI - Command Line Operations for Trade Pricing
//!
//! Operational entry point for the trade pricing system.
//!
//! # Commands
//!
//! - `risk-cli price --config <file> --bond-file <file> --fx-file <file>` -
//!   price trade files through the configured engines
//! - `risk-cli engines` - list the built-in pricing engine catalog
//!
//! As part of the Service layer, this binary wires the adapter loaders and
//! the pricing dispatcher together and presents the aggregated results.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod report;

pub use error::{CliError, Result};

use commands::price::DispatchMode;

/// Trade pricing CLI
#[derive(Parser)]
#[command(name = "risk-cli")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price trade files through the configured engines
    Price {
        /// Pricing engine configuration file
        #[arg(short, long, default_value = "pricing_engines.toml")]
        config: String,

        /// Bond trade file (repeatable)
        #[arg(short, long)]
        bond_file: Vec<String>,

        /// FX trade file (repeatable)
        #[arg(short, long)]
        fx_file: Vec<String>,

        /// Dispatch strategy
        #[arg(short, long, value_enum, default_value = "parallel")]
        mode: DispatchMode,

        /// Worker count for the parallel strategy
        /// (default: available hardware concurrency)
        #[arg(short, long)]
        workers: Option<usize>,
    },

    /// List the built-in pricing engine catalog
    Engines,
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Price {
            config,
            bond_file,
            fx_file,
            mode,
            workers,
        } => commands::price::run(&config, &bond_file, &fx_file, mode, workers),
        Commands::Engines => commands::engines::run(),
    }
}
