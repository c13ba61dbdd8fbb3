//! alphaic CLI binary.
//!
//! Provides a command-line interface for scoring alphas by their Information
//! Coefficient.

mod cmd;
mod data;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cmd::OutputFormat;
use std::{path::PathBuf, process};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "alphaic")]
#[command(about = "Information Coefficient evaluation for alpha signals", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the IC of an alpha against realized returns
    Ic {
        /// Alpha matrix (JSON, days x assets)
        #[arg(short, long)]
        alpha: PathBuf,

        /// Returns matrix (JSON, same shape as the alpha)
        #[arg(short, long)]
        returns: PathBuf,

        /// IC config file (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Evaluate days in parallel
        #[arg(long)]
        parallel: bool,

        /// Show the daily IC series and summary
        #[arg(short, long)]
        series: bool,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Score a random alpha against seeded synthetic returns
    Demo {
        /// Number of days
        #[arg(short, long, default_value = "60")]
        days: usize,

        /// Number of assets
        #[arg(short, long, default_value = "100")]
        assets: usize,

        /// Random seed
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

fn main() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: failed to install logger: {}", e);
    }

    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ic {
            alpha,
            returns,
            config,
            parallel,
            series,
            format,
        } => {
            cmd::ic::run_ic(&alpha, &returns, config.as_deref(), parallel, series, format)?;
        }
        Commands::Demo {
            days,
            assets,
            seed,
            format,
        } => {
            cmd::demo::run_demo(days, assets, seed, format)?;
        }
    }

    Ok(())
}
