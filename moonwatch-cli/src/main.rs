//! Moonwatch CLI - moon phases at the terminal
//!
//! Thin command surface over the moonwatch library: parses arguments,
//! initializes logging, and hands results to the terminal presentation
//! adapter.

mod commands;
mod error;
mod render;

use clap::{Parser, Subcommand};
use console::style;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use commands::cache::CacheAction;
use commands::phases::{self, Lookup};
use error::CliError;

#[derive(Debug, Parser)]
#[command(name = "moonwatch", version, about = "Moon phases for any date, cached locally")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show today's moon phase
    Today,
    /// Show the moon phase for the next seven days
    Week,
    /// Show the moon phase for a specific date (e.g. 2026-08-23)
    Date {
        /// The date to look up
        date: String,
    },
    /// Inspect or clear the local phase cache
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },
}

#[tokio::main]
async fn main() {
    // Log to stderr so phase output on stdout stays pipeable.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli.command).await {
        eprintln!("{} {}", style("error:").red().bold(), e);
        std::process::exit(1);
    }
}

async fn run(command: Command) -> Result<(), CliError> {
    debug!(?command, "Running command");
    match command {
        Command::Today => phases::run(Lookup::Today).await,
        Command::Week => phases::run(Lookup::Week).await,
        Command::Date { date } => phases::run(Lookup::Date(date)).await,
        Command::Cache { action } => commands::cache::run(action),
    }
}
