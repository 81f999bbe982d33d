use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pekoe_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "pekoe")]
#[command(author, version, about = "A terminal single-page site viewer")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Page file to open (shorthand for `run --page`)
    #[arg(short = 'p', long = "page")]
    page: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run {
        /// Page file to open (falls back to config, then the built-in sample)
        #[arg(short = 'p', long)]
        page: Option<PathBuf>,
    },
    /// Validate a page file without opening it
    Check {
        /// Page file to validate
        #[arg(short = 'p', long)]
        page: Option<PathBuf>,
    },
    /// List the sections of a page with their anchors and rows
    Sections {
        /// Page file to inspect
        #[arg(short = 'p', long)]
        page: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = Arc::new(AppConfig::load()?);

    match cli.command {
        Some(Commands::Run { page }) => commands::run::run(config, page),
        None => commands::run::run(config, cli.page),
        Some(Commands::Check { page }) => commands::check::run(&config, page),
        Some(Commands::Sections { page }) => commands::sections::run(&config, page),
    }
}
