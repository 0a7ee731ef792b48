//! Command-line interface for tomlgraft
//!
//! Provides `apply`, `tools`, and `completions` subcommands.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod apply;
mod completions;
mod tools;
mod utils;

/// Graft curated tool configuration into a project's pyproject.toml
#[derive(Parser)]
#[command(name = "tomlgraft")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge a source document into a project's pyproject.toml
    Apply(apply::ApplyArgs),

    /// List the tool names configured in a document
    Tools(tools::ToolsArgs),

    /// Generate shell completion scripts
    Completions(completions::CompletionsArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG always wins; absent it, --verbose raises the level to DEBUG
    // and the default stays at WARN so normal runs print nothing but errors.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Apply(args) => apply::run(args),
        Commands::Tools(args) => tools::run(args),
        Commands::Completions(args) => completions::run(args),
    }
}
