//! pagemap CLI - multilingual documentation navigation.
//!
//! Provides commands for:
//! - `check`: Validate every configured page map and report translation gaps
//! - `resolve`: Resolve a locale and route into a navigation context
//! - `index`: Emit search index entries
//! - `locales`: List configured locales

mod commands;
mod error;
mod loader;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, IndexArgs, LocalesArgs, ResolveArgs};
use output::Output;

/// pagemap - multilingual documentation navigation.
#[derive(Parser)]
#[command(name = "pagemap", version, about)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate page maps and report missing translations.
    Check(CheckArgs),
    /// Resolve a locale and route into a navigation context.
    Resolve(ResolveArgs),
    /// Print search index entries as JSON.
    Index(IndexArgs),
    /// List configured locales.
    Locales(LocalesArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG (ERROR when unset)
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Check(args) => args.execute(),
        Commands::Resolve(args) => args.execute(),
        Commands::Index(args) => args.execute(),
        Commands::Locales(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
