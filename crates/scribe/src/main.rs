//! Scribe CLI - Markup to Substack drafts.
//!
//! Provides commands for:
//! - `compile`: Compile markup to editor JSON
//! - `draft create|save|publish|list|showcase`: Manage drafts
//! - `post list|unpublish`: Manage published posts

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CompileArgs, DraftCommand, PostCommand};
use output::Output;

/// Scribe - Markup to Substack drafts.
#[derive(Parser)]
#[command(name = "scribe", version, about)]
struct Cli {
    /// Enable verbose output (INFO logging).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile markup to editor JSON.
    Compile(CompileArgs),
    /// Draft commands.
    #[command(subcommand)]
    Draft(DraftCommand),
    /// Published post commands.
    #[command(subcommand)]
    Post(PostCommand),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
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
        Commands::Compile(args) => args.execute(),
        Commands::Draft(cmd) => cmd.execute(),
        Commands::Post(cmd) => cmd.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
