//! Roster — README agent table sync CLI.
//!
//! # Usage
//!
//! ```text
//! roster sync [--root <path>] [--dry-run]
//! roster status [--root <path>] [--json]
//! roster diff [--root <path>]
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{diff::DiffArgs, status::StatusArgs, sync::SyncArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "roster",
    version,
    about = "Keep the README agent table in sync with per-agent model declarations",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rewrite divergent model cells in the README agent table.
    Sync(SyncArgs),

    /// Show per-agent sync state between agent files and the README.
    Status(StatusArgs),

    /// Show the unified diff of what sync would rewrite.
    Diff(DiffArgs),
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Sync(args) => args.run(),
        Commands::Status(args) => args.run(),
        Commands::Diff(args) => args.run(),
    }
}
