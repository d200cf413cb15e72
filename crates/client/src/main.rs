//! Arena command-line client.
//!
//! Loads a scenario snapshot, runs a strategy for one or every living hero,
//! and prints the chosen moves as JSON on stdout. Logs go to stderr and,
//! when `ARENA_LOG_DIR` is set, to a file in that directory.
//!
//! # Examples
//!
//! ```bash
//! arena decide crates/client/scenarios/skirmish.ron --pretty
//! arena decide skirmish.ron --hero 2 --strategy careful_assassin
//! RUST_LOG=arena_runtime=debug arena decide skirmish.ron --config arena.toml
//! ```

mod commands;
mod logging;

use anyhow::Result;
use clap::Parser;
use commands::{Decide, Strategies};

/// Per-turn move decisions for arena heroes
#[derive(Parser)]
#[command(name = "arena")]
#[command(about = "Decide hero moves for an arena snapshot", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Decide moves for a scenario file
    Decide(Decide),

    /// List the available strategy names
    Strategies(Strategies),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let _guard = logging::setup_logging(&logging::LogConfig::from_env())?;

    match cli.command {
        Command::Decide(cmd) => cmd.execute().await,
        Command::Strategies(cmd) => cmd.execute(),
    }
}
