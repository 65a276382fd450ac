//! Meridian CLI - Session-store maintenance tools.
//!
//! # Usage
//!
//! ```bash
//! # Create the sessions table
//! meridian-cli migrate
//!
//! # Delete expired sessions (run from cron)
//! meridian-cli prune
//! ```
//!
//! # Commands
//!
//! - `migrate` - Create the tower-sessions table
//! - `prune` - Delete expired sessions

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "meridian-cli")]
#[command(author, version, about = "Meridian Symphony CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the sessions table
    Migrate,
    /// Delete expired sessions
    Prune,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Prune => commands::prune::run().await?,
    }
    Ok(())
}
