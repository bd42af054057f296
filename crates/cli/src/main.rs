//! Hotel booking CLI - seeding and maintenance tools.
//!
//! # Usage
//!
//! ```bash
//! # Load hotels from a YAML file
//! hb-cli seed hotels crates/cli/seed/hotels.yaml
//!
//! # Replace every existing hotel with the file's contents
//! hb-cli seed hotels crates/cli/seed/hotels.yaml --clear
//!
//! # Check that MongoDB is reachable
//! hb-cli ping
//! ```
//!
//! # Commands
//!
//! - `seed hotels` - Insert hotels from YAML
//! - `ping` - Round-trip a ping to the configured database

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "hb-cli")]
#[command(author, version, about = "Hotel booking CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed the database
    Seed {
        #[command(subcommand)]
        target: SeedTarget,
    },
    /// Check connectivity to MongoDB
    Ping,
}

#[derive(Subcommand)]
enum SeedTarget {
    /// Insert hotels from a YAML file
    Hotels {
        /// Path to the YAML file
        file: String,

        /// Delete all existing hotels first
        #[arg(long)]
        clear: bool,
    },
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
        Commands::Seed { target } => match target {
            SeedTarget::Hotels { file, clear } => commands::seed::hotels(&file, clear).await?,
        },
        Commands::Ping => commands::ping::run().await?,
    }
    Ok(())
}
