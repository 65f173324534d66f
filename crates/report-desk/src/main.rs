//! # Report Desk CLI (`reportd`)
//!
//! The `reportd` binary is the primary interface for Report Desk. It
//! provides commands for database initialization, running the HTTP API
//! server, and inspecting the stored corpus.
//!
//! ## Usage
//!
//! ```bash
//! reportd --config ./config/reportdesk.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `reportd init` | Create the SQLite database and run schema migrations |
//! | `reportd serve` | Start the JSON HTTP server |
//! | `reportd scan` | Print reports containing a word repeated 3+ times |
//! | `reportd stats` | Print project and report counts |

mod config;
mod db;
mod migrate;
mod scan;
mod server;
mod sqlite_store;
mod stats;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Report Desk CLI — a small HTTP API for projects and reports with
/// repeated-word report detection.
///
/// All commands accept a `--config` flag pointing to a TOML configuration
/// file. See `config/reportdesk.example.toml` for a full example.
#[derive(Parser)]
#[command(
    name = "reportd",
    about = "Report Desk — projects and reports API with repeated-word detection",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// Defaults to `./config/reportdesk.toml`. Database and server
    /// settings are read from this file.
    #[arg(long, global = true, default_value = "./config/reportdesk.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Initialize the database schema.
    ///
    /// Creates the SQLite database file and the projects and reports
    /// tables. This command is idempotent — running it multiple times
    /// is safe.
    Init,

    /// Start the JSON HTTP server.
    ///
    /// Binds to the address configured in `[server].bind` and serves
    /// the projects/reports API.
    Serve,

    /// Scan stored reports for repeated words.
    ///
    /// Prints every report whose text contains a word occurring at
    /// least three times — the same check the
    /// `/api/v1/reports/repeating-words` endpoint performs.
    Scan,

    /// Print database statistics.
    ///
    /// Shows project and report counts, database size, and how many
    /// reports currently trip the repeated-word detector.
    Stats,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg = config::load_config(&cli.config)?;

    match cli.command {
        Commands::Init => {
            migrate::run_migrations(&cfg).await?;
            println!("Database initialized successfully.");
        }
        Commands::Serve => {
            server::run_server(&cfg).await?;
        }
        Commands::Scan => {
            scan::run_scan(&cfg).await?;
        }
        Commands::Stats => {
            stats::run_stats(&cfg).await?;
        }
    }

    Ok(())
}
