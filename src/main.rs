//! # Läroplan Ingest CLI (`laroplan`)
//!
//! The `laroplan` binary drives the curriculum ingestion pipeline. It
//! provides commands for database initialization, source inspection, the
//! ingest run itself, and store statistics.
//!
//! ## Usage
//!
//! ```bash
//! laroplan --config ./config/laroplan.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `laroplan init` | Create the SQLite database and run schema migrations |
//! | `laroplan sources` | Show the source directory's status and file count |
//! | `laroplan ingest` | Chunk, embed, and store every curriculum file |
//! | `laroplan stats` | Summarize what the store contains |

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use laroplan_ingest::{config, ingest, migrate, sources, stats};

/// Läroplan Ingest CLI — batch ingestion of Swedish curriculum plans into
/// a searchable vector store.
///
/// All commands accept a `--config` flag pointing to a TOML configuration
/// file. See `config/laroplan.example.toml` for a full example.
#[derive(Parser)]
#[command(
    name = "laroplan",
    about = "Läroplan Ingest — chunk, embed, and store Swedish curriculum plans",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    #[arg(long, global = true, default_value = "./config/laroplan.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Initialize the database schema.
    ///
    /// Creates the SQLite database file and the chunks table. Idempotent —
    /// running it multiple times is safe.
    Init,

    /// Show the source directory's status and matching file count.
    Sources,

    /// Run the ingestion pipeline.
    ///
    /// Scans the source directory, segments each curriculum file into
    /// labeled chunks, embeds every chunk through the configured service,
    /// and stores chunk + metadata + vector. Per-chunk failures are logged
    /// and skipped; the run completes regardless.
    Ingest {
        /// Show per-file chunk counts without embedding or writing.
        #[arg(long)]
        dry_run: bool,

        /// Maximum number of files to process.
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Summarize the store: totals and per-subject/per-type breakdowns.
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
        Commands::Sources => {
            sources::list_sources(&cfg)?;
        }
        Commands::Ingest { dry_run, limit } => {
            migrate::run_migrations(&cfg).await?;
            ingest::run_ingest(&cfg, dry_run, limit).await?;
        }
        Commands::Stats => {
            stats::run_stats(&cfg).await?;
        }
    }

    Ok(())
}
