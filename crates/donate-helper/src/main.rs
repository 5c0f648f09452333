//! # Donate Helper CLI (`donate`)
//!
//! The `donate` binary is the primary interface for the charity
//! registry. It provides commands for database initialization, single
//! and bulk ingestion, listing, and starting the REST API.
//!
//! ## Usage
//!
//! ```bash
//! donate --config ./config/donate.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `donate init` | Create the SQLite database and the charities table |
//! | `donate add <name>` | Add a single charity by display name |
//! | `donate all` | List all charities on the console |
//! | `donate csv <filepath>` | Add charities from a comma-delimited file |
//! | `donate api` | Start the REST API server |

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use donate_helper::{add, all, config, csv, db, server};

/// Donate Helper — a charity registry with a CLI and a small REST API.
///
/// All commands accept a `--config` flag pointing to a TOML configuration
/// file. See `config/donate.example.toml` for a full example.
#[derive(Parser)]
#[command(
    name = "donate",
    about = "Donate Helper — add charity records to a store and list them back",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    #[arg(long, global = true, default_value = "./config/donate.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Initialize the database schema.
    ///
    /// Creates the SQLite database file and the `charities` table.
    /// This command is idempotent — running it multiple times is safe.
    Init,

    /// Add a charity to the list.
    ///
    /// The remaining record fields are filled with placeholders; use
    /// `csv` to supply them explicitly.
    Add {
        /// Display name of the charity. Must not be empty.
        name: String,
    },

    /// List all charities.
    ///
    /// Prints one `position: name` line per record, in the order the
    /// store returns them.
    All,

    /// Add charities from a comma-delimited file.
    ///
    /// One record per line, four fields in fixed order:
    /// `charity_id,company_id,name,website`. No header, no escaping.
    /// Failing lines are reported after the full pass; they never abort
    /// the batch.
    Csv {
        /// Path to the input file.
        filepath: PathBuf,
    },

    /// Start the REST API server.
    ///
    /// Binds to the address configured in `[server].bind` and serves
    /// `GET /`, `GET /all`, and `GET /health`.
    Api,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_config(&cli.config)?;

    match cli.command {
        Commands::Init => {
            db::run_init(&cfg).await?;
        }
        Commands::Add { name } => {
            add::run_add(&cfg, &name).await?;
        }
        Commands::All => {
            all::run_all(&cfg).await?;
        }
        Commands::Csv { filepath } => {
            csv::run_csv(&cfg, &filepath).await?;
        }
        Commands::Api => {
            server::run_server(&cfg).await?;
        }
    }

    Ok(())
}
