//! `donate add <name>` — single-name ingestion.

use anyhow::Result;

use donate_helper_core::ingest;

use crate::config::Config;
use crate::sqlite_store::SqliteStore;

pub async fn run_add(config: &Config, name: &str) -> Result<()> {
    let store = SqliteStore::open(config).await?;
    let charity = ingest::add_charity(&store, name).await?;
    println!("Added charity '{}' ({})", charity.name, charity.id);
    Ok(())
}
