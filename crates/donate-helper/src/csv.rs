//! `donate csv <filepath>` — bulk ingestion from a delimited file.
//!
//! One record per line, four comma-separated fields
//! (`charity_id,company_id,name,website`), no header. Per-line failures
//! are printed to stderr after the full pass; only an unreadable input
//! file or a store connection failure aborts the command.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::Result;

use donate_helper_core::error::ValidationError;
use donate_helper_core::ingest;

use crate::config::Config;
use crate::sqlite_store::SqliteStore;

pub async fn run_csv(config: &Config, path: &Path) -> Result<()> {
    let file = File::open(path).map_err(|e| ValidationError::SourceUnavailable {
        reason: format!("{}: {}", path.display(), e),
    })?;

    let lines: Vec<String> = BufReader::new(file)
        .lines()
        .collect::<std::io::Result<_>>()
        .map_err(|e| ValidationError::SourceUnavailable {
            reason: format!("{}: {}", path.display(), e),
        })?;

    let store = SqliteStore::open(config).await?;
    let report = ingest::ingest_lines(&store, lines).await;

    println!("inserted {} charities", report.inserted);
    for failure in &report.errors {
        eprintln!("line {}: {}", failure.line, failure.error);
    }

    Ok(())
}
