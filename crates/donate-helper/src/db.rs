use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

use crate::config::Config;

pub async fn connect(config: &Config) -> Result<SqlitePool> {
    let db_path = &config.db.path;

    // Ensure parent directory exists
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let options = SqliteConnectOptions::from_str(&format!("sqlite:{}", db_path.display()))?
        .create_if_missing(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Create the `charities` table. Idempotent; safe to run on every start.
///
/// Rows are read back in rowid (insertion) order — `find_all` applies no
/// ORDER BY, so this is the store-defined order callers see.
pub async fn init_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS charities (
            id TEXT PRIMARY KEY,
            charity_id TEXT NOT NULL,
            company_id TEXT NOT NULL,
            name TEXT NOT NULL,
            website TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn run_init(config: &Config) -> Result<()> {
    let pool = connect(config).await?;
    init_schema(&pool).await?;
    pool.close().await;
    println!("Database initialized successfully.");
    Ok(())
}
