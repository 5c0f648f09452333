//! SQLite-backed [`CharityStore`] implementation.
//!
//! Maps the two contract operations onto runtime sqlx queries against
//! the `charities` table. Driver errors are carried as strings inside
//! [`StoreError`] so the core crate never sees sqlx types.

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

use donate_helper_core::error::StoreError;
use donate_helper_core::models::Charity;
use donate_helper_core::store::{CharityStore, Listing};

use crate::config::Config;
use crate::db;

/// SQLite implementation of the [`CharityStore`] trait.
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Connect to the configured database and ensure the schema exists.
    ///
    /// Entry points construct one store per invocation and pass it into
    /// the workflows; there is no process-wide connection handle.
    pub async fn open(config: &Config) -> Result<Self, StoreError> {
        let pool = db::connect(config)
            .await
            .map_err(|e| StoreError::ConnectionFailed(e.to_string()))?;
        db::init_schema(&pool)
            .await
            .map_err(|e| StoreError::ConnectionFailed(e.to_string()))?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl CharityStore for SqliteStore {
    async fn insert(&self, charity: &Charity) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO charities (id, charity_id, company_id, name, website) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&charity.id)
        .bind(&charity.charity_id)
        .bind(&charity.company_id)
        .bind(&charity.name)
        .bind(&charity.website)
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::WriteFailed(e.to_string()))?;

        Ok(())
    }

    async fn find_all(&self) -> Result<Listing, StoreError> {
        // No ORDER BY: rows come back in rowid (insertion) order.
        let rows = sqlx::query("SELECT id, charity_id, company_id, name, website FROM charities")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| StoreError::QueryFailed(e.to_string()))?;

        let records: Vec<Charity> = rows
            .iter()
            .map(|row| Charity {
                id: row.get("id"),
                charity_id: row.get("charity_id"),
                company_id: row.get("company_id"),
                name: row.get("name"),
                website: row.get("website"),
            })
            .collect();

        Ok(Listing::from_records(records))
    }
}
