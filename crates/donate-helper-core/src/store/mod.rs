//! Storage abstraction for Donate Helper.
//!
//! The [`CharityStore`] trait defines the two persistence operations the
//! workflows need, enabling pluggable backends (SQLite, in-memory).
//!
//! Implementations must be `Send + Sync` to work with async runtimes.

pub mod memory;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::Charity;

/// Result of a `find_all` query.
///
/// An empty store is a distinguishable, non-error outcome: callers give
/// it dedicated user-facing messaging instead of propagating a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    /// The query succeeded and matched zero records.
    Empty,
    /// All records, in store-defined order. Never an empty vector.
    Records(Vec<Charity>),
}

impl Listing {
    /// Wrap a record sequence, collapsing zero records into
    /// [`Listing::Empty`].
    pub fn from_records(records: Vec<Charity>) -> Self {
        if records.is_empty() {
            Listing::Empty
        } else {
            Listing::Records(records)
        }
    }
}

/// Abstract persistence backend for charity records.
///
/// # Operations
///
/// | Method | Purpose |
/// |--------|---------|
/// | [`insert`](CharityStore::insert) | Persist one record |
/// | [`find_all`](CharityStore::find_all) | Return every record, in store-defined order |
#[async_trait]
pub trait CharityStore: Send + Sync {
    /// Persist one record.
    async fn insert(&self, charity: &Charity) -> Result<(), StoreError>;

    /// Return all records in store-defined order (no sort guarantee).
    async fn find_all(&self) -> Result<Listing, StoreError>;
}
