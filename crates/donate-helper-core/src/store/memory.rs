//! In-memory [`CharityStore`] implementation for testing.
//!
//! Uses a `Vec` behind `std::sync::RwLock` for thread safety. Insertion
//! order is preserved, so `find_all` returns records in the order they
//! were written.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::Charity;

use super::{CharityStore, Listing};

/// In-memory store for tests and embedders.
pub struct InMemoryStore {
    records: RwLock<Vec<Charity>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.records.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CharityStore for InMemoryStore {
    async fn insert(&self, charity: &Charity) -> Result<(), StoreError> {
        let mut records = self.records.write().unwrap();
        records.push(charity.clone());
        Ok(())
    }

    async fn find_all(&self) -> Result<Listing, StoreError> {
        let records = self.records.read().unwrap();
        Ok(Listing::from_records(records.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_store_yields_empty_listing() {
        let store = InMemoryStore::new();
        assert_eq!(store.find_all().await.unwrap(), Listing::Empty);
    }

    #[tokio::test]
    async fn test_insertion_order_preserved() {
        let store = InMemoryStore::new();
        let a = Charity::with_name("A").unwrap();
        let b = Charity::with_name("B").unwrap();
        store.insert(&a).await.unwrap();
        store.insert(&b).await.unwrap();

        match store.find_all().await.unwrap() {
            Listing::Records(records) => {
                assert_eq!(records.len(), 2);
                assert_eq!(records[0].name, "A");
                assert_eq!(records[1].name, "B");
            }
            Listing::Empty => panic!("expected records"),
        }
    }
}
