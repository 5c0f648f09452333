//! Charity listing workflow.
//!
//! Thin by design: fetch everything through the store contract, then
//! shape the result for the caller's surface. Console output is 1-based
//! `position: name` lines in store-returned order; the API surface uses
//! the raw record sequence. An empty store is a normal outcome with its
//! own messaging per surface, never an error.

use crate::error::StoreError;
use crate::models::Charity;
use crate::store::{CharityStore, Listing};

/// Empty-store message shown on the console.
pub const NO_CHARITIES_CONSOLE: &str = "No charities are present";

/// Empty-store message returned to API callers.
pub const NO_CHARITIES_API: &str = "no charities registered";

/// Fetch all records through the store contract.
pub async fn list_charities(store: &dyn CharityStore) -> Result<Listing, StoreError> {
    store.find_all().await
}

/// Render records as console lines: `1: A`, `2: B`, ...
///
/// Positions are 1-based, assigned in the order the store returned the
/// records. No re-sorting.
pub fn console_lines(records: &[Charity]) -> Vec<String> {
    records
        .iter()
        .enumerate()
        .map(|(i, charity)| format!("{}: {}", i + 1, charity.name))
        .collect()
}
