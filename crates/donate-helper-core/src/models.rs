//! Core data model for Donate Helper.
//!
//! A [`Charity`] is the single entity this system persists: five text
//! fields keyed by an opaque `id` assigned at construction time.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// Placeholder external charity identifier used by single-name ingestion.
pub const PLACEHOLDER_CHARITY_ID: &str = "2";

/// Placeholder external company identifier used by single-name ingestion.
pub const PLACEHOLDER_COMPANY_ID: &str = "2";

/// Placeholder website used when no URL is supplied.
pub const PLACEHOLDER_WEBSITE: &str = "https://en.wikipedia.org/wiki/Main_Page";

/// A charity record.
///
/// `id` is generated once at construction and never changes. Records are
/// created by the ingestion workflow, persisted once, and never updated
/// or deleted. Neither `charity_id` nor `company_id` is unique; both are
/// external identifiers carried through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Charity {
    pub id: String,
    pub charity_id: String,
    pub company_id: String,
    pub name: String,
    pub website: String,
}

impl Charity {
    /// Build a record from all four external fields.
    ///
    /// Fails with [`ValidationError::EmptyName`] when `name` is blank;
    /// every persisted record must carry a non-empty name.
    pub fn new(
        charity_id: &str,
        company_id: &str,
        name: &str,
        website: &str,
    ) -> Result<Self, ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            charity_id: charity_id.to_string(),
            company_id: company_id.to_string(),
            name: name.to_string(),
            website: website.to_string(),
        })
    }

    /// Build a record from a display name alone, filling the remaining
    /// fields with placeholders.
    pub fn with_name(name: &str) -> Result<Self, ValidationError> {
        Self::new(
            PLACEHOLDER_CHARITY_ID,
            PLACEHOLDER_COMPANY_ID,
            name,
            PLACEHOLDER_WEBSITE,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_name_keeps_input_name() {
        let charity = Charity::with_name("Oxfam").unwrap();
        assert_eq!(charity.name, "Oxfam");
        assert_eq!(charity.charity_id, PLACEHOLDER_CHARITY_ID);
        assert_eq!(charity.company_id, PLACEHOLDER_COMPANY_ID);
        assert_eq!(charity.website, PLACEHOLDER_WEBSITE);
    }

    #[test]
    fn test_empty_name_rejected() {
        assert_eq!(
            Charity::with_name("").unwrap_err(),
            ValidationError::EmptyName
        );
        assert_eq!(
            Charity::with_name("   ").unwrap_err(),
            ValidationError::EmptyName
        );
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Charity::with_name("A").unwrap();
        let b = Charity::with_name("A").unwrap();
        assert_ne!(a.id, b.id);
    }
}
