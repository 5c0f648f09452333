//! Charity ingestion workflow.
//!
//! Two entry modes:
//!
//! 1. **Single name** — [`add_charity`] validates one display name,
//!    fills the remaining fields with placeholders, and inserts.
//! 2. **Bulk** — [`ingest_lines`] takes a sequence of comma-delimited
//!    lines (`charity_id,company_id,name,website`, no header, no
//!    escaping). A failure on one line is collected, not fatal; the pass
//!    always runs to the end and reports every failure in the
//!    [`IngestReport`].
//!
//! Opening the input source is the caller's job — the CLI adapter raises
//! [`ValidationError::SourceUnavailable`] when the file cannot be read
//! and never reaches this module.

use crate::error::{IngestError, ValidationError};
use crate::models::Charity;
use crate::store::CharityStore;

/// Number of fields in a bulk input line.
const LINE_FIELDS: usize = 4;

/// A failure on one bulk input line, with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineError {
    pub line: usize,
    pub error: IngestError,
}

/// Outcome of a bulk ingestion pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestReport {
    /// Records successfully persisted.
    pub inserted: usize,
    /// Per-line failures, in input order. Empty when every line succeeded.
    pub errors: Vec<LineError>,
}

impl IngestReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate a single name and persist the resulting record.
///
/// Performs no store write when validation fails.
pub async fn add_charity(
    store: &dyn CharityStore,
    name: &str,
) -> Result<Charity, IngestError> {
    let charity = Charity::with_name(name)?;
    store.insert(&charity).await?;
    Ok(charity)
}

/// Parse one bulk input line into a record.
///
/// Fields are positional: `charity_id,company_id,name,website`. Fewer
/// than four fields is a malformed line. Commas beyond the fourth field
/// are split off and dropped — the format has no escaping, matching the
/// split-and-index behavior of the original loader.
pub fn parse_line(line: &str) -> Result<Charity, ValidationError> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < LINE_FIELDS {
        return Err(ValidationError::MalformedLine {
            found: fields.len(),
        });
    }
    Charity::new(fields[0], fields[1], fields[2], fields[3])
}

/// Ingest a sequence of bulk input lines.
///
/// Every line is attempted; parse and insert failures are collected with
/// their 1-based line numbers and reported together once the pass
/// completes.
pub async fn ingest_lines<I>(store: &dyn CharityStore, lines: I) -> IngestReport
where
    I: IntoIterator<Item = String>,
{
    let mut inserted = 0;
    let mut errors = Vec::new();

    for (idx, line) in lines.into_iter().enumerate() {
        let line_no = idx + 1;
        let result = match parse_line(&line) {
            Ok(charity) => store
                .insert(&charity)
                .await
                .map_err(IngestError::from),
            Err(e) => Err(IngestError::from(e)),
        };
        match result {
            Ok(()) => inserted += 1,
            Err(error) => errors.push(LineError {
                line: line_no,
                error,
            }),
        }
    }

    IngestReport { inserted, errors }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use crate::store::Listing;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_add_charity_persists_name() {
        let store = InMemoryStore::new();
        let charity = add_charity(&store, "Oxfam").await.unwrap();
        assert_eq!(charity.name, "Oxfam");
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_add_charity_empty_name_writes_nothing() {
        let store = InMemoryStore::new();
        let err = add_charity(&store, "").await.unwrap_err();
        assert_eq!(
            err,
            IngestError::Validation(ValidationError::EmptyName)
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_parse_line_field_order() {
        let charity = parse_line("CH123,CO456,Red Cross,https://redcross.org").unwrap();
        assert_eq!(charity.charity_id, "CH123");
        assert_eq!(charity.company_id, "CO456");
        assert_eq!(charity.name, "Red Cross");
        assert_eq!(charity.website, "https://redcross.org");
    }

    #[test]
    fn test_parse_line_too_few_fields() {
        assert_eq!(
            parse_line("a,b,c").unwrap_err(),
            ValidationError::MalformedLine { found: 3 }
        );
        assert_eq!(
            parse_line("").unwrap_err(),
            ValidationError::MalformedLine { found: 1 }
        );
    }

    #[test]
    fn test_parse_line_extra_commas_dropped() {
        // No escaping: the fifth field onwards is discarded.
        let charity = parse_line("a,b,c,https://example.org,junk").unwrap();
        assert_eq!(charity.website, "https://example.org");
    }

    #[tokio::test]
    async fn test_bulk_all_well_formed() {
        let store = InMemoryStore::new();
        let report = ingest_lines(
            &store,
            lines(&[
                "1,1,Alpha,https://a.example",
                "2,2,Beta,https://b.example",
                "3,3,Gamma,https://c.example",
            ]),
        )
        .await;
        assert!(report.is_clean());
        assert_eq!(report.inserted, 3);
        assert_eq!(store.len(), 3);
    }

    #[tokio::test]
    async fn test_bulk_malformed_line_does_not_abort() {
        let store = InMemoryStore::new();
        let report = ingest_lines(
            &store,
            lines(&[
                "1,1,Alpha,https://a.example",
                "not,enough",
                "3,3,Gamma,https://c.example",
            ]),
        )
        .await;
        assert_eq!(report.inserted, 2);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].line, 2);
        assert_eq!(
            report.errors[0].error,
            IngestError::Validation(ValidationError::MalformedLine { found: 2 })
        );

        // Well-formed lines still persisted, in input order.
        match store.find_all().await.unwrap() {
            Listing::Records(records) => {
                assert_eq!(records[0].name, "Alpha");
                assert_eq!(records[1].name, "Gamma");
            }
            Listing::Empty => panic!("expected records"),
        }
    }

    #[tokio::test]
    async fn test_bulk_empty_name_collected() {
        let store = InMemoryStore::new();
        let report = ingest_lines(
            &store,
            lines(&["1,1,,https://a.example", "2,2,Beta,https://b.example"]),
        )
        .await;
        assert_eq!(report.inserted, 1);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].line, 1);
        assert_eq!(
            report.errors[0].error,
            IngestError::Validation(ValidationError::EmptyName)
        );
    }
}
