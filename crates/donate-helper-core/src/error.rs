//! Error taxonomy for the registry workflows.
//!
//! Two families: [`ValidationError`] for bad input and [`StoreError`] for
//! persistence failures. The "no documents" outcome is deliberately not
//! here — it is an expected result, modeled as
//! [`Listing::Empty`](crate::store::Listing::Empty).

use thiserror::Error;

/// Input validation failures.
///
/// These abort the operation that raised them, except inside bulk
/// ingestion where per-line failures are collected instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("cannot add a charity with no name")]
    EmptyName,

    #[error("expected 4 comma-separated fields, found {found}")]
    MalformedLine { found: usize },

    #[error("cannot open input source: {reason}")]
    SourceUnavailable { reason: String },
}

/// Persistence-layer failures surfaced through the [`CharityStore`]
/// contract.
///
/// Variants carry the underlying driver message as a string so the core
/// crate stays free of driver dependencies.
///
/// [`CharityStore`]: crate::store::CharityStore
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("store connection failed: {0}")]
    ConnectionFailed(String),

    #[error("store write failed: {0}")]
    WriteFailed(String),

    #[error("store query failed: {0}")]
    QueryFailed(String),
}

/// Either failure family, as produced by the ingestion workflow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IngestError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
