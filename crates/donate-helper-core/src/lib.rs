//! # Donate Helper Core
//!
//! Shared logic for the Donate Helper charity registry: the charity
//! record, the error taxonomy, the store abstraction, and the ingestion
//! and listing workflows.
//!
//! This crate contains no tokio, sqlx, filesystem I/O, or other
//! native-only dependencies. Entry points (CLI, HTTP server) and the
//! SQLite store adapter live in the `donate-helper` crate and call into
//! the workflows defined here.

pub mod error;
pub mod ingest;
pub mod list;
pub mod models;
pub mod store;
