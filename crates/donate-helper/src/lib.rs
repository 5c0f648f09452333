//! # Donate Helper
//!
//! A minimal charity registry: a command-line tool and a small REST
//! endpoint that add charity records to a SQLite store and list them
//! back.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐       ┌──────────┐
//! │   CLI    │       │   HTTP   │
//! │ (donate) │       │  (Axum)  │
//! └────┬─────┘       └────┬─────┘
//!      │   ingestion /    │
//!      │ listing workflow │
//!      ▼                  ▼
//! ┌──────────────────────────┐
//! │  CharityStore contract   │
//! │  (donate-helper-core)    │
//! └────────────┬─────────────┘
//!              ▼
//!       ┌────────────┐
//!       │   SQLite    │
//!       └────────────┘
//! ```
//!
//! Entry points are thin adapters: they parse input, open a
//! [`sqlite_store::SqliteStore`], and hand off to the workflows in
//! `donate-helper-core`.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing and validation |
//! | [`db`] | SQLite connection pool with WAL mode, schema bootstrap |
//! | [`sqlite_store`] | SQLite implementation of the `CharityStore` contract |
//! | [`add`] | `donate add` — single-name ingestion |
//! | [`all`] | `donate all` — console listing |
//! | [`csv`] | `donate csv` — bulk ingestion from a delimited file |
//! | [`server`] | `donate api` — HTTP server (Axum) with CORS |

pub mod add;
pub mod all;
pub mod config;
pub mod csv;
pub mod db;
pub mod server;
pub mod sqlite_store;
