//! tripledger - Trip budgeting from the command line
//!
//! This library provides the core functionality for the tripledger
//! application: a single-trip expense ledger with per-category (or trip-wide)
//! budgets, derived spending aggregates, and local JSON persistence.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (categories, expenses, the snapshot blob)
//! - `storage`: JSON file storage layer (the persistence adapter)
//! - `services`: Business logic layer (the ledger store)
//! - `reports`: Derived aggregates (totals, remaining, spending breakdown)
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//! - `export`: CSV export
//!
//! # Example
//!
//! ```rust,ignore
//! use tripledger::config::{paths::LedgerPaths, settings::Settings};
//! use tripledger::services::Ledger;
//! use tripledger::storage::SnapshotStore;
//!
//! let paths = LedgerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let ledger = Ledger::open(SnapshotStore::new(paths.snapshot_file()), settings)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::LedgerError;
