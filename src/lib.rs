//! Teller - menu-driven bank account ledger
//!
//! This library provides the core functionality for the Teller CLI: a
//! single-user bank account ledger persisted to a local JSON file between
//! runs.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path management
//! - `error`: Custom error types
//! - `models`: Core data models (accounts, money)
//! - `storage`: JSON file storage layer
//! - `ledger`: The account registry and its operations
//! - `display`: Terminal output formatting
//! - `cli`: The interactive menu loop
//!
//! # Example
//!
//! ```rust,ignore
//! use teller_cli::ledger::Ledger;
//! use teller_cli::storage::LedgerStore;
//!
//! let store = LedgerStore::new(paths.ledger_file());
//! let mut ledger = Ledger::load(store)?;
//! ledger.create_account("A1", "Alice")?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod ledger;
pub mod models;
pub mod storage;

pub use error::TellerError;
