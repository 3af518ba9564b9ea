//! Storage layer for Teller
//!
//! Provides JSON file storage with atomic writes and a versioned on-disk
//! schema decoupled from the in-memory account type.

pub mod file_io;
pub mod ledger_file;

pub use file_io::{read_json, write_json_atomic};
pub use ledger_file::LedgerStore;
