//! On-disk ledger format and the load/save adapter
//!
//! The persisted schema is a versioned record list kept separate from the
//! in-memory `Account` type, so the file format can evolve independently of
//! the runtime representation.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::TellerResult;
use crate::models::{Account, Money};

use super::file_io::{read_json, write_json_atomic};

/// Current on-disk format version
const LEDGER_FILE_VERSION: u32 = 1;

/// Serializable ledger file contents
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct LedgerFile {
    version: u32,
    accounts: Vec<AccountRecord>,
}

/// One persisted account record
#[derive(Debug, Clone, Serialize, Deserialize)]
struct AccountRecord {
    account_number: String,
    holder_name: String,
    balance: Money,
}

impl From<&Account> for AccountRecord {
    fn from(account: &Account) -> Self {
        Self {
            account_number: account.account_number().to_string(),
            holder_name: account.holder_name().to_string(),
            balance: account.balance(),
        }
    }
}

impl From<AccountRecord> for Account {
    fn from(record: AccountRecord) -> Self {
        Account::from_parts(record.account_number, record.holder_name, record.balance)
    }
}

/// Persistence adapter for the account map
///
/// Loads the full map at startup and overwrites the full file on save.
#[derive(Debug, Clone)]
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    /// Create a store backed by the given file path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all accounts from disk
    ///
    /// A missing file yields an empty map. A present but unreadable file is
    /// an error; the caller decides whether to degrade to an empty ledger.
    pub fn load(&self) -> TellerResult<BTreeMap<String, Account>> {
        let file: LedgerFile = read_json(&self.path)?;

        let mut accounts = BTreeMap::new();
        for record in file.accounts {
            // Key the map by the record's own number so the map-key invariant
            // holds even for a hand-edited file
            accounts.insert(record.account_number.clone(), Account::from(record));
        }

        Ok(accounts)
    }

    /// Save all accounts to disk with an atomic full-file rewrite
    pub fn save(&self, accounts: &BTreeMap<String, Account>) -> TellerResult<()> {
        let file = LedgerFile {
            version: LEDGER_FILE_VERSION,
            accounts: accounts.values().map(AccountRecord::from).collect(),
        };

        write_json_atomic(&self.path, &file)
    }
}
