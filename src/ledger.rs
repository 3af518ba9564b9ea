//! The account ledger
//!
//! In-memory registry of accounts keyed by account number, with create,
//! deposit, withdraw, transfer, and lookup operations. Every mutation is
//! followed by a full-map save through the [`LedgerStore`].
//!
//! The ledger exclusively owns its accounts; callers only ever see
//! [`AccountSnapshot`] values.

use std::collections::BTreeMap;

use crate::error::{TellerError, TellerResult};
use crate::models::{Account, AccountSnapshot, Money};
use crate::storage::LedgerStore;

/// Registry of all accounts plus persistence responsibility
pub struct Ledger {
    store: LedgerStore,
    accounts: BTreeMap<String, Account>,
}

/// Snapshots of both sides of a completed transfer
#[derive(Debug, Clone)]
pub struct TransferOutcome {
    pub source: AccountSnapshot,
    pub destination: AccountSnapshot,
}

impl Ledger {
    /// Load a ledger from the store's backing file
    ///
    /// A missing file yields an empty ledger. An unreadable file is an error;
    /// callers typically degrade to [`Ledger::empty`] and report it.
    pub fn load(store: LedgerStore) -> TellerResult<Self> {
        let accounts = store.load()?;
        Ok(Self { store, accounts })
    }

    /// Create an empty ledger backed by the store
    pub fn empty(store: LedgerStore) -> Self {
        Self {
            store,
            accounts: BTreeMap::new(),
        }
    }

    /// Number of accounts
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the ledger holds no accounts
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Create a new zero-balance account
    ///
    /// Fails with `DuplicateAccount` if the number is already taken; the
    /// existing account is never overwritten.
    pub fn create_account(&mut self, number: &str, holder_name: &str) -> TellerResult<AccountSnapshot> {
        if self.accounts.contains_key(number) {
            return Err(TellerError::duplicate_account(number));
        }

        let account = Account::new(number, holder_name);
        let snapshot = account.snapshot();
        self.accounts.insert(number.to_string(), account);
        self.persist()?;

        Ok(snapshot)
    }

    /// Deposit `amount` into the given account
    ///
    /// Amount validation is the account's job; the file is rewritten only
    /// when the balance actually changed.
    pub fn deposit(&mut self, number: &str, amount: Money) -> TellerResult<AccountSnapshot> {
        let account = self
            .accounts
            .get_mut(number)
            .ok_or_else(|| TellerError::account_not_found(number))?;

        account.deposit(amount)?;
        let snapshot = account.snapshot();
        self.persist()?;

        Ok(snapshot)
    }

    /// Withdraw `amount` from the given account
    pub fn withdraw(&mut self, number: &str, amount: Money) -> TellerResult<AccountSnapshot> {
        let account = self
            .accounts
            .get_mut(number)
            .ok_or_else(|| TellerError::account_not_found(number))?;

        account.withdraw(amount)?;
        let snapshot = account.snapshot();
        self.persist()?;

        Ok(snapshot)
    }

    /// Move `amount` from one account to another as a single logical unit
    ///
    /// Both accounts must exist and the source must cover the amount before
    /// anything is touched; on failure no balance changes. The withdraw and
    /// deposit are not atomic with respect to other ledger operations, which
    /// is safe single-threaded; a concurrent version would need one lock over
    /// both accounts, acquired in account-number order.
    ///
    /// A transfer from an account to itself is a successful no-op, funds
    /// permitting.
    pub fn transfer(
        &mut self,
        from_number: &str,
        to_number: &str,
        amount: Money,
    ) -> TellerResult<TransferOutcome> {
        if !amount.is_positive() {
            return Err(TellerError::InvalidAmount { amount });
        }

        let available = match self.accounts.get(from_number) {
            Some(account) => account.balance(),
            None => return Err(TellerError::account_not_found(from_number)),
        };

        if !self.accounts.contains_key(to_number) {
            return Err(TellerError::account_not_found(to_number));
        }

        if available < amount {
            return Err(TellerError::InsufficientFunds {
                needed: amount,
                available,
            });
        }

        if from_number != to_number {
            if let Some(source) = self.accounts.get_mut(from_number) {
                source.withdraw(amount)?;
            }
            if let Some(destination) = self.accounts.get_mut(to_number) {
                destination.deposit(amount)?;
            }
            self.persist()?;
        }

        Ok(TransferOutcome {
            source: self.lookup(from_number)?,
            destination: self.lookup(to_number)?,
        })
    }

    /// Read-only snapshot of one account
    pub fn lookup(&self, number: &str) -> TellerResult<AccountSnapshot> {
        self.accounts
            .get(number)
            .map(Account::snapshot)
            .ok_or_else(|| TellerError::account_not_found(number))
    }

    /// Snapshots of all accounts in account-number order
    pub fn list(&self) -> Vec<AccountSnapshot> {
        self.accounts.values().map(Account::snapshot).collect()
    }

    /// Save the full account map
    ///
    /// A storage error does not roll back the in-memory change that preceded
    /// it; the caller reports it and the session keeps its state.
    fn persist(&self) -> TellerResult<()> {
        self.store.save(&self.accounts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_ledger() -> (TempDir, Ledger) {
        let temp_dir = TempDir::new().unwrap();
        let store = LedgerStore::new(temp_dir.path().join("ledger.json"));
        let ledger = Ledger::load(store).unwrap();
        (temp_dir, ledger)
    }

    fn cents(amount: i64) -> Money {
        Money::from_cents(amount)
    }

    #[test]
    fn test_create_account() {
        let (_temp_dir, mut ledger) = create_test_ledger();

        let snapshot = ledger.create_account("A1", "Alice").unwrap();
        assert_eq!(snapshot.account_number, "A1");
        assert_eq!(snapshot.holder_name, "Alice");
        assert!(snapshot.balance.is_zero());
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_create_duplicate_rejected() {
        let (_temp_dir, mut ledger) = create_test_ledger();

        ledger.create_account("A1", "Alice").unwrap();
        ledger.deposit("A1", cents(5000)).unwrap();

        let result = ledger.create_account("A1", "Mallory");
        assert!(matches!(
            result,
            Err(TellerError::DuplicateAccount { .. })
        ));

        // Original untouched: same holder, same balance
        let alice = ledger.lookup("A1").unwrap();
        assert_eq!(alice.holder_name, "Alice");
        assert_eq!(alice.balance, cents(5000));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_deposit_unknown_account() {
        let (_temp_dir, mut ledger) = create_test_ledger();

        let result = ledger.deposit("Z9", cents(100));
        assert!(matches!(result, Err(TellerError::AccountNotFound { .. })));
    }

    #[test]
    fn test_withdraw_unknown_account() {
        let (_temp_dir, mut ledger) = create_test_ledger();

        let result = ledger.withdraw("Z9", cents(100));
        assert!(matches!(result, Err(TellerError::AccountNotFound { .. })));
    }

    #[test]
    fn test_transfer_conserves_total() {
        let (_temp_dir, mut ledger) = create_test_ledger();

        ledger.create_account("A1", "Alice").unwrap();
        ledger.create_account("B1", "Bob").unwrap();
        ledger.deposit("A1", cents(10000)).unwrap();
        ledger.deposit("B1", cents(2500)).unwrap();

        let before: i64 = ledger.list().iter().map(|s| s.balance.cents()).sum();

        let outcome = ledger.transfer("A1", "B1", cents(4000)).unwrap();
        assert_eq!(outcome.source.balance, cents(6000));
        assert_eq!(outcome.destination.balance, cents(6500));

        let after: i64 = ledger.list().iter().map(|s| s.balance.cents()).sum();
        assert_eq!(before, after);
    }

    #[test]
    fn test_transfer_missing_either_side() {
        let (_temp_dir, mut ledger) = create_test_ledger();
        ledger.create_account("A1", "Alice").unwrap();
        ledger.deposit("A1", cents(10000)).unwrap();

        let result = ledger.transfer("A1", "Z9", cents(100));
        assert!(matches!(result, Err(TellerError::AccountNotFound { .. })));

        let result = ledger.transfer("Z9", "A1", cents(100));
        assert!(matches!(result, Err(TellerError::AccountNotFound { .. })));

        // No partial mutation
        assert_eq!(ledger.lookup("A1").unwrap().balance, cents(10000));
    }

    #[test]
    fn test_transfer_insufficient_funds_no_mutation() {
        let (_temp_dir, mut ledger) = create_test_ledger();
        ledger.create_account("A1", "Alice").unwrap();
        ledger.create_account("B1", "Bob").unwrap();
        ledger.deposit("A1", cents(1000)).unwrap();

        let result = ledger.transfer("A1", "B1", cents(5000));
        assert!(matches!(
            result,
            Err(TellerError::InsufficientFunds { .. })
        ));

        assert_eq!(ledger.lookup("A1").unwrap().balance, cents(1000));
        assert!(ledger.lookup("B1").unwrap().balance.is_zero());
    }

    #[test]
    fn test_transfer_rejects_non_positive_amount() {
        let (_temp_dir, mut ledger) = create_test_ledger();
        ledger.create_account("A1", "Alice").unwrap();
        ledger.create_account("B1", "Bob").unwrap();
        ledger.deposit("A1", cents(1000)).unwrap();

        let result = ledger.transfer("A1", "B1", cents(-100));
        assert!(matches!(result, Err(TellerError::InvalidAmount { .. })));

        let result = ledger.transfer("A1", "B1", Money::zero());
        assert!(matches!(result, Err(TellerError::InvalidAmount { .. })));

        assert_eq!(ledger.lookup("A1").unwrap().balance, cents(1000));
    }

    #[test]
    fn test_self_transfer_is_noop() {
        let (_temp_dir, mut ledger) = create_test_ledger();
        ledger.create_account("A1", "Alice").unwrap();
        ledger.deposit("A1", cents(1000)).unwrap();

        let outcome = ledger.transfer("A1", "A1", cents(400)).unwrap();
        assert_eq!(outcome.source.balance, cents(1000));
        assert_eq!(outcome.destination.balance, cents(1000));

        let result = ledger.transfer("A1", "A1", cents(5000));
        assert!(matches!(
            result,
            Err(TellerError::InsufficientFunds { .. })
        ));
    }

    #[test]
    fn test_lookup_unknown_account() {
        let (_temp_dir, ledger) = create_test_ledger();
        let result = ledger.lookup("Z9");
        assert!(matches!(result, Err(TellerError::AccountNotFound { .. })));
    }

    #[test]
    fn test_list_in_account_number_order() {
        let (_temp_dir, mut ledger) = create_test_ledger();
        ledger.create_account("C1", "Carol").unwrap();
        ledger.create_account("A1", "Alice").unwrap();
        ledger.create_account("B1", "Bob").unwrap();

        let numbers: Vec<_> = ledger
            .list()
            .into_iter()
            .map(|s| s.account_number)
            .collect();
        assert_eq!(numbers, vec!["A1", "B1", "C1"]);
    }

    #[test]
    fn test_state_survives_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.json");

        {
            let mut ledger = Ledger::load(LedgerStore::new(path.clone())).unwrap();
            ledger.create_account("A1", "Alice").unwrap();
            ledger.create_account("B1", "Bob").unwrap();
            ledger.deposit("A1", cents(10000)).unwrap();
            ledger.transfer("A1", "B1", cents(4000)).unwrap();
        }

        let ledger = Ledger::load(LedgerStore::new(path)).unwrap();
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.lookup("A1").unwrap().balance, cents(6000));
        assert_eq!(ledger.lookup("B1").unwrap().balance, cents(4000));
        assert_eq!(ledger.lookup("A1").unwrap().holder_name, "Alice");
    }

    #[test]
    fn test_rejected_operation_does_not_save() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.json");

        let mut ledger = Ledger::load(LedgerStore::new(path.clone())).unwrap();
        ledger.create_account("A1", "Alice").unwrap();
        assert!(path.exists());

        // If a rejected deposit triggered a save, the file would reappear
        std::fs::remove_file(&path).unwrap();
        let result = ledger.deposit("A1", cents(-500));
        assert!(matches!(result, Err(TellerError::InvalidAmount { .. })));
        assert!(!path.exists());

        ledger.deposit("A1", cents(500)).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_save_failure_keeps_in_memory_state() {
        let temp_dir = TempDir::new().unwrap();
        // A directory at the target path makes every save fail
        let path = temp_dir.path().join("ledger.json");
        std::fs::create_dir(&path).unwrap();

        let mut ledger = Ledger::empty(LedgerStore::new(path));
        let result = ledger.create_account("A1", "Alice");
        assert!(matches!(result, Err(TellerError::Storage(_))));

        // The mutation is not rolled back
        assert_eq!(ledger.len(), 1);
        assert!(ledger.lookup("A1").is_ok());
    }

    #[test]
    fn test_balances_never_negative() {
        let (_temp_dir, mut ledger) = create_test_ledger();
        ledger.create_account("A1", "Alice").unwrap();
        ledger.create_account("B1", "Bob").unwrap();
        ledger.deposit("A1", cents(100)).unwrap();

        let _ = ledger.withdraw("A1", cents(200));
        let _ = ledger.withdraw("B1", cents(1));
        let _ = ledger.transfer("A1", "B1", cents(500));
        let _ = ledger.deposit("B1", cents(-50));

        for snapshot in ledger.list() {
            assert!(!snapshot.balance.is_negative());
        }
    }

    #[test]
    fn test_full_session_scenario() {
        let (_temp_dir, mut ledger) = create_test_ledger();

        ledger.create_account("A1", "Alice").unwrap();
        ledger.deposit("A1", cents(10000)).unwrap();
        assert_eq!(ledger.lookup("A1").unwrap().balance, cents(10000));

        ledger.create_account("B1", "Bob").unwrap();
        ledger.transfer("A1", "B1", cents(4000)).unwrap();
        assert_eq!(ledger.lookup("A1").unwrap().balance, cents(6000));
        assert_eq!(ledger.lookup("B1").unwrap().balance, cents(4000));

        let result = ledger.withdraw("A1", cents(100000));
        assert!(matches!(
            result,
            Err(TellerError::InsufficientFunds { .. })
        ));
        assert_eq!(ledger.lookup("A1").unwrap().balance, cents(6000));

        let result = ledger.deposit("A1", cents(-500));
        assert!(matches!(result, Err(TellerError::InvalidAmount { .. })));
        assert_eq!(ledger.lookup("A1").unwrap().balance, cents(6000));

        let result = ledger.lookup("Z9");
        assert!(matches!(result, Err(TellerError::AccountNotFound { .. })));
    }
}
