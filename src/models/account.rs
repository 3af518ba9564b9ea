//! Account model
//!
//! Represents one customer's identity and balance record. Amount validation
//! lives here; uniqueness of account numbers is enforced by the ledger.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{TellerError, TellerResult};

use super::money::Money;

/// A bank account: number, holder name, and current balance
///
/// `account_number` and `holder_name` are immutable after creation; the
/// balance is the sole mutable field and never goes negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    account_number: String,
    holder_name: String,
    balance: Money,
}

impl Account {
    /// Create a new account with a zero balance
    ///
    /// The strings themselves are not validated; empty or duplicate holder
    /// names are allowed.
    pub fn new(account_number: impl Into<String>, holder_name: impl Into<String>) -> Self {
        Self {
            account_number: account_number.into(),
            holder_name: holder_name.into(),
            balance: Money::zero(),
        }
    }

    /// Get the account number
    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    /// Get the holder name
    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    /// Get the current balance
    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Add `amount` to the balance
    ///
    /// Rejects non-positive amounts with `InvalidAmount`, leaving the balance
    /// unchanged. There is no upper bound.
    pub fn deposit(&mut self, amount: Money) -> TellerResult<()> {
        if !amount.is_positive() {
            return Err(TellerError::InvalidAmount { amount });
        }

        self.balance += amount;
        Ok(())
    }

    /// Subtract `amount` from the balance
    ///
    /// Rejects non-positive amounts with `InvalidAmount` and amounts above
    /// the current balance with `InsufficientFunds`; the balance is unchanged
    /// in both cases.
    pub fn withdraw(&mut self, amount: Money) -> TellerResult<()> {
        if !amount.is_positive() {
            return Err(TellerError::InvalidAmount { amount });
        }

        if amount > self.balance {
            return Err(TellerError::InsufficientFunds {
                needed: amount,
                available: self.balance,
            });
        }

        self.balance -= amount;
        Ok(())
    }

    /// Produce a read-only snapshot for display
    pub fn snapshot(&self) -> AccountSnapshot {
        AccountSnapshot {
            account_number: self.account_number.clone(),
            holder_name: self.holder_name.clone(),
            balance: self.balance,
        }
    }

    /// Restore an account from persisted state
    pub(crate) fn from_parts(account_number: String, holder_name: String, balance: Money) -> Self {
        Self {
            account_number,
            holder_name,
            balance,
        }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.account_number, self.holder_name)
    }
}

/// Read-only view of an account at a point in time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSnapshot {
    pub account_number: String,
    pub holder_name: String,
    pub balance: Money,
}
