//! Custom error types for Teller
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::Money;

/// The main error type for Teller operations
#[derive(Error, Debug)]
pub enum TellerError {
    /// An account with the given number already exists
    #[error("Account already exists: {number}")]
    DuplicateAccount { number: String },

    /// No account with the given number
    #[error("Account not found: {number}")]
    AccountNotFound { number: String },

    /// Deposit/withdraw/transfer amount was not positive
    #[error("Invalid amount: {amount}. Amount must be positive.")]
    InvalidAmount { amount: Money },

    /// Withdrawal or transfer exceeds the available balance
    #[error("Insufficient funds: need {needed}, have {available}")]
    InsufficientFunds { needed: Money, available: Money },

    /// File I/O or serialization errors from the persistence layer
    #[error("Storage error: {0}")]
    Storage(String),
}

impl TellerError {
    /// Create a "not found" error for an account number
    pub fn account_not_found(number: impl Into<String>) -> Self {
        Self::AccountNotFound {
            number: number.into(),
        }
    }

    /// Create a duplicate-account error for an account number
    pub fn duplicate_account(number: impl Into<String>) -> Self {
        Self::DuplicateAccount {
            number: number.into(),
        }
    }

    /// Check if this is a storage error
    ///
    /// The CLI renders storage errors after a mutation as warnings rather
    /// than failures, since the in-memory change is live but unsaved.
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

impl From<std::io::Error> for TellerError {
    fn from(err: std::io::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for TellerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

/// Result type alias for Teller operations
pub type TellerResult<T> = Result<T, TellerError>;
