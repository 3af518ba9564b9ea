//! Core data models for Teller
//!
//! This module contains the data structures that represent the banking
//! domain: accounts and monetary amounts.

pub mod account;
pub mod money;

pub use account::{Account, AccountSnapshot};
pub use money::Money;
