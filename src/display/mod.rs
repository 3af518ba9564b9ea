//! Account display formatting
//!
//! Formats account snapshots for terminal output.

use crate::models::AccountSnapshot;

/// Format a single account's details
pub fn format_account_details(snapshot: &AccountSnapshot) -> String {
    let mut output = String::new();

    output.push_str(&format!("Account Number: {}\n", snapshot.account_number));
    output.push_str(&format!("Account Holder: {}\n", snapshot.holder_name));
    output.push_str(&format!("Balance:        {}\n", snapshot.balance));

    output
}
