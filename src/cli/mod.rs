//! Interactive menu loop
//!
//! Thin I/O glue around the ledger: prompts for input, parses it into typed
//! arguments, calls the corresponding ledger operation, and renders the
//! result or error as text. All parsing and validation of raw input lives
//! here; the ledger only ever sees typed values.

use std::io::{self, BufRead, Write};

use crate::display::format_account_details;
use crate::error::TellerError;
use crate::ledger::Ledger;
use crate::models::Money;

const MENU: &str = "\nWelcome to Teller\n\
1. Create Account\n\
2. Deposit\n\
3. Withdraw\n\
4. Transfer\n\
5. Display Account Info\n\
6. Exit\n\
Choose an option: ";

/// Run the menu loop until the user exits
///
/// Reads one command at a time and blocks until the ledger call (including
/// persistence) returns. EOF on input behaves like Exit.
pub fn run<R: BufRead, W: Write>(ledger: &mut Ledger, mut input: R, mut output: W) -> io::Result<()> {
    loop {
        write!(output, "{}", MENU)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        match line.trim() {
            "1" => handle_create(ledger, &mut input, &mut output)?,
            "2" => handle_deposit(ledger, &mut input, &mut output)?,
            "3" => handle_withdraw(ledger, &mut input, &mut output)?,
            "4" => handle_transfer(ledger, &mut input, &mut output)?,
            "5" => handle_display(ledger, &mut input, &mut output)?,
            "6" => {
                writeln!(output, "Thank you for using Teller. Goodbye!")?;
                break;
            }
            _ => writeln!(output, "Invalid choice. Please try again.")?,
        }
    }

    Ok(())
}

fn handle_create<R: BufRead, W: Write>(
    ledger: &mut Ledger,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    let Some(number) = prompt(input, output, "Enter account number: ")? else {
        return Ok(());
    };
    let Some(holder) = prompt(input, output, "Enter account holder name: ")? else {
        return Ok(());
    };

    match ledger.create_account(&number, &holder) {
        Ok(_) => writeln!(output, "Account created successfully."),
        Err(err) => render_error(output, &err),
    }
}

fn handle_deposit<R: BufRead, W: Write>(
    ledger: &mut Ledger,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    let Some(number) = prompt(input, output, "Enter account number: ")? else {
        return Ok(());
    };
    let Some(amount) = prompt_amount(input, output, "Enter amount to deposit: ")? else {
        return Ok(());
    };

    match ledger.deposit(&number, amount) {
        Ok(_) => writeln!(output, "Deposited: {}", amount),
        Err(err) => render_error(output, &err),
    }
}

fn handle_withdraw<R: BufRead, W: Write>(
    ledger: &mut Ledger,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    let Some(number) = prompt(input, output, "Enter account number: ")? else {
        return Ok(());
    };
    let Some(amount) = prompt_amount(input, output, "Enter amount to withdraw: ")? else {
        return Ok(());
    };

    match ledger.withdraw(&number, amount) {
        Ok(_) => writeln!(output, "Withdrawn: {}", amount),
        Err(err) => render_error(output, &err),
    }
}

fn handle_transfer<R: BufRead, W: Write>(
    ledger: &mut Ledger,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    let Some(from) = prompt(input, output, "Enter source account number: ")? else {
        return Ok(());
    };
    let Some(to) = prompt(input, output, "Enter destination account number: ")? else {
        return Ok(());
    };
    let Some(amount) = prompt_amount(input, output, "Enter amount to transfer: ")? else {
        return Ok(());
    };

    match ledger.transfer(&from, &to, amount) {
        Ok(_) => writeln!(output, "Transferred {} from {} to {}", amount, from, to),
        Err(err) => render_error(output, &err),
    }
}

fn handle_display<R: BufRead, W: Write>(
    ledger: &mut Ledger,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    let Some(number) = prompt(input, output, "Enter account number: ")? else {
        return Ok(());
    };

    match ledger.lookup(&number) {
        Ok(snapshot) => write!(output, "{}", format_account_details(&snapshot)),
        Err(err) => render_error(output, &err),
    }
}

/// Print a prompt and read one trimmed line; `None` on EOF
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> io::Result<Option<String>> {
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

/// Prompt for a monetary amount; `None` on EOF or an unparseable amount
///
/// A parse failure is reported here and sends the user back to the menu;
/// the ledger never sees raw text.
fn prompt_amount<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> io::Result<Option<Money>> {
    let Some(raw) = prompt(input, output, message)? else {
        return Ok(None);
    };

    match Money::parse(&raw) {
        Ok(amount) => Ok(Some(amount)),
        Err(err) => {
            writeln!(output, "{}. Use a format like '10' or '10.50'.", err)?;
            Ok(None)
        }
    }
}

/// Render a ledger error as a user-facing message
///
/// A storage error after a mutation means the change is live in memory but
/// unsaved, so it is rendered as a warning rather than a failure.
fn render_error<W: Write>(output: &mut W, err: &TellerError) -> io::Result<()> {
    if err.is_storage() {
        writeln!(output, "Warning: {}", err)
    } else {
        writeln!(output, "{}", err)
    }
}
