use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use teller_cli::cli;
use teller_cli::config::TellerPaths;
use teller_cli::ledger::Ledger;
use teller_cli::storage::LedgerStore;

#[derive(Parser)]
#[command(
    name = "teller",
    version,
    about = "Menu-driven bank account ledger with file-backed persistence",
    long_about = "Teller is a single-user command-line bank ledger. It manages \
                  account creation, deposits, withdrawals, transfers, and \
                  balance inquiries, with all state saved to a local file \
                  between runs."
)]
struct Cli {
    /// Directory holding the ledger data file
    #[arg(long, env = "TELLER_DATA_DIR")]
    data_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => TellerPaths::with_base_dir(dir),
        None => TellerPaths::new()?,
    };
    paths.ensure_directories()?;

    let store = LedgerStore::new(paths.ledger_file());
    let mut ledger = match Ledger::load(store.clone()) {
        Ok(ledger) => ledger,
        Err(err) => {
            // An unreadable data file is not fatal; the session starts empty
            // and the file is only rewritten on the next mutation.
            eprintln!("Warning: could not read saved ledger ({}). Starting with an empty ledger.", err);
            Ledger::empty(store)
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    cli::run(&mut ledger, stdin.lock(), stdout.lock())?;

    Ok(())
}
