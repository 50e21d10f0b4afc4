//! Loan Ledger CLI
//!
//! A streaming action processor that reads loan bookkeeping lines and
//! outputs each merchant's outstanding debt.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- actions.txt > debts.csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use loan_ledger::{LedgerEngine, LedgerError, Result};
use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(LedgerError::MissingArgument);
    }

    let input_path = &args[1];
    let file = File::open(input_path)?;
    let reader = BufReader::new(file);

    let mut engine = LedgerEngine::new();
    engine.process_lines(reader)?;

    let stdout = io::stdout();
    let handle = stdout.lock();
    engine.write_report(handle)?;

    Ok(())
}
