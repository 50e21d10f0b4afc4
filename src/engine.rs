//! Core loan bookkeeping engine.
//!
//! Applies operations in input order and maintains per-merchant, per-loan
//! outstanding balances. The engine streams input line by line; bad lines
//! are logged and skipped so a single malformed action never aborts a batch.

use crate::error::{LedgerError, Result};
use crate::loan::Loan;
use crate::money::Cents;
use crate::operation::Operation;
use log::{debug, warn};
use serde::Serialize;
use std::collections::HashMap;
use std::io::{BufRead, BufReader, Read, Write};

/// One row of the final debt report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DebtEntry {
    /// Merchant with outstanding debt.
    pub merchant: String,

    /// Sum of the merchant's loan balances, in cents. Strictly positive.
    pub outstanding: Cents,
}

/// The loan bookkeeping engine.
///
/// Owns the ledger: a map from merchant ID to that merchant's loans, keyed
/// by loan ID. Loan IDs are unique within a merchant only; two merchants may
/// reuse the same loan ID for unrelated loans.
///
/// Operations are applied strictly in the order they arrive. Order is
/// semantically significant: increasing a loan before or after a repayment
/// changes the outcome.
///
/// # Output Ordering
///
/// The debt report is sorted by merchant ID in ascending lexicographic order
/// to ensure deterministic, reproducible output.
pub struct LedgerEngine {
    /// Loans indexed by merchant ID, then loan ID.
    ledger: HashMap<String, HashMap<String, Loan>>,
}

impl LedgerEngine {
    /// Creates a new engine with an empty ledger.
    pub fn new() -> Self {
        LedgerEngine {
            ledger: HashMap::new(),
        }
    }

    /// Processes action lines from a reader in streaming fashion.
    ///
    /// Each non-blank line has the form `ACTION: arg1, arg2, ...`. Lines
    /// that fail to parse or apply are logged at warn level and skipped;
    /// only I/O failures abort the batch.
    pub fn process_lines<R: Read>(&mut self, reader: R) -> Result<()> {
        let buffered = BufReader::new(reader);

        for (line_idx, result) in buffered.lines().enumerate() {
            let line_num = line_idx + 1;
            let line = result?;

            if line.trim().is_empty() {
                continue;
            }

            match interpret_line(&line) {
                Ok(op) => {
                    if let Err(e) = self.apply(op) {
                        warn!("Line {}: {}", line_num, e);
                    }
                }
                Err(e) => {
                    warn!("Line {}: {}", line_num, e);
                }
            }
        }

        Ok(())
    }

    /// Applies a single validated operation to the ledger.
    ///
    /// On failure the ledger is left exactly as it was before the call; no
    /// handler mutates state before its existence check passes.
    pub fn apply(&mut self, op: Operation) -> Result<()> {
        match op {
            Operation::CreateLoan {
                merchant,
                loan,
                amount,
            } => self.create_loan(merchant, loan, amount),
            Operation::PayLoan {
                merchant,
                loan,
                amount,
            } => self.pay_loan(&merchant, &loan, amount),
            Operation::IncreaseLoan {
                merchant,
                loan,
                amount,
            } => self.increase_loan(&merchant, &loan, amount),
            Operation::TransactionProcessed {
                merchant,
                loan,
                amount,
                percentage,
            } => self.transaction_processed(&merchant, &loan, amount, percentage),
        }
    }

    /// Opens a new loan. Fails if the (merchant, loan) pair already exists.
    fn create_loan(&mut self, merchant: String, loan: String, amount: Cents) -> Result<()> {
        let loans = self.ledger.entry(merchant.clone()).or_default();

        if loans.contains_key(&loan) {
            return Err(LedgerError::DuplicateLoan { merchant, loan });
        }

        loans.insert(loan.clone(), Loan::new(amount));
        debug!(
            "Created loan `{}` for merchant `{}` with {} cents",
            loan, merchant, amount
        );

        Ok(())
    }

    /// Pays down an existing loan manually. Overpayment is absorbed.
    fn pay_loan(&mut self, merchant: &str, loan: &str, amount: Cents) -> Result<()> {
        let entry = self.get_loan_mut(merchant, loan)?;
        entry.pay(amount);
        debug!(
            "Paid {} cents toward loan `{}` of merchant `{}`, {} outstanding",
            amount,
            loan,
            merchant,
            entry.outstanding()
        );

        Ok(())
    }

    /// Increases an existing loan's balance.
    fn increase_loan(&mut self, merchant: &str, loan: &str, amount: Cents) -> Result<()> {
        let entry = self.get_loan_mut(merchant, loan)?;
        entry.increase(amount);
        debug!(
            "Increased loan `{}` of merchant `{}` by {} cents, {} outstanding",
            loan,
            merchant,
            amount,
            entry.outstanding()
        );

        Ok(())
    }

    /// Withholds a percentage of a processed transaction toward repayment.
    fn transaction_processed(
        &mut self,
        merchant: &str,
        loan: &str,
        amount: Cents,
        percentage: u8,
    ) -> Result<()> {
        let entry = self.get_loan_mut(merchant, loan)?;
        entry.withhold(amount, percentage);
        debug!(
            "Withheld {}% of a {} cent transaction toward loan `{}` of merchant `{}`, {} outstanding",
            percentage,
            amount,
            loan,
            merchant,
            entry.outstanding()
        );

        Ok(())
    }

    /// Looks up a loan for mutation, failing with `LoanNotFound` if absent.
    fn get_loan_mut(&mut self, merchant: &str, loan: &str) -> Result<&mut Loan> {
        self.ledger
            .get_mut(merchant)
            .and_then(|loans| loans.get_mut(loan))
            .ok_or_else(|| LedgerError::LoanNotFound {
                merchant: merchant.to_string(),
                loan: loan.to_string(),
            })
    }

    /// Computes the final debt report.
    ///
    /// Sums each merchant's loan balances, skips merchants whose total is
    /// zero, and sorts the rest by merchant ID ascending. Pure read; can be
    /// called at any point, including between operations.
    pub fn report(&self) -> Vec<DebtEntry> {
        let mut entries: Vec<DebtEntry> = self
            .ledger
            .iter()
            .filter_map(|(merchant, loans)| {
                let total: Cents = loans.values().map(|l| l.outstanding()).sum();
                if total.is_zero() {
                    None
                } else {
                    Some(DebtEntry {
                        merchant: merchant.clone(),
                        outstanding: total,
                    })
                }
            })
            .collect();

        entries.sort_by(|a, b| a.merchant.cmp(&b.merchant));
        entries
    }

    /// Writes the debt report as CSV.
    ///
    /// One `merchant,outstanding` row per indebted merchant, sorted by
    /// merchant ID for deterministic output.
    pub fn write_report<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        for entry in self.report() {
            csv_writer.serialize(&entry)?;
        }

        csv_writer.flush().map_err(LedgerError::Io)?;
        Ok(())
    }

    /// Returns a reference to a loan (for testing).
    #[cfg(test)]
    pub fn get_loan(&self, merchant: &str, loan: &str) -> Option<&Loan> {
        self.ledger.get(merchant).and_then(|loans| loans.get(loan))
    }
}

impl Default for LedgerEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Splits a raw input line into (action, arguments) and interprets it.
///
/// The action keyword is everything before the first colon; the rest is the
/// comma-separated argument list. A line with no colon is malformed.
fn interpret_line(line: &str) -> Result<Operation> {
    match line.split_once(':') {
        Some((action, args)) => Operation::parse(action, args),
        None => Err(LedgerError::MalformedInput {
            line: line.to_string(),
            reason: "missing `:` between action and arguments".to_string(),
        }),
    }
}
