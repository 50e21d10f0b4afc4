//! Error types for the ledger engine.

use thiserror::Error;

/// Result type alias for ledger operations
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Errors that can occur while interpreting or applying ledger actions.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Failed to open or read the input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Report rendering error
    #[error("CSV writing error: {0}")]
    Csv(#[from] csv::Error),

    /// Input line that could not be interpreted as an action
    #[error("Malformed input `{line}`: {reason}")]
    MalformedInput { line: String, reason: String },

    /// CreateLoan targeted a (merchant, loan) pair that already exists
    #[error("Loan already exists for merchant `{merchant}`, loan `{loan}`")]
    DuplicateLoan { merchant: String, loan: String },

    /// An operation targeted a (merchant, loan) pair that does not exist
    #[error("Loan does not exist for merchant `{merchant}`, loan `{loan}`")]
    LoanNotFound { merchant: String, loan: String },

    /// Missing input file argument
    #[error("Missing input file argument. Usage: loan-ledger <input.txt>")]
    MissingArgument,
}
