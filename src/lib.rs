//! # Loan Ledger
//!
//! A streaming loan bookkeeping engine that handles loan creation, manual
//! repayment, transaction-driven repayment, and loan increases for merchant
//! accounts, reporting each merchant's outstanding debt.
//!
//! ## Design Principles
//!
//! - **Integer arithmetic**: All amounts are whole U.S. cents; percentage
//!   withholding truncates via exact integer division
//! - **Streaming processing**: Input lines are interpreted and applied one
//!   at a time
//! - **Strict invariants**: A loan's outstanding balance never goes negative
//! - **Deterministic output**: Report sorted lexicographically by merchant ID
//!
//! ## Example
//!
//! ```no_run
//! use loan_ledger::LedgerEngine;
//! use std::io::Cursor;
//!
//! let actions = "CREATE_LOAN: acct_foobar,loan1,5000\nPAY_LOAN: acct_foobar,loan1,1000\n";
//! let mut engine = LedgerEngine::new();
//! engine.process_lines(Cursor::new(actions)).unwrap();
//! engine.write_report(std::io::stdout()).unwrap();
//! ```

pub mod engine;
pub mod error;
pub mod loan;
pub mod money;
pub mod operation;

pub use engine::{DebtEntry, LedgerEngine};
pub use error::{LedgerError, Result};
pub use loan::Loan;
pub use money::Cents;
pub use operation::Operation;
