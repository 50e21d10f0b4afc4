//! Loan balance model and operations.
//!
//! A loan's outstanding balance never goes negative: repayments saturate at
//! zero and overpayment is silently absorbed.

use crate::money::Cents;

/// The outstanding balance of a single loan.
///
/// A loan is identified by its (merchant, loan) pair in the ledger; the
/// struct itself only tracks the balance. A loan with a zero balance is
/// settled but not closed: a later increase makes it outstanding again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loan {
    /// Outstanding balance in cents. Never negative.
    outstanding: Cents,
}

impl Loan {
    /// Opens a loan with the given initial amount.
    pub fn new(amount: Cents) -> Self {
        Loan {
            outstanding: amount,
        }
    }

    /// Returns the current outstanding balance.
    pub fn outstanding(&self) -> Cents {
        self.outstanding
    }

    /// Returns `true` if the loan is fully repaid.
    pub fn is_settled(&self) -> bool {
        self.outstanding.is_zero()
    }

    /// Pays down the balance by `amount`, absorbing any overpayment.
    pub fn pay(&mut self, amount: Cents) {
        self.outstanding = self.outstanding.saturating_sub(amount);
    }

    /// Increases the balance by `amount`.
    pub fn increase(&mut self, amount: Cents) {
        self.outstanding += amount;
    }

    /// Withholds a percentage of a processed transaction toward repayment.
    ///
    /// The withheld fee is `floor(amount * percentage / 100)`; fractional
    /// cents are truncated, then the fee pays down the balance like a manual
    /// payment.
    pub fn withhold(&mut self, amount: Cents, percentage: u8) {
        self.pay(amount.percentage_of(percentage));
    }
}
