//! Integer money type for U.S. cent amounts.
//!
//! All monetary values in the ledger are whole U.S. cents, so balances are
//! represented exactly as unsigned integers. Percentage withholding uses
//! exact integer arithmetic with truncation, never floating point.

use serde::Serialize;
use std::fmt;
use std::iter::Sum;
use std::num::ParseIntError;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

/// A non-negative monetary amount in U.S. cents.
///
/// Non-negativity is guaranteed by construction: the inner value is a `u64`
/// and subtraction is only exposed as [`Cents::saturating_sub`], so a balance
/// can never go below zero.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use loan_ledger::Cents;
///
/// let amount = Cents::from_str("5000").unwrap();
/// assert_eq!(amount.to_string(), "5000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Cents(u64);

impl Cents {
    /// Zero value.
    pub const ZERO: Self = Cents(0);

    /// Creates a new `Cents` from a raw cent count.
    pub fn new(value: u64) -> Self {
        Cents(value)
    }

    /// Returns `true` if this value is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Subtracts `rhs`, stopping at zero.
    ///
    /// Overpayment is absorbed rather than producing a negative balance.
    pub fn saturating_sub(self, rhs: Self) -> Self {
        Cents(self.0.saturating_sub(rhs.0))
    }

    /// Computes `percentage` percent of this amount, truncated toward zero.
    ///
    /// Uses a 128-bit intermediate so the multiplication cannot overflow for
    /// any representable amount. For example, 1% of 433_64 cents is 433
    /// cents, not 434.
    pub fn percentage_of(self, percentage: u8) -> Self {
        let fee = u128::from(self.0) * u128::from(percentage) / 100;
        // fee <= self.0 because percentage <= 100, so the cast is lossless
        Cents(fee as u64)
    }
}

impl FromStr for Cents {
    type Err = ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(Cents)
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Cents {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Cents(self.0 + rhs.0)
    }
}

impl AddAssign for Cents {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sum for Cents {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Cents::ZERO, Add::add)
    }
}

impl Serialize for Cents {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u64(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_accepts_whitespace() {
        let c = Cents::from_str("5000").unwrap();
        assert_eq!(c, Cents::new(5000));

        let c = Cents::from_str("  1000  ").unwrap();
        assert_eq!(c, Cents::new(1000));
    }

    #[test]
    fn test_from_str_rejects_non_integers() {
        assert!(Cents::from_str("10.5").is_err());
        assert!(Cents::from_str("-100").is_err());
        assert!(Cents::from_str("abc").is_err());
        assert!(Cents::from_str("").is_err());
    }

    #[test]
    fn test_saturating_sub_stops_at_zero() {
        let balance = Cents::new(1000);
        assert_eq!(balance.saturating_sub(Cents::new(400)), Cents::new(600));
        assert_eq!(balance.saturating_sub(Cents::new(5000)), Cents::ZERO);
        assert_eq!(balance.saturating_sub(Cents::new(1000)), Cents::ZERO);
    }

    #[test]
    fn test_percentage_truncates() {
        // 10% of 500 is exactly 50
        assert_eq!(Cents::new(500).percentage_of(10), Cents::new(50));
        // 10% of 501 is 50.1, truncated to 50
        assert_eq!(Cents::new(501).percentage_of(10), Cents::new(50));
        // 1% of 43364 is 433.64, truncated to 433
        assert_eq!(Cents::new(43364).percentage_of(1), Cents::new(433));
        // 1% of 500 is exactly 5
        assert_eq!(Cents::new(500).percentage_of(1), Cents::new(5));
        // 100% passes the amount through unchanged
        assert_eq!(Cents::new(999).percentage_of(100), Cents::new(999));
    }

    #[test]
    fn test_percentage_of_large_amount_does_not_overflow() {
        let huge = Cents::new(u64::MAX);
        assert_eq!(huge.percentage_of(100), huge);
    }

    #[test]
    fn test_sum() {
        let total: Cents = [Cents::new(100), Cents::new(200), Cents::new(300)]
            .into_iter()
            .sum();
        assert_eq!(total, Cents::new(600));
    }

    #[test]
    fn test_zero_constant() {
        assert!(Cents::ZERO.is_zero());
        assert!(!Cents::new(1).is_zero());
    }
}
