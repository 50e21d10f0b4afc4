//! Operation models and the command interpreter.
//!
//! Each input line names an action and a comma-separated argument list. The
//! interpreter turns the pre-split (action, arguments) pair into a typed
//! [`Operation`] with every field validated, or fails with
//! [`LedgerError::MalformedInput`]. It is pure and stateless; existence
//! checks against the ledger belong to the engine.

use crate::error::LedgerError;
use crate::money::Cents;
use std::str::FromStr;

/// A validated ledger action ready for the engine to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Open a new loan with an initial amount.
    CreateLoan {
        merchant: String,
        loan: String,
        amount: Cents,
    },

    /// Pay down a loan manually; overpayment is absorbed.
    PayLoan {
        merchant: String,
        loan: String,
        amount: Cents,
    },

    /// Increase an existing loan's balance.
    IncreaseLoan {
        merchant: String,
        loan: String,
        amount: Cents,
    },

    /// Withhold a percentage of a processed transaction toward repayment.
    TransactionProcessed {
        merchant: String,
        loan: String,
        amount: Cents,
        /// Share of the transaction amount withheld, 1 to 100 inclusive.
        percentage: u8,
    },
}

impl Operation {
    /// Interprets a pre-split action keyword and raw argument list.
    ///
    /// `args` is the comma-separated text after the action's colon;
    /// surrounding whitespace on the keyword and on each argument is
    /// insignificant. Unknown keywords, wrong argument counts, empty IDs,
    /// non-integer amounts, and out-of-range percentages all fail with
    /// `MalformedInput` retaining the offending input.
    pub fn parse(action: &str, args: &str) -> Result<Operation, LedgerError> {
        let malformed = |reason: String| LedgerError::MalformedInput {
            line: format!("{}: {}", action.trim(), args.trim()),
            reason,
        };

        let fields: Vec<&str> = args.split(',').map(str::trim).collect();

        match action.trim() {
            "CREATE_LOAN" => {
                let (merchant, loan, amount) = parse_loan_fields(&fields).map_err(malformed)?;
                Ok(Operation::CreateLoan {
                    merchant,
                    loan,
                    amount,
                })
            }
            "PAY_LOAN" => {
                let (merchant, loan, amount) = parse_loan_fields(&fields).map_err(malformed)?;
                Ok(Operation::PayLoan {
                    merchant,
                    loan,
                    amount,
                })
            }
            "INCREASE_LOAN" => {
                let (merchant, loan, amount) = parse_loan_fields(&fields).map_err(malformed)?;
                Ok(Operation::IncreaseLoan {
                    merchant,
                    loan,
                    amount,
                })
            }
            "TRANSACTION_PROCESSED" => {
                if fields.len() != 4 {
                    return Err(malformed(format!(
                        "expected 4 arguments, got {}",
                        fields.len()
                    )));
                }
                let merchant = parse_id("merchant_id", fields[0]).map_err(malformed)?;
                let loan = parse_id("loan_id", fields[1]).map_err(malformed)?;
                let amount = parse_amount(fields[2]).map_err(malformed)?;
                let percentage = parse_percentage(fields[3]).map_err(malformed)?;
                Ok(Operation::TransactionProcessed {
                    merchant,
                    loan,
                    amount,
                    percentage,
                })
            }
            other => Err(malformed(format!("unknown action `{}`", other))),
        }
    }
}

/// Parses the common (merchant_id, loan_id, amount) argument shape.
fn parse_loan_fields(fields: &[&str]) -> Result<(String, String, Cents), String> {
    if fields.len() != 3 {
        return Err(format!("expected 3 arguments, got {}", fields.len()));
    }
    let merchant = parse_id("merchant_id", fields[0])?;
    let loan = parse_id("loan_id", fields[1])?;
    let amount = parse_amount(fields[2])?;
    Ok((merchant, loan, amount))
}

fn parse_id(name: &str, value: &str) -> Result<String, String> {
    if value.is_empty() {
        return Err(format!("{} must be non-empty", name));
    }
    Ok(value.to_string())
}

fn parse_amount(value: &str) -> Result<Cents, String> {
    Cents::from_str(value).map_err(|_| format!("amount `{}` is not a non-negative integer", value))
}

fn parse_percentage(value: &str) -> Result<u8, String> {
    let pct: u8 = value
        .parse()
        .map_err(|_| format!("percentage `{}` is not an integer", value))?;
    if !(1..=100).contains(&pct) {
        return Err(format!("percentage {} is outside 1..=100", pct));
    }
    Ok(pct)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_create_loan() {
        let op = Operation::parse("CREATE_LOAN", "acct_foobar, loan1, 5000").unwrap();
        assert_eq!(
            op,
            Operation::CreateLoan {
                merchant: "acct_foobar".to_string(),
                loan: "loan1".to_string(),
                amount: Cents::new(5000),
            }
        );
    }

    #[test]
    fn test_parse_pay_loan() {
        let op = Operation::parse("PAY_LOAN", "acct_foobar,loan1,1000").unwrap();
        assert_eq!(
            op,
            Operation::PayLoan {
                merchant: "acct_foobar".to_string(),
                loan: "loan1".to_string(),
                amount: Cents::new(1000),
            }
        );
    }

    #[test]
    fn test_parse_increase_loan() {
        let op = Operation::parse("INCREASE_LOAN", "m1,l1,0").unwrap();
        assert_eq!(
            op,
            Operation::IncreaseLoan {
                merchant: "m1".to_string(),
                loan: "l1".to_string(),
                amount: Cents::ZERO,
            }
        );
    }

    #[test]
    fn test_parse_transaction_processed() {
        let op = Operation::parse("TRANSACTION_PROCESSED", "acct_foobar, loan1, 500, 10").unwrap();
        assert_eq!(
            op,
            Operation::TransactionProcessed {
                merchant: "acct_foobar".to_string(),
                loan: "loan1".to_string(),
                amount: Cents::new(500),
                percentage: 10,
            }
        );
    }

    #[test]
    fn test_parse_handles_whitespace() {
        let op = Operation::parse("  CREATE_LOAN  ", "  m1 , l1 , 100 ").unwrap();
        assert_eq!(
            op,
            Operation::CreateLoan {
                merchant: "m1".to_string(),
                loan: "l1".to_string(),
                amount: Cents::new(100),
            }
        );
    }

    #[test]
    fn test_parse_rejects_unknown_action() {
        let err = Operation::parse("DELETE_LOAN", "m1,l1,100").unwrap_err();
        assert!(matches!(err, LedgerError::MalformedInput { .. }));
    }

    #[test]
    fn test_parse_rejects_wrong_argument_count() {
        assert!(Operation::parse("CREATE_LOAN", "m1,l1").is_err());
        assert!(Operation::parse("CREATE_LOAN", "m1,l1,100,extra").is_err());
        assert!(Operation::parse("TRANSACTION_PROCESSED", "m1,l1,500").is_err());
    }

    #[test]
    fn test_parse_rejects_non_integer_amount() {
        assert!(Operation::parse("CREATE_LOAN", "m1,l1,ten").is_err());
        assert!(Operation::parse("CREATE_LOAN", "m1,l1,10.5").is_err());
        assert!(Operation::parse("CREATE_LOAN", "m1,l1,-100").is_err());
    }

    #[test]
    fn test_parse_rejects_out_of_range_percentage() {
        assert!(Operation::parse("TRANSACTION_PROCESSED", "m1,l1,500,0").is_err());
        assert!(Operation::parse("TRANSACTION_PROCESSED", "m1,l1,500,101").is_err());
        assert!(Operation::parse("TRANSACTION_PROCESSED", "m1,l1,500,-5").is_err());
    }

    #[test]
    fn test_parse_accepts_percentage_bounds() {
        assert!(Operation::parse("TRANSACTION_PROCESSED", "m1,l1,500,1").is_ok());
        assert!(Operation::parse("TRANSACTION_PROCESSED", "m1,l1,500,100").is_ok());
    }

    #[test]
    fn test_parse_rejects_empty_ids() {
        assert!(Operation::parse("CREATE_LOAN", ",l1,100").is_err());
        assert!(Operation::parse("CREATE_LOAN", "m1, ,100").is_err());
    }

    #[test]
    fn test_malformed_error_retains_input() {
        let err = Operation::parse("CREATE_LOAN", "m1,l1,ten").unwrap_err();
        match err {
            LedgerError::MalformedInput { line, .. } => {
                assert_eq!(line, "CREATE_LOAN: m1,l1,ten");
            }
            other => panic!("expected MalformedInput, got {:?}", other),
        }
    }
}
