//! Transaction records
//!
//! A `Transaction` is written once by the engine and never modified again.
//! Its `balance_after` field snapshots the account balance immediately
//! after the transaction was applied.

use chrono::{DateTime, Utc};
use minibank_core::Amount;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// The direction of a money movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    /// Adds the amount to the account balance
    Deposit,
    /// Removes the amount from the account balance
    Withdrawal,
}

/// A single applied deposit or withdrawal.
///
/// Belongs to exactly one account; the account exclusively owns its
/// transaction sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// When the transaction happened (supplied by the caller)
    pub timestamp: DateTime<Utc>,
    /// Deposit or Withdrawal
    pub kind: TransactionKind,
    /// Moved amount, always > 0
    pub amount: Decimal,
    /// Account balance right after this transaction was applied
    pub balance_after: Amount,
}

impl Transaction {
    pub fn new(
        timestamp: DateTime<Utc>,
        kind: TransactionKind,
        amount: Decimal,
        balance_after: Amount,
    ) -> Self {
        Self {
            timestamp,
            kind,
            amount,
            balance_after,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_kind_serde_wire_format() {
        assert_eq!(
            serde_json::to_string(&TransactionKind::Deposit).unwrap(),
            "\"DEPOSIT\""
        );
        assert_eq!(
            serde_json::to_string(&TransactionKind::Withdrawal).unwrap(),
            "\"WITHDRAWAL\""
        );

        let kind: TransactionKind = serde_json::from_str("\"WITHDRAWAL\"").unwrap();
        assert_eq!(kind, TransactionKind::Withdrawal);
    }

    #[test]
    fn test_kind_rejects_unknown_value() {
        let result: Result<TransactionKind, _> = serde_json::from_str("\"TRANSFER\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(TransactionKind::Deposit.to_string(), "DEPOSIT");
        assert_eq!(TransactionKind::Withdrawal.to_string(), "WITHDRAWAL");
    }

    #[test]
    fn test_transaction_roundtrip() {
        let tx = Transaction::new(
            Utc::now(),
            TransactionKind::Deposit,
            dec!(100),
            Amount::new(dec!(100)).unwrap(),
        );
        let json = serde_json::to_string(&tx).unwrap();
        let parsed: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(tx, parsed);
    }
}
