//! Ledger errors

use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur when processing ledger operations.
///
/// All three are deterministic validation failures: the same request
/// against the same state always produces the same result, and a failed
/// call leaves the account untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Account {0} not found")]
    AccountNotFound(Uuid),

    #[error("Transaction amount must be greater than zero, got {0}")]
    InvalidAmount(Decimal),

    #[error("Insufficient funds: balance {available}, requested {requested}")]
    InsufficientFunds {
        available: Decimal,
        requested: Decimal,
    },
}
