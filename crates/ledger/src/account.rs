//! Account - balance plus append-only transaction history

use crate::transaction::Transaction;
use chrono::{DateTime, Utc};
use minibank_core::Amount;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A customer account.
///
/// Created with zero balance and empty history. Balance and history are
/// mutated only through [`Account::apply`], which the engine calls under
/// the account's lock, so the balance always equals the `balance_after`
/// of the most recent transaction (or zero if none exist).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Random unique identifier
    pub id: Uuid,
    /// Current balance, never negative
    pub balance: Amount,
    /// Applied transactions in chronological (insertion) order
    pub transactions: Vec<Transaction>,
    /// When the account was opened
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Create an empty account with the given identifier
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            balance: Amount::ZERO,
            transactions: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Record an applied transaction: set the new balance and append the
    /// record in one step. The transaction's `balance_after` IS the new
    /// balance, which keeps the two in lockstep.
    pub(crate) fn apply(&mut self, transaction: Transaction) {
        self.balance = transaction.balance_after;
        self.transactions.push(transaction);
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Account {} (balance: {}, transactions: {})",
            self.id,
            self.balance,
            self.transactions.len()
        )
    }
}
