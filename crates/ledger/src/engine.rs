//! Ledger engine - validates and applies transaction requests
//!
//! Check order is fixed: account existence, then amount positivity, then
//! funds. The account's lock is held from validation through apply, so
//! two transactions on the same account can never read the same stale
//! balance.

use crate::account::Account;
use crate::error::LedgerError;
use crate::store::AccountStore;
use crate::transaction::{Transaction, TransactionKind};
use chrono::{DateTime, Utc};
use minibank_core::Amount;
use rust_decimal::Decimal;
use uuid::Uuid;

/// Applies transaction requests to accounts.
///
/// Owns the account store; the transport layer holds the engine behind an
/// `Arc` and calls it from concurrent request handlers.
pub struct LedgerEngine {
    store: AccountStore,
}

impl Default for LedgerEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerEngine {
    /// Create an engine with an empty account store
    pub fn new() -> Self {
        Self {
            store: AccountStore::new(),
        }
    }

    /// Open a new account with zero balance and empty history
    pub fn create_account(&self) -> Account {
        let account = self.store.create();
        tracing::info!("Opened account {}", account.id);
        account
    }

    /// Read a snapshot of the account's current state
    pub fn get_account(&self, account_id: Uuid) -> Result<Account, LedgerError> {
        let handle = self.store.find(account_id)?;
        let account = handle.lock().unwrap();
        Ok(account.clone())
    }

    /// Read the account's full transaction history in insertion order.
    ///
    /// Returns an owned snapshot: transactions applied after this call do
    /// not show up in an already-returned sequence.
    pub fn transactions(&self, account_id: Uuid) -> Result<Vec<Transaction>, LedgerError> {
        let handle = self.store.find(account_id)?;
        let account = handle.lock().unwrap();
        Ok(account.transactions.clone())
    }

    /// Apply a single deposit or withdrawal to an account.
    ///
    /// Flow: Find account → Lock → Validate amount → Check funds → Apply
    pub fn process_transaction(
        &self,
        account_id: Uuid,
        kind: TransactionKind,
        amount: Decimal,
        timestamp: DateTime<Utc>,
    ) -> Result<Transaction, LedgerError> {
        // 1. Existence check
        let handle = self.store.find(account_id)?;

        // 2. Serialize against any other transaction on this account
        let mut account = handle.lock().unwrap();

        // 3. Amount check, before any balance comparison
        if amount <= Decimal::ZERO {
            tracing::warn!(
                "Rejected {} of {} on account {}: non-positive amount",
                kind,
                amount,
                account_id
            );
            return Err(LedgerError::InvalidAmount(amount));
        }
        // Positive by the check above
        let movement = Amount::new_unchecked(amount);

        // 4. Funds check and new balance
        let new_balance = match kind {
            TransactionKind::Deposit => account.balance.add(&movement),
            TransactionKind::Withdrawal => {
                account.balance.checked_sub(&movement).ok_or_else(|| {
                    tracing::warn!(
                        "Rejected withdrawal of {} on account {}: balance is {}",
                        amount,
                        account_id,
                        account.balance
                    );
                    LedgerError::InsufficientFunds {
                        available: account.balance.value(),
                        requested: amount,
                    }
                })?
            }
        };

        // 5. Record and apply as one step under the held lock
        let transaction = Transaction::new(timestamp, kind, amount, new_balance);
        account.apply(transaction.clone());

        tracing::debug!(
            "Applied {} of {} on account {}, balance now {}",
            kind,
            amount,
            account_id,
            account.balance
        );

        Ok(transaction)
    }
}
