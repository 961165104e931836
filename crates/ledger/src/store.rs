//! Account storage
//!
//! The map lock is held only for lookup and insert; each account carries
//! its own mutex so transactions on different accounts never contend.

use crate::account::Account;
use crate::error::LedgerError;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};
use uuid::Uuid;

/// Concurrent account storage keyed by UUID.
///
/// Accounts are handed out as `Arc<Mutex<Account>>`: the engine locks a
/// single account for the whole validate-and-apply sequence while other
/// accounts stay available to other callers.
pub struct AccountStore {
    accounts: RwLock<HashMap<Uuid, Arc<Mutex<Account>>>>,
}

impl Default for AccountStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
        }
    }

    /// Allocate a new account with a fresh random identifier, zero
    /// balance, and empty history. Returns a snapshot of the account as
    /// created.
    pub fn create(&self) -> Account {
        let account = Account::new(Uuid::new_v4());
        let snapshot = account.clone();
        self.accounts
            .write()
            .unwrap()
            .insert(account.id, Arc::new(Mutex::new(account)));
        snapshot
    }

    /// Look up an account handle by id
    pub fn find(&self, id: Uuid) -> Result<Arc<Mutex<Account>>, LedgerError> {
        self.accounts
            .read()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or(LedgerError::AccountNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_returns_empty_account() {
        let store = AccountStore::new();
        let account = store.create();

        assert!(account.balance.is_zero());
        assert!(account.transactions.is_empty());
    }

    #[test]
    fn test_created_accounts_are_findable() {
        let store = AccountStore::new();
        let account = store.create();

        let handle = store.find(account.id).unwrap();
        assert_eq!(handle.lock().unwrap().id, account.id);
    }

    #[test]
    fn test_create_never_collides() {
        let store = AccountStore::new();
        let a = store.create();
        let b = store.create();

        assert_ne!(a.id, b.id);
        assert!(store.find(a.id).is_ok());
        assert!(store.find(b.id).is_ok());
    }

    #[test]
    fn test_find_unknown_id() {
        let store = AccountStore::new();
        let id = Uuid::new_v4();

        assert_eq!(store.find(id).unwrap_err(), LedgerError::AccountNotFound(id));
    }
}
