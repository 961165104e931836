//! Minibank Ledger - Account store and transaction engine
//!
//! This is the HEART of Minibank. All balance changes go through this crate.
//!
//! # Key Types
//! - `Account`: Balance plus append-only transaction history
//! - `Transaction`: Immutable record of a single deposit or withdrawal
//! - `AccountStore`: Concurrent account storage keyed by UUID
//! - `LedgerEngine`: Validates and applies transaction requests

pub mod account;
pub mod engine;
pub mod error;
pub mod store;
pub mod transaction;

pub use account::Account;
pub use engine::LedgerEngine;
pub use error::LedgerError;
pub use store::AccountStore;
pub use transaction::{Transaction, TransactionKind};
