//! Minibank Core - Domain types
//!
//! This crate contains the fundamental types shared across Minibank:
//! - `Amount`: Non-negative decimal wrapper for account balances

pub mod amount;

pub use amount::{Amount, AmountError};
