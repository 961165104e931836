//! Minibank API - REST transport over the ledger engine
//!
//! Thin adapter: decodes requests into (kind, amount, timestamp), calls
//! the engine, and renders results and errors as JSON with the matching
//! status codes.

pub mod handlers;
pub mod routes;
pub mod state;
