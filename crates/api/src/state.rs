//! Application state

use minibank_ledger::LedgerEngine;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<LedgerEngine>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            engine: Arc::new(LedgerEngine::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
