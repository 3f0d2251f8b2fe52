//! Implements a struct that holds the state of the server.

use std::sync::{Arc, Mutex};

use crate::transaction::Ledger;

/// The state of the server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The shared, in-memory ledger of transactions.
    pub ledger: Arc<Mutex<Ledger>>,
}

impl AppState {
    /// Create a new [AppState] that wraps `ledger` for shared access.
    pub fn new(ledger: Ledger) -> Self {
        Self {
            ledger: Arc::new(Mutex::new(ledger)),
        }
    }
}
