//! Defines the route handler for the page that lists every transaction.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};

use crate::{AppState, Error, transaction::Ledger};

use super::view::transactions_view;

/// The state needed for the transactions page.
#[derive(Debug, Clone)]
pub struct TransactionsPageState {
    /// The shared in-memory ledger.
    pub ledger: Arc<Mutex<Ledger>>,
}

impl FromRef<AppState> for TransactionsPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
        }
    }
}

/// Render an overview of the ledger along with its total balance.
pub async fn get_transactions_page(
    State(state): State<TransactionsPageState>,
) -> Result<Response, Error> {
    let ledger = state
        .ledger
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire ledger lock: {error}"))
        .map_err(|_| Error::LedgerLockError)?;

    let total_balance = ledger.total_balance();

    Ok(transactions_view(ledger.transactions(), Some(total_balance)).into_response())
}
