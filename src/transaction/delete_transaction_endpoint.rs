//! Defines the endpoint for deleting a transaction.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Redirect, Response},
};

use crate::{AppState, Error, endpoints, transaction::Ledger};

use super::core::TransactionId;

/// The state needed to delete a transaction.
#[derive(Debug, Clone)]
pub struct DeleteTransactionState {
    /// The shared in-memory ledger.
    pub ledger: Arc<Mutex<Ledger>>,
}

impl FromRef<AppState> for DeleteTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
        }
    }
}

/// A route handler for deleting a transaction, redirects to the transactions
/// view on success.
///
/// # Errors
/// Returns a not found response if `transaction_id` does not refer to a
/// transaction in the ledger.
pub async fn delete_transaction_endpoint(
    State(state): State<DeleteTransactionState>,
    Path(transaction_id): Path<TransactionId>,
) -> Result<Response, Error> {
    let mut ledger = state
        .ledger
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire ledger lock: {error}"))
        .map_err(|_| Error::LedgerLockError)?;

    ledger.delete(transaction_id).inspect_err(|error| {
        tracing::debug!("could not delete transaction {transaction_id}: {error}")
    })?;

    Ok(Redirect::to(endpoints::TRANSACTIONS_VIEW).into_response())
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
    };

    use crate::transaction::Ledger;

    use super::{DeleteTransactionState, delete_transaction_endpoint};

    #[tokio::test]
    async fn deletes_exactly_one_transaction() {
        let state = DeleteTransactionState {
            ledger: Arc::new(Mutex::new(Ledger::with_sample_data())),
        };

        let response = delete_transaction_endpoint(State(state.clone()), Path(2))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get("location").unwrap(), "/");

        let ledger = state.ledger.lock().unwrap();
        let ids: Vec<_> = ledger.transactions().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn missing_transaction_returns_not_found() {
        let state = DeleteTransactionState {
            ledger: Arc::new(Mutex::new(Ledger::with_sample_data())),
        };

        let response = delete_transaction_endpoint(State(state.clone()), Path(999))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(state.ledger.lock().unwrap().transactions().len(), 3);
    }
}
