//! Defines the endpoint that reports the ledger's total balance.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};

use crate::{AppState, Error, transaction::Ledger};

/// The state needed to compute the total balance.
#[derive(Debug, Clone)]
pub struct BalanceState {
    /// The shared in-memory ledger.
    pub ledger: Arc<Mutex<Ledger>>,
}

impl FromRef<AppState> for BalanceState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
        }
    }
}

/// A route handler that returns the total balance as plain text.
///
/// An empty ledger has a total balance of zero.
pub async fn get_balance(State(state): State<BalanceState>) -> Result<Response, Error> {
    let ledger = state
        .ledger
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire ledger lock: {error}"))
        .map_err(|_| Error::LedgerLockError)?;

    let total_balance = ledger.total_balance();

    Ok(format!("Total Balance: {total_balance}").into_response())
}

#[cfg(test)]
mod balance_tests {
    use std::sync::{Arc, Mutex};

    use axum::{extract::State, http::StatusCode, response::Response};

    use crate::transaction::Ledger;

    use super::{BalanceState, get_balance};

    #[tokio::test]
    async fn reports_the_sum_of_all_amounts() {
        let state = BalanceState {
            ledger: Arc::new(Mutex::new(Ledger::with_sample_data())),
        };

        let response = get_balance(State(state)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(get_response_body_text(response).await, "Total Balance: 200");
    }

    #[tokio::test]
    async fn empty_ledger_reports_zero() {
        let state = BalanceState {
            ledger: Arc::new(Mutex::new(Ledger::new())),
        };

        let response = get_balance(State(state)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(get_response_body_text(response).await, "Total Balance: 0");
    }

    async fn get_response_body_text(response: Response) -> String {
        let body = response.into_body();
        let body = axum::body::to_bytes(body, usize::MAX).await.unwrap();
        String::from_utf8_lossy(&body).to_string()
    }
}
