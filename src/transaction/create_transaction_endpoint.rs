//! Defines the endpoint for creating a new transaction.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Redirect, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use serde::Deserialize;

use crate::{AppState, Error, endpoints, transaction::Ledger};

use super::core::parse_amount;

/// The state needed to create a transaction.
#[derive(Debug, Clone)]
pub struct CreateTransactionState {
    /// The shared in-memory ledger.
    pub ledger: Arc<Mutex<Ledger>>,
}

impl FromRef<AppState> for CreateTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
        }
    }
}

/// The form data for creating or editing a transaction.
#[derive(Debug, Deserialize)]
pub struct TransactionForm {
    /// When the transaction happened, kept as entered.
    pub date: Option<String>,
    /// The value of the transaction in dollars. Parsed by the handler so that
    /// bad input becomes a client error instead of a rejection.
    pub amount: Option<String>,
}

/// A route handler for creating a new transaction, redirects to the
/// transactions view on success.
///
/// # Errors
/// Returns an error response if a field is missing or the amount is not a
/// number.
pub async fn create_transaction_endpoint(
    State(state): State<CreateTransactionState>,
    Form(form): Form<TransactionForm>,
) -> Result<Response, Error> {
    let date = form.date.ok_or(Error::MissingField("date"))?;
    let amount = form.amount.ok_or(Error::MissingField("amount"))?;
    let amount = parse_amount(&amount)?;

    let mut ledger = state
        .ledger
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire ledger lock: {error}"))
        .map_err(|_| Error::LedgerLockError)?;

    let transaction = ledger.create(date, amount);
    tracing::debug!("created transaction {}", transaction.id);

    Ok(Redirect::to(endpoints::TRANSACTIONS_VIEW).into_response())
}
