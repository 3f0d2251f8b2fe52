//! Defines the endpoint for updating an existing transaction.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::Form;

use crate::{AppState, Error, endpoints, transaction::Ledger};

use super::{
    core::{TransactionId, parse_amount},
    create_transaction_endpoint::TransactionForm,
};

/// The state needed to edit a transaction.
#[derive(Debug, Clone)]
pub struct EditTransactionState {
    /// The shared in-memory ledger.
    pub ledger: Arc<Mutex<Ledger>>,
}

impl FromRef<AppState> for EditTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
        }
    }
}

/// A route handler for overwriting a transaction's date and amount, redirects
/// to the transactions view on success. The transaction's ID never changes.
///
/// # Errors
/// Returns an error response if a field is missing, the amount is not a
/// number, or `transaction_id` does not refer to a transaction in the ledger.
pub async fn edit_transaction_endpoint(
    State(state): State<EditTransactionState>,
    Path(transaction_id): Path<TransactionId>,
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

    ledger
        .update(transaction_id, date, amount)
        .inspect_err(|error| {
            tracing::debug!("could not update transaction {transaction_id}: {error}")
        })?;

    Ok(Redirect::to(endpoints::TRANSACTIONS_VIEW).into_response())
}
