//! Defines the route handler for the page for editing an existing transaction.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error, endpoints,
    html::{FORM_CONTAINER_STYLE, base},
    navigation::NavBar,
    transaction::{Ledger, Transaction, TransactionId},
};

use super::form::{TransactionFormDefaults, transaction_form};

/// The state needed for the edit transaction page.
#[derive(Debug, Clone)]
pub struct EditTransactionPageState {
    /// The shared in-memory ledger.
    pub ledger: Arc<Mutex<Ledger>>,
}

impl FromRef<AppState> for EditTransactionPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
        }
    }
}

fn edit_transaction_view(transaction: &Transaction) -> Markup {
    let edit_route = endpoints::format_endpoint(endpoints::EDIT_TRANSACTION_VIEW, transaction.id);
    let nav_bar = NavBar::new(endpoints::TRANSACTIONS_VIEW).into_html();

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            h1 { "Edit Transaction " (transaction.id) }

            (transaction_form(
                &edit_route,
                "Save Changes",
                &TransactionFormDefaults {
                    date: &transaction.date,
                    amount: Some(transaction.amount),
                },
            ))
        }
    };

    base("Edit Transaction", &content)
}

/// Renders the edit form prefilled with the transaction's current values.
///
/// # Errors
/// Returns a not found response if `transaction_id` does not refer to a
/// transaction in the ledger.
pub async fn get_edit_transaction_page(
    State(state): State<EditTransactionPageState>,
    Path(transaction_id): Path<TransactionId>,
) -> Result<Response, Error> {
    let ledger = state
        .ledger
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire ledger lock: {error}"))
        .map_err(|_| Error::LedgerLockError)?;

    let transaction = ledger.get(transaction_id)?;

    Ok(edit_transaction_view(&transaction).into_response())
}

#[cfg(test)]
mod edit_transaction_page_tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        body::Body,
        extract::{Path, State},
        http::StatusCode,
        response::{IntoResponse, Response},
    };
    use scraper::{Html, Selector};

    use crate::transaction::Ledger;

    use super::{EditTransactionPageState, get_edit_transaction_page};

    fn get_test_state() -> EditTransactionPageState {
        EditTransactionPageState {
            ledger: Arc::new(Mutex::new(Ledger::with_sample_data())),
        }
    }

    #[tokio::test]
    async fn renders_prefilled_form() {
        let state = get_test_state();

        let response = get_edit_transaction_page(State(state), Path(1))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let document = parse_html(response).await;
        assert_valid_html(&document);

        let form_selector = Selector::parse("form").unwrap();
        let form = document
            .select(&form_selector)
            .next()
            .expect("want a form on the edit page");
        assert_eq!(form.value().attr("action"), Some("/edit/1"));

        let date_selector = Selector::parse("input[name=date]").unwrap();
        let date_input = document.select(&date_selector).next().unwrap();
        assert_eq!(date_input.value().attr("value"), Some("2023-06-01"));

        let amount_selector = Selector::parse("input[name=amount]").unwrap();
        let amount_input = document.select(&amount_selector).next().unwrap();
        assert_eq!(amount_input.value().attr("value"), Some("100"));
    }

    #[tokio::test]
    async fn missing_transaction_returns_not_found() {
        let state = get_test_state();

        let response = get_edit_transaction_page(State(state), Path(999))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[track_caller]
    fn assert_valid_html(html: &Html) {
        assert!(
            html.errors.is_empty(),
            "Got HTML parsing errors: {:?}",
            html.errors
        );
    }

    async fn parse_html(response: Response<Body>) -> Html {
        let body = response.into_body();
        let body = axum::body::to_bytes(body, usize::MAX).await.unwrap();
        Html::parse_document(&String::from_utf8_lossy(&body))
    }
}
