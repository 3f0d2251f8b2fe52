//! Defines the endpoint for searching transactions by amount range.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Redirect, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use serde::Deserialize;

use crate::{
    AppState, Error, endpoints,
    transaction::{Ledger, parse_amount, transactions_view},
};

/// The state needed to search transactions.
#[derive(Debug, Clone)]
pub struct SearchTransactionsState {
    /// The shared in-memory ledger.
    pub ledger: Arc<Mutex<Ledger>>,
}

impl FromRef<AppState> for SearchTransactionsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
        }
    }
}

/// The form data for searching transactions by amount range.
#[derive(Debug, Deserialize)]
pub struct SearchForm {
    /// The lower bound of the amount range, inclusive.
    pub min_amount: Option<String>,
    /// The upper bound of the amount range, inclusive.
    pub max_amount: Option<String>,
}

/// A route handler that filters transactions to the given amount range.
///
/// Validation failures and empty results redirect back to the search form
/// with an explanatory message instead of producing an error response. The
/// results page reuses the transactions view but omits the total balance,
/// which is only computed for the full ledger.
pub async fn search_transactions_endpoint(
    State(state): State<SearchTransactionsState>,
    Form(form): Form<SearchForm>,
) -> Result<Response, Error> {
    let (Some(min_amount), Some(max_amount)) = (form.min_amount, form.max_amount) else {
        return Ok(redirect_with_error("Missing required fields"));
    };

    let (Ok(min_amount), Ok(max_amount)) = (parse_amount(&min_amount), parse_amount(&max_amount))
    else {
        return Ok(redirect_with_error("Invalid input types"));
    };

    let ledger = state
        .ledger
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire ledger lock: {error}"))
        .map_err(|_| Error::LedgerLockError)?;

    let matches = ledger.amounts_in_range(min_amount..=max_amount);

    if matches.is_empty() {
        return Ok(redirect_with_error(
            "No transactions found within the provided range",
        ));
    }

    Ok(transactions_view(&matches, None).into_response())
}

/// Build a redirect to the search form carrying `message` in the query
/// string.
fn redirect_with_error(message: &str) -> Response {
    let url = match serde_urlencoded::to_string([("error", message)]) {
        Ok(query) => format!("{}?{query}", endpoints::SEARCH_FORM_VIEW),
        Err(error) => {
            tracing::error!("could not encode search error message \"{message}\": {error}");
            endpoints::SEARCH_FORM_VIEW.to_owned()
        }
    };

    Redirect::to(&url).into_response()
}

#[cfg(test)]
mod search_endpoint_tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        body::Body,
        extract::State,
        http::{Response, StatusCode},
        response::IntoResponse,
    };
    use axum_extra::extract::Form;

    use crate::transaction::Ledger;

    use super::{SearchForm, SearchTransactionsState, search_transactions_endpoint};

    fn get_test_state() -> SearchTransactionsState {
        SearchTransactionsState {
            ledger: Arc::new(Mutex::new(Ledger::with_sample_data())),
        }
    }

    fn search_form(min_amount: Option<&str>, max_amount: Option<&str>) -> SearchForm {
        SearchForm {
            min_amount: min_amount.map(str::to_owned),
            max_amount: max_amount.map(str::to_owned),
        }
    }

    #[tokio::test]
    async fn renders_only_matching_transactions() {
        let state = get_test_state();

        let response =
            search_transactions_endpoint(State(state), Form(search_form(Some("50"), Some("150"))))
                .await
                .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let text = get_response_body_text(response).await;

        assert!(
            text.contains("$100.00"),
            "Could not find the matching amount in text \"{text}\""
        );
        for amount in ["$200.00", "$300.00"] {
            assert!(
                !text.contains(amount),
                "Found non-matching amount {amount} in text \"{text}\""
            );
        }
        assert!(
            !text.contains("Total Balance:"),
            "Search results should not show a total balance, got \"{text}\""
        );
    }

    #[tokio::test]
    async fn range_bounds_are_inclusive() {
        let state = get_test_state();

        let response = search_transactions_endpoint(
            State(state),
            Form(search_form(Some("100"), Some("300"))),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let text = get_response_body_text(response).await;

        for amount in ["$100.00", "$300.00"] {
            assert!(
                text.contains(amount),
                "Could not find boundary amount {amount} in text \"{text}\""
            );
        }
    }

    #[tokio::test]
    async fn no_matches_redirects_with_message() {
        let state = get_test_state();

        let response = search_transactions_endpoint(
            State(state),
            Form(search_form(Some("1000"), Some("2000"))),
        )
        .await
        .into_response();

        assert_redirects_to_search_form(
            response,
            "No transactions found within the provided range",
        );
    }

    #[tokio::test]
    async fn missing_fields_redirect_with_message() {
        let state = get_test_state();

        let response =
            search_transactions_endpoint(State(state), Form(search_form(Some("50"), None)))
                .await
                .into_response();

        assert_redirects_to_search_form(response, "Missing required fields");
    }

    #[tokio::test]
    async fn non_numeric_fields_redirect_with_message() {
        let state = get_test_state();

        let response = search_transactions_endpoint(
            State(state),
            Form(search_form(Some("lots"), Some("150"))),
        )
        .await
        .into_response();

        assert_redirects_to_search_form(response, "Invalid input types");
    }

    #[track_caller]
    fn assert_redirects_to_search_form(response: Response<Body>, message: &str) {
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let location = response
            .headers()
            .get("location")
            .expect("expected response to have the header location")
            .to_str()
            .unwrap();
        let expected_query = serde_urlencoded::to_string([("error", message)]).unwrap();
        assert_eq!(location, format!("/search_form?{expected_query}"));
    }

    async fn get_response_body_text(response: Response<Body>) -> String {
        let body = response.into_body();
        let body = axum::body::to_bytes(body, usize::MAX).await.unwrap();
        String::from_utf8_lossy(&body).to_string()
    }
}
