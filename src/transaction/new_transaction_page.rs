//! Defines the route handler for the page for creating a new transaction.

use axum::response::{IntoResponse, Response};
use maud::{Markup, html};
use time::OffsetDateTime;

use crate::{
    endpoints,
    html::{FORM_CONTAINER_STYLE, base},
    navigation::NavBar,
};

use super::form::{TransactionFormDefaults, transaction_form};

fn new_transaction_view(default_date: &str) -> Markup {
    let nav_bar = NavBar::new(endpoints::NEW_TRANSACTION_VIEW).into_html();

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            h1 { "New Transaction" }

            (transaction_form(
                endpoints::NEW_TRANSACTION_VIEW,
                "Create Transaction",
                &TransactionFormDefaults {
                    date: default_date,
                    amount: None,
                },
            ))
        }
    };

    base("New Transaction", &content)
}

/// Renders the page for creating a transaction.
///
/// The date input defaults to today's date (UTC).
pub async fn get_new_transaction_page() -> Response {
    let today = OffsetDateTime::now_utc().date();

    new_transaction_view(&today.to_string()).into_response()
}
