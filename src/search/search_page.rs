//! Defines the route handlers for the search form page.

use axum::{
    extract::Query,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    endpoints,
    html::{
        ALERT_ERROR_STYLE, BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, FORM_LABEL_STYLE,
        FORM_TEXT_INPUT_STYLE, base,
    },
    navigation::NavBar,
};

pub(crate) fn search_form_view(error: Option<&str>) -> Markup {
    let nav_bar = NavBar::new(endpoints::SEARCH_VIEW).into_html();

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            h1 { "Search Transactions" }

            @if let Some(error) = error {
                div class=(ALERT_ERROR_STYLE) role="alert"
                {
                    (error)
                }
            }

            form method="post" action=(endpoints::SEARCH_VIEW) class="search-form"
            {
                div
                {
                    label
                        for="min_amount"
                        class=(FORM_LABEL_STYLE)
                    {
                        "Minimum Amount"
                    }

                    input
                        name="min_amount"
                        id="min_amount"
                        type="number"
                        step="0.01"
                        placeholder="0.00"
                        autofocus
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label
                        for="max_amount"
                        class=(FORM_LABEL_STYLE)
                    {
                        "Maximum Amount"
                    }

                    input
                        name="max_amount"
                        id="max_amount"
                        type="number"
                        step="0.01"
                        placeholder="0.00"
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                button type="submit" tabindex="0" class=(BUTTON_PRIMARY_STYLE)
                {
                    "Search"
                }
            }
        }
    };

    base("Search Transactions", &content)
}

/// Query parameters for the search form page.
#[derive(Debug, Deserialize)]
pub struct SearchFormParams {
    /// An error message to display above the form.
    pub error: Option<String>,
}

/// Renders the page for searching transactions by amount range.
pub async fn get_search_page() -> Response {
    search_form_view(None).into_response()
}

/// Renders the search form with the error message from the query string, if
/// any.
///
/// Failed searches redirect here so the form can explain what went wrong.
pub async fn get_search_form_page(Query(params): Query<SearchFormParams>) -> Response {
    search_form_view(params.error.as_deref()).into_response()
}
