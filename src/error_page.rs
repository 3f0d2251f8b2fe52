//! A shared page for reporting request errors to the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    endpoints,
    html::{LINK_STYLE, PAGE_CONTAINER_STYLE, base},
};

fn error_page_view(heading: &str, detail: &str) -> Markup {
    let content = html! {
        main class=(PAGE_CONTAINER_STYLE)
        {
            h1 { (heading) }

            p { (detail) }

            p
            {
                a href=(endpoints::TRANSACTIONS_VIEW) class=(LINK_STYLE)
                {
                    "Back to transactions"
                }
            }
        }
    };

    base("Error", &content)
}

/// Render an error page with the given status code, heading, and detail text.
pub fn render_error_page(status_code: StatusCode, heading: &str, detail: &str) -> Response {
    (status_code, error_page_view(heading, detail)).into_response()
}
