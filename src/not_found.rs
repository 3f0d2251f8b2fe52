use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    endpoints,
    html::{LINK_STYLE, PAGE_CONTAINER_STYLE, base},
};

fn not_found_view() -> Markup {
    let content = html! {
        main class=(PAGE_CONTAINER_STYLE)
        {
            h1 { "404 Page Not Found" }

            p
            {
                "The page you were looking for does not exist. The transaction "
                "may have already been deleted."
            }

            p
            {
                a href=(endpoints::TRANSACTIONS_VIEW) class=(LINK_STYLE)
                {
                    "Back to transactions"
                }
            }
        }
    };

    base("Page Not Found", &content)
}

pub async fn get_404_not_found() -> Response {
    get_404_not_found_response()
}

pub fn get_404_not_found_response() -> Response {
    (StatusCode::NOT_FOUND, not_found_view()).into_response()
}

#[cfg(test)]
mod not_found_tests {
    use axum::http::StatusCode;

    use super::get_404_not_found;

    #[tokio::test]
    async fn returns_not_found_page() {
        let response = get_404_not_found().await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
