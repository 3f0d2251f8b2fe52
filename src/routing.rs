//! Application router configuration.

use axum::{Router, routing::get};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    balance::get_balance,
    endpoints,
    not_found::get_404_not_found,
    search::{get_search_form_page, get_search_page, search_transactions_endpoint},
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, edit_transaction_endpoint,
        get_edit_transaction_page, get_new_transaction_page, get_transactions_page,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::TRANSACTIONS_VIEW, get(get_transactions_page))
        .route(
            endpoints::NEW_TRANSACTION_VIEW,
            get(get_new_transaction_page).post(create_transaction_endpoint),
        )
        .route(
            endpoints::EDIT_TRANSACTION_VIEW,
            get(get_edit_transaction_page).post(edit_transaction_endpoint),
        )
        .route(
            endpoints::DELETE_TRANSACTION,
            get(delete_transaction_endpoint),
        )
        .route(endpoints::BALANCE, get(get_balance))
        .route(
            endpoints::SEARCH_VIEW,
            get(get_search_page).post(search_transactions_endpoint),
        )
        .route(endpoints::SEARCH_FORM_VIEW, get(get_search_form_page))
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}
