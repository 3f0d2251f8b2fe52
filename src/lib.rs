//! Tally is a small web app for keeping a ledger of transactions.
//!
//! The ledger lives entirely in process memory and is lost when the server
//! stops. This library provides an HTTP server that directly serves HTML
//! pages for listing, creating, editing, deleting, and searching
//! transactions.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod app_state;
mod balance;
mod endpoints;
mod error_page;
mod html;
mod logging;
mod navigation;
mod not_found;
mod routing;
mod search;
mod transaction;

pub use app_state::AppState;
pub use logging::logging_middleware;
pub use routing::build_router;
pub use transaction::{Ledger, Transaction, TransactionId};

use crate::{error_page::render_error_page, not_found::get_404_not_found_response};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A required field was absent from the submitted form.
    #[error("missing required field \"{0}\"")]
    MissingField(&'static str),

    /// A form field that should hold a number could not be parsed as one.
    ///
    /// Callers should pass in the text that failed to parse.
    #[error("could not parse \"{0}\" as an amount")]
    InvalidAmount(String),

    /// The requested transaction was not found in the ledger.
    ///
    /// Clients should check that the ID in the URL refers to a transaction
    /// that still exists.
    #[error("the requested resource could not be found")]
    NotFound,

    /// The ledger lock was poisoned by a panic in another request handler.
    #[error("could not acquire the ledger lock")]
    LedgerLockError,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => get_404_not_found_response(),
            Error::MissingField(field) => render_error_page(
                StatusCode::UNPROCESSABLE_ENTITY,
                "Missing required fields",
                &format!("The form is missing the required field \"{field}\"."),
            ),
            Error::InvalidAmount(raw) => render_error_page(
                StatusCode::BAD_REQUEST,
                "Invalid input types",
                &format!("\"{raw}\" is not a number. Enter an amount such as 42 or -3.50."),
            ),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                render_error_page(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong",
                    "An unexpected error occurred, check the server logs for more details.",
                )
            }
        }
    }
}
