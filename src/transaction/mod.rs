//! Transaction management for the ledger.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the in-memory `Ledger` that stores them
//! - View handlers for the transaction pages
//! - Endpoints that mutate the ledger

mod core;
mod create_transaction_endpoint;
mod delete_transaction_endpoint;
mod edit_transaction_endpoint;
mod edit_transaction_page;
mod form;
mod new_transaction_page;
mod transactions_page;
mod view;

pub use core::{Ledger, Transaction, TransactionId};
pub use create_transaction_endpoint::create_transaction_endpoint;
pub use delete_transaction_endpoint::delete_transaction_endpoint;
pub use edit_transaction_endpoint::edit_transaction_endpoint;
pub use edit_transaction_page::get_edit_transaction_page;
pub use new_transaction_page::get_new_transaction_page;
pub use transactions_page::get_transactions_page;

pub(crate) use core::parse_amount;
pub(crate) use view::transactions_view;
