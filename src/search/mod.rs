//! Searching transactions by amount range.

mod search_endpoint;
mod search_page;

pub use search_endpoint::search_transactions_endpoint;
pub use search_page::{get_search_form_page, get_search_page};
