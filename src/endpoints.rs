//! The app's endpoint URIs.
//!
//! For endpoints that take a parameter, e.g., '/edit/{transaction_id}', use
//! [format_endpoint].

/// The page that lists every transaction along with the total balance.
pub const TRANSACTIONS_VIEW: &str = "/";
/// The page for creating a new transaction. POST to the same path creates it.
pub const NEW_TRANSACTION_VIEW: &str = "/add";
/// The page for editing an existing transaction. POST to the same path updates it.
pub const EDIT_TRANSACTION_VIEW: &str = "/edit/{transaction_id}";
/// The route that deletes a transaction.
pub const DELETE_TRANSACTION: &str = "/delete/{transaction_id}";
/// The route that reports the total balance as plain text.
pub const BALANCE: &str = "/balance";
/// The page for searching transactions by amount range. POST runs the search.
pub const SEARCH_VIEW: &str = "/search";
/// The search form page, with an optional error message in the query string.
pub const SEARCH_FORM_VIEW: &str = "/search_form";
/// The route for static files.
pub const STATIC: &str = "/static";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/edit/{transaction_id}',
/// '{transaction_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let mut param_start = None;
    let mut param_end = None;

    for (i, c) in endpoint_path.chars().enumerate() {
        if c == '{' {
            param_start = Some(i);
        } else if param_start.is_some() && c == '}' {
            param_end = Some(i + 1);
            break;
        }
    }

    let param_start = match param_start {
        Some(start) => start,
        None => return endpoint_path.to_string(),
    };

    let param_end = param_end.unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
