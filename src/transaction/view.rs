//! HTML rendering for the transactions list.

use maud::{Markup, html};

use crate::{
    endpoints,
    html::{
        DELETE_LINK_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE,
        TABLE_ROW_STYLE, base, format_currency,
    },
    navigation::NavBar,
    transaction::Transaction,
};

fn amount_class(amount: f64) -> &'static str {
    if amount < 0.0 {
        "amount amount-debit"
    } else {
        "amount amount-credit"
    }
}

/// Renders the transactions table.
///
/// The same view serves the full ledger and search results. `total_balance`
/// is only rendered when given; search results omit it because the total of a
/// filtered subset is not computed.
pub(crate) fn transactions_view(
    transactions: &[Transaction],
    total_balance: Option<f64>,
) -> Markup {
    let nav_bar = NavBar::new(endpoints::TRANSACTIONS_VIEW).into_html();

    let content = html! {
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            header class="page-header"
            {
                h1 { "Transactions" }

                a href=(endpoints::NEW_TRANSACTION_VIEW) class=(LINK_STYLE)
                {
                    "Add Transaction"
                }
            }

            @if transactions.is_empty() {
                p class="empty-state" { "No transactions." }
            } @else {
                table class="transactions-table"
                {
                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            th scope="col" class=(TABLE_CELL_STYLE) { "ID" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Amount" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                        }
                    }

                    tbody
                    {
                        @for transaction in transactions
                        {
                            tr class=(TABLE_ROW_STYLE)
                            {
                                td class=(TABLE_CELL_STYLE) { (transaction.id) }
                                td class=(TABLE_CELL_STYLE) { (transaction.date) }
                                td class=(TABLE_CELL_STYLE)
                                {
                                    span class=(amount_class(transaction.amount))
                                    {
                                        (format_currency(transaction.amount))
                                    }
                                }
                                td class=(TABLE_CELL_STYLE)
                                {
                                    a
                                        href=(endpoints::format_endpoint(
                                            endpoints::EDIT_TRANSACTION_VIEW,
                                            transaction.id,
                                        ))
                                        class=(LINK_STYLE)
                                    {
                                        "Edit"
                                    }

                                    " "

                                    a
                                        href=(endpoints::format_endpoint(
                                            endpoints::DELETE_TRANSACTION,
                                            transaction.id,
                                        ))
                                        class=(DELETE_LINK_STYLE)
                                    {
                                        "Delete"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            @if let Some(total_balance) = total_balance {
                p class="total-balance"
                {
                    "Total Balance: "

                    span class=(amount_class(total_balance))
                    {
                        (format_currency(total_balance))
                    }
                }
            }
        }
    };

    base("Transactions", &content)
}
