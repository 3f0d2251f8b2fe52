use maud::{Markup, html};

use crate::html::{BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE};

pub(crate) struct TransactionFormDefaults<'a> {
    /// The value to prefill the date input with.
    pub(crate) date: &'a str,
    /// The value to prefill the amount input with, if any.
    pub(crate) amount: Option<f64>,
}

/// Renders the date and amount fields shared by the add and edit forms.
///
/// The form posts back to `action`.
pub(crate) fn transaction_form(
    action: &str,
    submit_label: &str,
    defaults: &TransactionFormDefaults<'_>,
) -> Markup {
    let amount_str = defaults.amount.map(|amount| format!("{amount}"));

    html! {
        form method="post" action=(action) class="transaction-form"
        {
            div
            {
                label
                    for="date"
                    class=(FORM_LABEL_STYLE)
                {
                    "Date"
                }

                input
                    name="date"
                    id="date"
                    type="date"
                    value=(defaults.date)
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label
                    for="amount"
                    class=(FORM_LABEL_STYLE)
                {
                    "Amount"
                }

                input
                    name="amount"
                    id="amount"
                    type="number"
                    step="0.01"
                    placeholder="0.00"
                    value=[amount_str.as_deref()]
                    required
                    autofocus
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            button type="submit" tabindex="0" class=(BUTTON_PRIMARY_STYLE)
            {
                (submit_label)
            }
        }
    }
}
