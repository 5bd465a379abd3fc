use contracts::domain::a004_payment::aggregate::Payment;
use leptos::prelude::*;
use thaw::*;

use crate::shared::list_utils::format_amount;

/// Read-only view of one transaction. Payments are written by the
/// storefront checkout; the admin UI never edits them.
#[component]
pub fn PaymentDetails(payment: Payment, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let rows = vec![
        ("Payment", payment.payment_ref.clone()),
        ("Order", payment.order_ref.clone()),
        ("E-mail", payment.email.clone()),
        ("Item", payment.item_label.clone()),
        ("Method", payment.method.display_name().to_string()),
        ("Status", payment.status.display_name().to_string()),
        ("Amount", format_amount(payment.amount)),
        (
            "Paid",
            payment
                .metadata
                .created_at
                .format("%d.%m.%Y %H:%M:%S")
                .to_string(),
        ),
    ];

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>"Transaction"</h3>
            </div>

            <div class="details-form">
                {rows
                    .into_iter()
                    .map(|(label, value)| view! {
                        <div class="form-group form-group--readonly">
                            <label>{label}</label>
                            <div class="form-group__value">{value}</div>
                        </div>
                    })
                    .collect_view()}
            </div>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_close.run(())
                >
                    "Close"
                </Button>
            </div>
        </div>
    }
}
