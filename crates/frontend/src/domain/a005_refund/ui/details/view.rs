use super::view_model::RefundDetailsViewModel;
use contracts::enums::refund_status::RefundStatus;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn RefundDetails(
    id: Option<String>,
    #[prop(into)] on_saved: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = RefundDetailsViewModel::new();
    vm.load_if_needed(id);

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>
                    {move || if vm.is_edit_mode() { "Edit refund" } else { "New refund" }}
                </h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="refund-payment">"Payment reference"</label>
                    <input
                        type="text"
                        id="refund-payment"
                        prop:value=move || vm.form.get().payment_ref
                        on:input=move |ev| {
                            vm.form.update(|f| f.payment_ref = event_target_value(&ev));
                        }
                        placeholder="pay_..."
                    />
                </div>

                <div class="form-group">
                    <label for="refund-order">"Order reference"</label>
                    <input
                        type="text"
                        id="refund-order"
                        prop:value=move || vm.form.get().order_ref
                        on:input=move |ev| {
                            vm.form.update(|f| f.order_ref = event_target_value(&ev));
                        }
                        placeholder="order_..."
                    />
                </div>

                <div class="form-group">
                    <label for="refund-email">"Buyer e-mail"</label>
                    <input
                        type="text"
                        id="refund-email"
                        prop:value=move || vm.form.get().email
                        on:input=move |ev| {
                            vm.form.update(|f| f.email = event_target_value(&ev));
                        }
                        placeholder="buyer@example.com"
                    />
                </div>

                <div class="form-group">
                    <label for="refund-amount">"Amount (₹)"</label>
                    <input
                        type="number"
                        id="refund-amount"
                        prop:value=move || vm.price_input.get()
                        on:input=move |ev| {
                            vm.price_input.set(event_target_value(&ev));
                        }
                        placeholder="1500"
                    />
                </div>

                <div class="form-group">
                    <label for="refund-status">"Status"</label>
                    <select
                        id="refund-status"
                        prop:value=move || vm.form.get().status.code().to_string()
                        on:change=move |ev| {
                            if let Some(status) =
                                RefundStatus::from_code(&event_target_value(&ev))
                            {
                                vm.form.update(|f| f.status = status);
                            }
                        }
                    >
                        {RefundStatus::all()
                            .into_iter()
                            .map(|s| view! {
                                <option value=s.code()>{s.display_name()}</option>
                            })
                            .collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="refund-reason">"Reason"</label>
                    <textarea
                        id="refund-reason"
                        prop:value=move || vm.form.get().reason.unwrap_or_default()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|f| {
                                f.reason = if value.is_empty() { None } else { Some(value) };
                            });
                        }
                        placeholder="Number no longer available"
                        rows="3"
                    />
                </div>
            </div>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.save_command(on_saved)
                    disabled=Signal::derive(move || vm.saving.get())
                >
                    {move || if vm.saving.get() { "Saving..." } else { "Save" }}
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_cancel.run(())
                >
                    "Cancel"
                </Button>
            </div>
        </div>
    }
}
