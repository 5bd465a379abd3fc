use super::view_model::VipNumberDetailsViewModel;
use contracts::domain::a001_category::aggregate::Category;
use contracts::enums::vip_number_status::VipNumberStatus;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn VipNumberDetails(
    id: Option<String>,
    #[prop(into)] categories: Signal<Vec<Category>>,
    #[prop(into)] on_saved: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = VipNumberDetailsViewModel::new();
    vm.load_if_needed(id);

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>
                    {move || if vm.is_edit_mode() { "Edit VIP number" } else { "New VIP number" }}
                </h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="number">"Number"</label>
                    <input
                        type="text"
                        id="number"
                        prop:value=move || vm.form.get().number
                        on:input=move |ev| {
                            vm.form.update(|f| f.number = event_target_value(&ev));
                        }
                        placeholder="9876543210"
                    />
                </div>

                <div class="form-group">
                    <label for="price">"Price (₹)"</label>
                    <input
                        type="number"
                        id="price"
                        prop:value=move || vm.price_input.get()
                        on:input=move |ev| {
                            vm.price_input.set(event_target_value(&ev));
                        }
                        placeholder="15000"
                    />
                </div>

                <div class="form-group">
                    <label for="status">"Status"</label>
                    <select
                        id="status"
                        prop:value=move || vm.form.get().status.code().to_string()
                        on:change=move |ev| {
                            if let Some(status) =
                                VipNumberStatus::from_code(&event_target_value(&ev))
                            {
                                vm.form.update(|f| f.status = status);
                            }
                        }
                    >
                        {VipNumberStatus::all()
                            .into_iter()
                            .map(|s| view! {
                                <option value=s.code()>{s.display_name()}</option>
                            })
                            .collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="category">"Category"</label>
                    <select
                        id="category"
                        prop:value=move || {
                            vm.form.get().category_slug.unwrap_or_default()
                        }
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|f| {
                                f.category_slug =
                                    if value.is_empty() { None } else { Some(value) };
                            });
                        }
                    >
                        <option value="">"None"</option>
                        {move || categories
                            .get()
                            .into_iter()
                            .map(|c| view! {
                                <option value=c.slug.clone()>{c.name.clone()}</option>
                            })
                            .collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="highlight">"Highlight"</label>
                    <input
                        type="text"
                        id="highlight"
                        prop:value=move || vm.form.get().highlight.unwrap_or_default()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|f| {
                                f.highlight = if value.is_empty() { None } else { Some(value) };
                            });
                        }
                        placeholder="Ends in 7777"
                    />
                </div>

                <div class="form-group">
                    <label for="comment">"Comment"</label>
                    <textarea
                        id="comment"
                        prop:value=move || vm.form.get().comment.unwrap_or_default()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|f| {
                                f.comment = if value.is_empty() { None } else { Some(value) };
                            });
                        }
                        placeholder="Internal notes (optional)"
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
