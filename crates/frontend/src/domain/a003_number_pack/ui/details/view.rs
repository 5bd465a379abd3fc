use super::view_model::NumberPackDetailsViewModel;
use contracts::domain::a001_category::aggregate::Category;
use contracts::enums::pack_status::PackStatus;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn NumberPackDetails(
    id: Option<String>,
    #[prop(into)] categories: Signal<Vec<Category>>,
    #[prop(into)] on_saved: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = NumberPackDetailsViewModel::new();
    vm.load_if_needed(id);

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>
                    {move || if vm.is_edit_mode() { "Edit number pack" } else { "New number pack" }}
                </h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="pack-name">"Name"</label>
                    <input
                        type="text"
                        id="pack-name"
                        prop:value=move || vm.form.get().name
                        on:input=move |ev| {
                            vm.form.update(|f| f.name = event_target_value(&ev));
                        }
                        placeholder="Twin nines pack"
                    />
                </div>

                <div class="form-group">
                    <label for="pack-numbers">"Numbers (one per line)"</label>
                    <textarea
                        id="pack-numbers"
                        prop:value=move || vm.numbers_input.get()
                        on:input=move |ev| {
                            vm.numbers_input.set(event_target_value(&ev));
                        }
                        placeholder="9999900001\n9999900002"
                        rows="4"
                    />
                </div>

                <div class="form-group">
                    <label for="pack-price">"Price (₹)"</label>
                    <input
                        type="number"
                        id="pack-price"
                        prop:value=move || vm.price_input.get()
                        on:input=move |ev| {
                            vm.price_input.set(event_target_value(&ev));
                        }
                        placeholder="25000"
                    />
                </div>

                <div class="form-group">
                    <label for="pack-status">"Status"</label>
                    <select
                        id="pack-status"
                        prop:value=move || vm.form.get().status.code().to_string()
                        on:change=move |ev| {
                            if let Some(status) = PackStatus::from_code(&event_target_value(&ev)) {
                                vm.form.update(|f| f.status = status);
                            }
                        }
                    >
                        {PackStatus::all()
                            .into_iter()
                            .map(|s| view! {
                                <option value=s.code()>{s.display_name()}</option>
                            })
                            .collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="pack-category">"Category"</label>
                    <select
                        id="pack-category"
                        prop:value=move || vm.form.get().category_slug.unwrap_or_default()
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
                    <label for="pack-comment">"Comment"</label>
                    <textarea
                        id="pack-comment"
                        prop:value=move || vm.form.get().comment.unwrap_or_default()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|f| {
                                f.comment = if value.is_empty() { None } else { Some(value) };
                            });
                        }
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
