use leptos::prelude::*;

/// Native date picker bound to a YYYY-MM-DD string
#[component]
pub fn DateInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <input
            type="date"
            class="date-input"
            prop:value=move || value.get()
            on:change=move |ev| {
                on_change.run(event_target_value(&ev));
            }
        />
    }
}
