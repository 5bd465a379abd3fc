use leptos::prelude::*;
use thaw::*;

/// Modal guard in front of irreversible actions. Nothing happens unless
/// the user explicitly confirms; Cancel leaves all state untouched.
#[component]
pub fn ConfirmDialog(
    /// Dialog is rendered while this holds a message
    #[prop(into)]
    message: Signal<Option<String>>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        {move || message.get().map(|text| view! {
            <div class="modal-backdrop">
                <div class="modal modal--confirm">
                    <div class="modal__body">{text}</div>
                    <div class="modal__actions">
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| on_cancel.run(())
                        >
                            "Cancel"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| on_confirm.run(())
                        >
                            "Delete"
                        </Button>
                    </div>
                </div>
            </div>
        })}
    }
}
