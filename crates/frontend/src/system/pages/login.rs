use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::system::auth::context::use_auth_session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_auth_session();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);

    let submit = move || {
        if submitting.get_untracked() {
            return;
        }
        set_error.set(None);
        set_submitting.set(true);

        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        spawn_local(async move {
            match session.sign_in(email_value, password_value).await {
                Ok(()) => {}
                Err(message) => set_error.set(Some(message)),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1 class="login-card__title">"Store Admin"</h1>
                <p class="login-card__subtitle">"Sign in with your staff account"</p>

                {move || error.get().map(|message| view! {
                    <div class="alert alert--error">{message}</div>
                })}

                <div class="login-card__form">
                    <div class="form-group">
                        <label for="login-email">"E-mail"</label>
                        <input
                            type="email"
                            id="login-email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                            placeholder="admin@store.example"
                        />
                    </div>

                    <div class="form-group">
                        <label for="login-password">"Password"</label>
                        <input
                            type="password"
                            id="login-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    submit();
                                }
                            }
                        />
                    </div>

                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| submit()
                        disabled=Signal::derive(move || submitting.get())
                    >
                        {move || if submitting.get() { "Signing in..." } else { "Sign in" }}
                    </Button>
                </div>
            </div>
        </div>
    }
}
