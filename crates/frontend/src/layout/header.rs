use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::icons::icon;
use crate::system::auth::context::use_auth_session;

#[component]
pub fn Header() -> impl IntoView {
    let session = use_auth_session();

    let sign_out = move |_| {
        spawn_local(async move {
            session.sign_out().await;
        });
    };

    view! {
        <header class="header">
            <div class="header__brand">
                {icon("phone")}
                <span class="header__title">"VIP Number Store Admin"</span>
            </div>
            <div class="header__user">
                <span class="header__email">
                    {move || session.current_user().map(|u| u.email).unwrap_or_default()}
                </span>
                <Button appearance=ButtonAppearance::Subtle on_click=sign_out>
                    {icon("log-out")}
                    " Sign out"
                </Button>
            </div>
        </header>
    }
}
