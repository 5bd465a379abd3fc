use crate::layout::global_context::{ActivePage, AppGlobalContext};
use crate::layout::sidebar::Sidebar;
use crate::layout::Shell;
use crate::system::auth::context::use_auth_session;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
fn MainLayout() -> impl IntoView {
    let context = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                match context.active_page.get() {
                    ActivePage::VipNumbers => {
                        view! { <crate::domain::a002_vip_number::ui::list::VipNumberList /> }
                            .into_any()
                    }
                    ActivePage::NumberPacks => {
                        view! { <crate::domain::a003_number_pack::ui::list::NumberPackList /> }
                            .into_any()
                    }
                    ActivePage::Payments => {
                        view! { <crate::domain::a004_payment::ui::list::PaymentList /> }.into_any()
                    }
                    ActivePage::Refunds => {
                        view! { <crate::domain::a005_refund::ui::list::RefundList /> }.into_any()
                    }
                    ActivePage::Categories => {
                        view! { <crate::domain::a001_category::ui::list::CategoryList /> }
                            .into_any()
                    }
                }
            }
        />
    }
}

/// Staff who sign in with a non-admin account get a dead end, not the data
#[component]
fn NotAuthorized() -> impl IntoView {
    let session = use_auth_session();
    let sign_out = move |_| {
        spawn_local(async move {
            session.sign_out().await;
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1 class="login-card__title">"Access denied"</h1>
                <p class="login-card__subtitle">
                    "This account is not authorized to administer the store."
                </p>
                <Button appearance=ButtonAppearance::Secondary on_click=sign_out>
                    "Sign out"
                </Button>
            </div>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let session = use_auth_session();

    view! {
        <Show when=move || session.is_authenticated() fallback=|| view! { <LoginPage /> }>
            <Show when=move || session.is_authorized() fallback=|| view! { <NotAuthorized /> }>
                <MainLayout />
            </Show>
        </Show>
    }
}
