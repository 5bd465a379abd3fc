use leptos::prelude::*;

use crate::layout::global_context::{ActivePage, AppGlobalContext};
use crate::shared::icons::icon;

#[component]
pub fn Sidebar() -> impl IntoView {
    let context = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <nav class="sidebar">
            {ActivePage::all()
                .into_iter()
                .map(|page| {
                    view! {
                        <button
                            class=move || {
                                if context.active_page.get() == page {
                                    "sidebar__item sidebar__item--active"
                                } else {
                                    "sidebar__item"
                                }
                            }
                            on:click=move |_| context.open(page)
                        >
                            {icon(page.icon_name())}
                            <span>{page.title()}</span>
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
