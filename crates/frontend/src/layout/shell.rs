use leptos::prelude::*;

/// Fixed frame: header bar on top, navigation on the left, the active
/// page in the center
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + Send + Sync + 'static,
    C: Fn() -> AnyView + Send + Sync + 'static,
{
    view! {
        <div class="shell">
            <crate::layout::header::Header />
            <div class="shell__body">
                <aside class="shell__left">{left()}</aside>
                <main class="shell__center">{move || center()}</main>
            </div>
        </div>
    }
}
