//! Sentinel-driven next-page trigger.
//!
//! One invisible div sits below the table. While `active` is true an
//! IntersectionObserver watches it; each transition to visible fires
//! `on_visible` exactly once (the observer only reports transitions, not
//! continued visibility). When `active` flips false — exhausted feed,
//! fetch in flight — the observer is disconnected so nothing fires after
//! teardown.

use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry};

#[component]
pub fn InfiniteScrollSentinel(
    /// Observe only while this is true
    #[prop(into)]
    active: Signal<bool>,
    /// Invoked once per became-visible transition
    #[prop(into)]
    on_visible: Callback<()>,
) -> impl IntoView {
    let node_ref: NodeRef<Div> = NodeRef::new();
    let observer: StoredValue<Option<IntersectionObserver>, LocalStorage> =
        StoredValue::new_local(None);

    Effect::new(move |_| {
        let is_active = active.get();
        let Some(element) = node_ref.get() else {
            return;
        };

        // Drop the previous observer before deciding anything else
        observer.update_value(|slot| {
            if let Some(old) = slot.take() {
                old.disconnect();
            }
        });

        if !is_active {
            return;
        }

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        on_visible.run(());
                    }
                }
            },
        );

        match IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(new_observer) => {
                new_observer.observe(&element);
                observer.set_value(Some(new_observer));
            }
            Err(e) => log::error!("Failed to create IntersectionObserver: {e:?}"),
        }
        callback.forget();
    });

    on_cleanup(move || {
        observer.update_value(|slot| {
            if let Some(old) = slot.take() {
                old.disconnect();
            }
        });
    });

    view! { <div node_ref=node_ref class="scroll-sentinel"></div> }
}
