/// List helpers shared by every table view (client-side search overlay,
/// match highlighting, amount formatting)
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Implemented by record types the search overlay can narrow
pub trait Searchable {
    /// Case-insensitive substring match over the record's display fields
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Narrow the loaded buffer by the search string, client-side only.
/// An empty string is the identity; order is always preserved and the
/// result depends on nothing but `(items, filter)`.
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    let needle = filter.trim();
    if needle.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.matches_filter(needle))
        .cloned()
        .collect()
}

/// Highlight matches of `filter` inside `text` (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let filter = filter.trim();
    if filter.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let filter_lower = filter.to_lowercase();
    let text_lower = text.to_lowercase();

    if !text_lower.contains(&filter_lower) {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;

    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let actual_pos = last_pos + pos;

        if actual_pos > last_pos {
            parts.push(
                view! { <span>{text[last_pos..actual_pos].to_string()}</span> }.into_any(),
            );
        }

        let match_end = actual_pos + filter_lower.len();
        parts.push(view! {
            <span class="search-hit">
                {text[actual_pos..match_end].to_string()}
            </span>
        }.into_any());

        last_pos = match_end;
    }

    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Minor currency units -> "₹1,234.50"
pub fn format_amount(minor: i64) -> String {
    let negative = minor < 0;
    let minor = minor.unsigned_abs();
    let rupees = minor / 100;
    let paise = minor % 100;

    let digits = rupees.to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let grouped: String = grouped.chars().rev().collect();

    format!(
        "{}₹{}.{:02}",
        if negative { "-" } else { "" },
        grouped,
        paise
    )
}

/// Search input with debounce and a clear button
#[component]
pub fn SearchInput(
    /// Current filter value (display only)
    #[prop(into)]
    value: Signal<String>,
    /// Callback invoked after the debounce window
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search loaded records...".to_string()
    } else {
        placeholder
    };

    // Local input state (pre-debounce)
    let (input_value, set_input_value) = signal(String::new());

    let debounce_timeout = StoredValue::new(None::<i32>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        if let Some(timeout_id) = debounce_timeout.get_value() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(timeout_id);
            }
        }

        let window = web_sys::window().expect("no window");
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            on_change.run(new_value.clone());
        }) as Box<dyn Fn()>);

        let timeout_id = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref::<js_sys::Function>(),
                300,
            )
            .expect("setTimeout failed");

        closure.forget();
        debounce_timeout.set_value(Some(timeout_id));
    };

    let clear_filter = move |_| {
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                placeholder={placeholder}
                class=move || {
                    if value.get().trim().is_empty() {
                        "search-input__field"
                    } else {
                        "search-input__field search-input__field--active"
                    }
                }
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let val = event_target_value(&ev);
                    handle_input_change(val);
                }
            />
            {move || if !input_value.get().is_empty() {
                view! {
                    <button
                        class="search-input__clear"
                        on:click=clear_filter
                        title="Clear"
                    >
                        {crate::shared::icons::icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::{filter_list, format_amount, Searchable};

    #[derive(Clone, Debug, PartialEq)]
    struct Entry {
        number: String,
        email: String,
    }

    impl Searchable for Entry {
        fn matches_filter(&self, filter: &str) -> bool {
            let needle = filter.to_lowercase();
            self.number.to_lowercase().contains(&needle)
                || self.email.to_lowercase().contains(&needle)
        }
    }

    fn sample() -> Vec<Entry> {
        vec![
            Entry { number: "9999900001".into(), email: "Arjun@example.com".into() },
            Entry { number: "9888811111".into(), email: "meera@example.com".into() },
            Entry { number: "9777712345".into(), email: "dev@example.com".into() },
        ]
    }

    #[test]
    fn empty_filter_is_identity() {
        let items = sample();
        assert_eq!(filter_list(&items, ""), items);
        assert_eq!(filter_list(&items, "   "), items);
    }

    #[test]
    fn substring_match_is_case_insensitive_and_order_preserving() {
        let items = sample();
        let hits = filter_list(&items, "ARJUN");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].number, "9999900001");

        let hits = filter_list(&items, "9");
        assert_eq!(hits, items); // all match, original order kept
    }

    #[test]
    fn filtering_is_idempotent_and_pure() {
        let items = sample();
        let once = filter_list(&items, "example");
        let twice = filter_list(&items, "example");
        assert_eq!(once, twice);
        // input untouched
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn amounts_are_grouped() {
        assert_eq!(format_amount(0), "₹0.00");
        assert_eq!(format_amount(150_000), "₹1,500.00");
        assert_eq!(format_amount(123_456_789), "₹1,234,567.89");
        assert_eq!(format_amount(-4_500), "-₹45.00");
    }
}
