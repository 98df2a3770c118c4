//! Filter Select Component
//!
//! Dropdown filter with a leading "all" choice that maps to no query parameter.

use leptos::prelude::*;

/// Dropdown over fixed (value, label) options
#[component]
pub fn FilterSelect(
    all_label: &'static str,
    options: &'static [(&'static str, &'static str)],
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <select
            class="filter-select"
            prop:value=move || value.get()
            on:change=move |ev| set_value.set(event_target_value(&ev))
        >
            <option value="all">{all_label}</option>
            {options.iter().map(|(option_value, label)| {
                let value = *option_value;
                view! { <option value=value>{*label}</option> }
            }).collect_view()}
        </select>
    }
}
