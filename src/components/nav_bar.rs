//! Nav Bar Component
//!
//! Top bar with page tabs and the user-id field every page reads from.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::pages::Page;

/// Top navigation bar
#[component]
pub fn NavBar(
    page: ReadSignal<Page>,
    set_page: WriteSignal<Page>,
    set_user_id: WriteSignal<String>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <nav class="nav-bar">
            <div class="nav-brand">"GigBoard"</div>
            <div class="nav-tabs">
                {Page::ALL.iter().map(|entry| {
                    let target = *entry;
                    let tab_class = move || {
                        if page.get() == target { "nav-tab active" } else { "nav-tab" }
                    };
                    view! {
                        <button class=tab_class on:click=move |_| set_page.set(target)>
                            {target.label()}
                        </button>
                    }
                }).collect_view()}
            </div>
            <input
                class="user-id-input"
                type="text"
                placeholder="User ID"
                prop:value=move || ctx.user_id.get()
                on:input=move |ev| set_user_id.set(event_target_value(&ev))
            />
        </nav>
    }
}
