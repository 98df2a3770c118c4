//! Create Opportunity Form Component
//!
//! Toggleable form for posting a new opportunity. On success the fields
//! reset, the form hides, and the list reloads; on failure the draft is
//! kept so the user can retry.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::components::feedback::ErrorBanner;
use crate::context::AppContext;
use crate::models::{OpportunityDraft, PLATFORMS};

/// Split a comma-separated tech list into trimmed, non-empty entries
fn parse_tech_stack(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Both free-text fields must be filled before the draft may be posted
fn draft_ready(title: &str, description: &str) -> bool {
    !title.is_empty() && !description.is_empty()
}

/// Form for creating a new opportunity
#[component]
pub fn CreateOpportunityForm(set_visible: WriteSignal<bool>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (platform, set_platform) = signal(String::from("upwork"));
    let (budget, set_budget) = signal(String::new());
    let (tech_stack, set_tech_stack) = signal(String::new());
    let (error, set_error) = signal(None::<String>);

    let create_opportunity = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title_value = title.get();
        let description_value = description.get();
        if !draft_ready(&title_value, &description_value) { return; }
        let user = ctx.user_id.get();
        let draft = OpportunityDraft {
            title: title_value,
            description: description_value,
            platform: platform.get(),
            budget: budget.get().parse().unwrap_or(0.0),
            tech_stack: parse_tech_stack(&tech_stack.get()),
        };

        spawn_local(async move {
            match api::create_opportunity(&user, &draft).await {
                Ok(_) => {
                    set_title.set(String::new());
                    set_description.set(String::new());
                    set_platform.set(String::from("upwork"));
                    set_budget.set(String::new());
                    set_tech_stack.set(String::new());
                    set_error.set(None);
                    set_visible.set(false);
                    ctx.reload();
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("Failed to create opportunity: {err}").into(),
                    );
                    set_error.set(Some(String::from("Failed to create opportunity")));
                }
            }
        });
    };

    view! {
        <form class="create-form" on:submit=create_opportunity>
            <h2>"New opportunity"</h2>

            <div class="form-field">
                <label>"Title"</label>
                <input
                    type="text"
                    placeholder="Opportunity title"
                    required=true
                    prop:value=move || title.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_title.set(input.value());
                    }
                />
            </div>

            <div class="form-field">
                <label>"Description"</label>
                <textarea
                    placeholder="What the work involves"
                    required=true
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                ></textarea>
            </div>

            <div class="form-row">
                <div class="form-field">
                    <label>"Platform"</label>
                    <select
                        prop:value=move || platform.get()
                        on:change=move |ev| set_platform.set(event_target_value(&ev))
                    >
                        {PLATFORMS.iter().map(|(platform_value, label)| {
                            let value = *platform_value;
                            view! { <option value=value>{*label}</option> }
                        }).collect_view()}
                    </select>
                </div>
                <div class="form-field">
                    <label>"Budget"</label>
                    <input
                        type="number"
                        min="0"
                        step="100"
                        placeholder="0"
                        prop:value=move || budget.get()
                        on:input=move |ev| set_budget.set(event_target_value(&ev))
                    />
                </div>
            </div>

            <div class="form-field">
                <label>"Tech stack"</label>
                <input
                    type="text"
                    placeholder="rust, wasm, leptos"
                    prop:value=move || tech_stack.get()
                    on:input=move |ev| set_tech_stack.set(event_target_value(&ev))
                />
            </div>

            {move || error.get().map(|message| view! { <ErrorBanner message=message/> })}

            <div class="form-actions">
                <button type="submit">"Create"</button>
                <button type="button" class="cancel-btn" on:click=move |_| set_visible.set(false)>
                    "Cancel"
                </button>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::{draft_ready, parse_tech_stack};

    #[test]
    fn splits_and_trims_entries() {
        assert_eq!(
            parse_tech_stack("rust, wasm , leptos"),
            vec!["rust", "wasm", "leptos"]
        );
    }

    #[test]
    fn drops_empty_segments() {
        assert_eq!(parse_tech_stack(" , rust,, "), vec!["rust"]);
        assert!(parse_tech_stack("").is_empty());
    }

    #[test]
    fn requires_both_title_and_description() {
        assert!(draft_ready("Scraper rework", "Port the nightly pull to async"));
        assert!(!draft_ready("", "Port the nightly pull to async"));
        assert!(!draft_ready("Scraper rework", ""));
        assert!(!draft_ready("", ""));
    }
}
