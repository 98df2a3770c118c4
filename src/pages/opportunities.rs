//! Opportunities Page
//!
//! Filterable opportunity list with an inline creation form.

use leptos::prelude::*;

use crate::api;
use crate::components::{
    CreateOpportunityForm, EmptyState, ErrorBanner, FilterSelect, LoadingIndicator,
    OpportunityCard,
};
use crate::context::AppContext;
use crate::loader::{FetchGate, PageState};
use crate::models::{Opportunity, OPPORTUNITY_STATUSES, PLATFORMS};

/// Page size for the opportunity list
const PAGE_LIMIT: u32 = 20;

/// Opportunity list with status/platform filters and a creation form
#[component]
pub fn OpportunitiesPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (state, set_state) = signal(PageState::<Vec<Opportunity>>::Loading);
    let (status_filter, set_status_filter) = signal(String::from("all"));
    let (platform_filter, set_platform_filter) = signal(String::from("all"));
    let (show_form, set_show_form) = signal(false);

    let gate = FetchGate::new();
    {
        let gate = gate.clone();
        Effect::new(move |_| {
            let user = ctx.user_id.get();
            let status = status_filter.get();
            let platform = platform_filter.get();
            let _ = ctx.reload_trigger.get();
            gate.run(set_state, "Cannot load opportunity list", async move {
                api::list_opportunities(
                    &user,
                    0,
                    PAGE_LIMIT,
                    api::filter_param(&status),
                    api::filter_param(&platform),
                )
                .await
                .map(|page| page.items)
            });
        });
    }
    on_cleanup(move || gate.retire());

    view! {
        <div class="page opportunities-page">
            <div class="page-header">
                <h1>"Opportunities"</h1>
                <button
                    class="primary-btn"
                    on:click=move |_| set_show_form.update(|visible| *visible = !*visible)
                >
                    "New opportunity"
                </button>
            </div>

            {move || show_form.get().then(|| view! {
                <CreateOpportunityForm set_visible=set_show_form/>
            })}

            <div class="filter-row">
                <FilterSelect
                    all_label="All statuses"
                    options=OPPORTUNITY_STATUSES
                    value=status_filter
                    set_value=set_status_filter
                />
                <FilterSelect
                    all_label="All platforms"
                    options=PLATFORMS
                    value=platform_filter
                    set_value=set_platform_filter
                />
            </div>

            {move || match state.get() {
                PageState::Loading => view! { <LoadingIndicator/> }.into_any(),
                PageState::Failed(message) => view! { <ErrorBanner message=message/> }.into_any(),
                PageState::Loaded(opportunities) => {
                    if opportunities.is_empty() {
                        view! { <EmptyState text="No opportunities yet"/> }.into_any()
                    } else {
                        view! {
                            <div class="card-list">
                                {opportunities.into_iter().map(|opportunity| view! {
                                    <OpportunityCard opportunity=opportunity/>
                                }).collect_view()}
                            </div>
                        }.into_any()
                    }
                }
            }}
        </div>
    }
}
