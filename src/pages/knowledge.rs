//! Knowledge Base Page
//!
//! Reusable asset library, filterable by asset type. The asset store is
//! shared rather than per-user, so only the type filter drives refetches.

use leptos::prelude::*;

use crate::api;
use crate::components::{AssetCard, EmptyState, ErrorBanner, FilterSelect, LoadingIndicator};
use crate::loader::{FetchGate, PageState};
use crate::models::{KnowledgeAsset, ASSET_TYPES};

/// Page size for the asset grid
const PAGE_LIMIT: u32 = 50;

/// Knowledge asset grid page
#[component]
pub fn KnowledgePage() -> impl IntoView {
    let (state, set_state) = signal(PageState::<Vec<KnowledgeAsset>>::Loading);
    let (type_filter, set_type_filter) = signal(String::from("all"));

    let gate = FetchGate::new();
    {
        let gate = gate.clone();
        Effect::new(move |_| {
            let asset_type = type_filter.get();
            gate.run(set_state, "Cannot load knowledge assets", async move {
                api::list_knowledge_assets(0, PAGE_LIMIT, api::filter_param(&asset_type))
                    .await
                    .map(|page| page.items)
            });
        });
    }
    on_cleanup(move || gate.retire());

    view! {
        <div class="page knowledge-page">
            <div class="page-header">
                <h1>"Knowledge base"</h1>
                <button class="primary-btn">"New asset"</button>
            </div>

            <div class="filter-row">
                <FilterSelect
                    all_label="All types"
                    options=ASSET_TYPES
                    value=type_filter
                    set_value=set_type_filter
                />
            </div>

            {move || match state.get() {
                PageState::Loading => view! { <LoadingIndicator/> }.into_any(),
                PageState::Failed(message) => view! { <ErrorBanner message=message/> }.into_any(),
                PageState::Loaded(assets) => {
                    if assets.is_empty() {
                        view! { <EmptyState text="No knowledge assets yet"/> }.into_any()
                    } else {
                        view! {
                            <div class="card-grid">
                                {assets.into_iter().map(|asset| view! {
                                    <AssetCard asset=asset/>
                                }).collect_view()}
                            </div>
                        }.into_any()
                    }
                }
            }}
        </div>
    }
}
