//! Projects Page
//!
//! Project list for the active user.

use leptos::prelude::*;

use crate::api;
use crate::components::{EmptyState, ErrorBanner, LoadingIndicator, ProjectCard};
use crate::context::AppContext;
use crate::loader::{FetchGate, PageState};
use crate::models::Project;

/// Page size for the project list
const PAGE_LIMIT: u32 = 20;

/// Project list page
#[component]
pub fn ProjectsPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (state, set_state) = signal(PageState::<Vec<Project>>::Loading);
    let gate = FetchGate::new();
    {
        let gate = gate.clone();
        Effect::new(move |_| {
            let user = ctx.user_id.get();
            gate.run(set_state, "Cannot load project list", async move {
                api::list_projects(&user, 0, PAGE_LIMIT)
                    .await
                    .map(|page| page.items)
            });
        });
    }
    on_cleanup(move || gate.retire());

    view! {
        <div class="page projects-page">
            <div class="page-header">
                <h1>"Projects"</h1>
                <button class="primary-btn">"New project"</button>
            </div>

            {move || match state.get() {
                PageState::Loading => view! { <LoadingIndicator/> }.into_any(),
                PageState::Failed(message) => view! { <ErrorBanner message=message/> }.into_any(),
                PageState::Loaded(projects) => {
                    if projects.is_empty() {
                        view! { <EmptyState text="No projects yet"/> }.into_any()
                    } else {
                        view! {
                            <div class="card-grid">
                                {projects.into_iter().map(|project| view! {
                                    <ProjectCard project=project/>
                                }).collect_view()}
                            </div>
                        }.into_any()
                    }
                }
            }}
        </div>
    }
}
