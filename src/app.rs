//! GigBoard Frontend App
//!
//! Main application component: nav bar plus the active page.

use leptos::prelude::*;

use crate::components::NavBar;
use crate::context::AppContext;
use crate::pages::{
    AnalyticsPage, DashboardPage, KnowledgePage, OpportunitiesPage, Page, ProjectsPage,
};

/// Account shown before the user types their own id
const DEFAULT_USER_ID: &str = "demo-user-001";

#[component]
pub fn App() -> impl IntoView {
    // State
    let (user_id, set_user_id) = signal(String::from(DEFAULT_USER_ID));
    let (page, set_page) = signal(Page::default());
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    // Provide context to all children
    provide_context(AppContext::new(user_id, (reload_trigger, set_reload_trigger)));

    view! {
        <div class="app-layout">
            <NavBar page=page set_page=set_page set_user_id=set_user_id/>
            <main class="main-content">
                {move || match page.get() {
                    Page::Dashboard => view! { <DashboardPage/> }.into_any(),
                    Page::Opportunities => view! { <OpportunitiesPage/> }.into_any(),
                    Page::Projects => view! { <ProjectsPage/> }.into_any(),
                    Page::Knowledge => view! { <KnowledgePage/> }.into_any(),
                    Page::Analytics => view! { <AnalyticsPage/> }.into_any(),
                }}
            </main>
        </div>
    }
}
