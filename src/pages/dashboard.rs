//! Dashboard Page
//!
//! Aggregate metrics plus the most recent opportunities and projects.

use leptos::prelude::*;

use crate::api;
use crate::components::{EmptyState, ErrorBanner, LoadingIndicator, MetricCard};
use crate::context::AppContext;
use crate::format;
use crate::loader::{FetchGate, PageState};
use crate::models::{DashboardSummary, Opportunity, Project};

/// How many recent entries each dashboard list shows
const RECENT_LIMIT: usize = 5;

/// Landing page with aggregate metrics and recent activity
#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (state, set_state) = signal(PageState::<DashboardSummary>::Loading);
    let gate = FetchGate::new();
    {
        let gate = gate.clone();
        Effect::new(move |_| {
            let user = ctx.user_id.get();
            gate.run(set_state, "Cannot load dashboard data", async move {
                api::dashboard_summary(&user).await
            });
        });
    }
    on_cleanup(move || gate.retire());

    view! {
        <div class="page dashboard-page">
            <h1>"Dashboard"</h1>
            {move || match state.get() {
                PageState::Loading => view! { <LoadingIndicator/> }.into_any(),
                PageState::Failed(message) => view! { <ErrorBanner message=message/> }.into_any(),
                PageState::Loaded(summary) => view! {
                    <div class="dashboard-body">
                        <div class="metric-grid">
                            <MetricCard
                                label="Total opportunities"
                                value=summary.total_opportunities.to_string()
                                accent="blue"
                            />
                            <MetricCard
                                label="Applications"
                                value=summary.total_applications.to_string()
                                accent="green"
                            />
                            <MetricCard
                                label="Projects"
                                value=summary.total_projects.to_string()
                                accent="purple"
                            />
                            <MetricCard
                                label="Knowledge assets"
                                value=summary.knowledge_assets_count.to_string()
                                accent="orange"
                            />
                        </div>
                        <RecentOpportunities opportunities=summary.recent_opportunities/>
                        <RecentProjects projects=summary.recent_projects/>
                    </div>
                }.into_any(),
            }}
        </div>
    }
}

#[component]
fn RecentOpportunities(opportunities: Vec<Opportunity>) -> impl IntoView {
    view! {
        <section class="recent-section">
            <h2>"Recent opportunities"</h2>
            {if opportunities.is_empty() {
                view! { <EmptyState text="No opportunities yet"/> }.into_any()
            } else {
                opportunities.into_iter().take(RECENT_LIMIT).map(|opportunity| {
                    let badge_class = format::opportunity_status_class(&opportunity.status);
                    let meta = format!(
                        "{} • {} • Score: {}",
                        opportunity.platform,
                        format::budget_label(opportunity.budget),
                        format::score_label(opportunity.ai_score),
                    );
                    view! {
                        <div class="recent-row">
                            <div class="recent-main">
                                <p class="recent-title">{opportunity.title}</p>
                                <p class="recent-meta">{meta}</p>
                            </div>
                            <span class=badge_class>{opportunity.status}</span>
                        </div>
                    }
                }).collect_view().into_any()
            }}
        </section>
    }
}

#[component]
fn RecentProjects(projects: Vec<Project>) -> impl IntoView {
    view! {
        <section class="recent-section">
            <h2>"Recent projects"</h2>
            {if projects.is_empty() {
                view! { <EmptyState text="No projects yet"/> }.into_any()
            } else {
                projects.into_iter().take(RECENT_LIMIT).map(|project| {
                    let badge_class = format::project_status_class(&project.status);
                    let meta = format!(
                        "Budget: {} • Due: {}",
                        format::budget_label(project.budget),
                        format::deadline_label(project.deadline.as_deref()),
                    );
                    view! {
                        <div class="recent-row">
                            <div class="recent-main">
                                <p class="recent-title">{project.title}</p>
                                <p class="recent-meta">{meta}</p>
                            </div>
                            <span class=badge_class>{project.status}</span>
                        </div>
                    }
                }).collect_view().into_any()
            }}
        </section>
    }
}
