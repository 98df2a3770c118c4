//! Opportunity Card Component
//!
//! Single opportunity in the list view: title and budget on the left,
//! AI score and status badge on the right.

use leptos::prelude::*;

use crate::format;
use crate::models::Opportunity;

/// One opportunity in the list
#[component]
pub fn OpportunityCard(opportunity: Opportunity) -> impl IntoView {
    let badge_class = format::opportunity_status_class(&opportunity.status);
    let score = format::score_label(opportunity.ai_score);
    let meta = format!(
        "{} • {}",
        opportunity.platform,
        format::budget_label(opportunity.budget)
    );

    view! {
        <div class="opportunity-card">
            <div class="card-main">
                <h3>{opportunity.title}</h3>
                <p class="card-meta">{meta}</p>
                <div class="tech-stack">
                    {opportunity.tech_stack.iter().map(|tech| view! {
                        <span class="tech-tag">{tech.clone()}</span>
                    }).collect_view()}
                </div>
            </div>
            <div class="card-side">
                <div class="ai-score">{score}</div>
                <span class=badge_class>{opportunity.status}</span>
            </div>
        </div>
    }
}
