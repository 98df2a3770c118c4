//! Project Card Component
//!
//! Single project in the list view with budget and deadline rows.

use leptos::prelude::*;

use crate::format;
use crate::models::Project;

/// One project in the list
#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let badge_class = format::project_status_class(&project.status);
    let deadline = format::deadline_label(project.deadline.as_deref());

    view! {
        <div class="project-card">
            <div class="card-header">
                <h3>{project.title}</h3>
                <span class=badge_class>{project.status}</span>
            </div>
            <div class="detail-row">
                <span class="detail-label">"Budget:"</span>
                <span>{format::budget_label(project.budget)}</span>
            </div>
            <div class="detail-row">
                <span class="detail-label">"Deadline:"</span>
                <span>{deadline}</span>
            </div>
        </div>
    }
}
