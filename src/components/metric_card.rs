//! Metric Card Component
//!
//! Headline number with a label, used on the dashboard and analytics pages.

use leptos::prelude::*;

/// Single metric tile with an optional accent color and change indicator
#[component]
pub fn MetricCard(
    label: &'static str,
    #[prop(into)] value: String,
    #[prop(optional)] accent: &'static str,
    #[prop(optional)] change: &'static str,
) -> impl IntoView {
    let card_class = if accent.is_empty() {
        String::from("metric-card")
    } else {
        format!("metric-card {accent}")
    };

    view! {
        <div class=card_class>
            <h3 class="metric-label">{label}</h3>
            <div class="metric-value">{value}</div>
            {(!change.is_empty()).then(|| view! {
                <div class="metric-change">{change}</div>
            })}
        </div>
    }
}
