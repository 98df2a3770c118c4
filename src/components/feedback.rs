//! Page Feedback Components
//!
//! Loading, error, and empty-state placeholders shared by every page.

use leptos::prelude::*;

/// Placeholder shown while a page is fetching
#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! { <div class="loading-indicator">"Loading..."</div> }
}

/// Banner for a failed fetch or submission
#[component]
pub fn ErrorBanner(#[prop(into)] message: String) -> impl IntoView {
    view! { <div class="error-banner">{message}</div> }
}

/// Placeholder for a successful fetch with nothing to show
#[component]
pub fn EmptyState(text: &'static str) -> impl IntoView {
    view! { <div class="empty-state">{text}</div> }
}
