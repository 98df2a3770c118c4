//! UI Components
//!
//! Reusable Leptos components.

mod asset_card;
mod create_opportunity_form;
mod feedback;
mod filter_select;
mod metric_card;
mod nav_bar;
mod opportunity_card;
mod project_card;

pub use asset_card::AssetCard;
pub use create_opportunity_form::CreateOpportunityForm;
pub use feedback::{EmptyState, ErrorBanner, LoadingIndicator};
pub use filter_select::FilterSelect;
pub use metric_card::MetricCard;
pub use nav_bar::NavBar;
pub use opportunity_card::OpportunityCard;
pub use project_card::ProjectCard;
