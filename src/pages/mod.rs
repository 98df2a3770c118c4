//! Pages
//!
//! One module per dashboard page plus the page switcher enum.

mod analytics;
mod dashboard;
mod knowledge;
mod opportunities;
mod projects;

pub use analytics::AnalyticsPage;
pub use dashboard::DashboardPage;
pub use knowledge::KnowledgePage;
pub use opportunities::OpportunitiesPage;
pub use projects::ProjectsPage;

/// Top-level pages reachable from the nav bar
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Opportunities,
    Projects,
    Knowledge,
    Analytics,
}

impl Page {
    /// Nav-bar order
    pub const ALL: [Page; 5] = [
        Page::Dashboard,
        Page::Opportunities,
        Page::Projects,
        Page::Knowledge,
        Page::Analytics,
    ];

    /// Tab label
    pub fn label(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Opportunities => "Opportunities",
            Page::Projects => "Projects",
            Page::Knowledge => "Knowledge base",
            Page::Analytics => "Analytics",
        }
    }
}
