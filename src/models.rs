//! Frontend Models
//!
//! Data structures mirroring the backend API entities.

use serde::{Deserialize, Serialize};

/// Freelance opportunity (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opportunity {
    pub id: String,
    pub title: String,
    pub platform: String,
    #[serde(default)]
    pub budget: f64,
    #[serde(default)]
    pub ai_score: Option<f64>,
    pub status: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    pub created_at: String,
}

/// Delivery project (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub status: String,
    #[serde(default)]
    pub budget: f64,
    #[serde(default)]
    pub deadline: Option<String>,
    pub created_at: String,
}

/// Reusable knowledge asset (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeAsset {
    pub id: String,
    pub title: String,
    pub asset_type: String,
    pub quality_score: f64,
    pub reuse_count: i64,
    pub created_at: String,
}

/// Aggregate counts plus bounded recent lists for the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_opportunities: i64,
    pub total_applications: i64,
    pub total_projects: i64,
    pub knowledge_assets_count: i64,
    #[serde(default)]
    pub recent_opportunities: Vec<Opportunity>,
    #[serde(default)]
    pub recent_projects: Vec<Project>,
}

/// Envelope of every list endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListPage<T> {
    pub items: Vec<T>,
}

/// Request body for opportunity creation (server assigns the rest)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpportunityDraft {
    pub title: String,
    pub description: String,
    pub platform: String,
    pub budget: f64,
    pub tech_stack: Vec<String>,
}

impl Default for OpportunityDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            platform: "upwork".to_string(),
            budget: 0.0,
            tech_stack: Vec::new(),
        }
    }
}

/// Platform options (value, label)
pub const PLATFORMS: &[(&str, &str)] = &[
    ("upwork", "Upwork"),
    ("linkedin", "LinkedIn"),
    ("toptal", "Toptal"),
];

/// Opportunity status options (value, label)
pub const OPPORTUNITY_STATUSES: &[(&str, &str)] = &[
    ("discovered", "Discovered"),
    ("reviewed", "Reviewed"),
    ("applied", "Applied"),
    ("won", "Won"),
];

/// Knowledge asset type options (value, label)
pub const ASSET_TYPES: &[(&str, &str)] = &[
    ("code", "Code"),
    ("doc", "Document"),
    ("template", "Template"),
    ("workflow", "Workflow"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opportunity_defaults_optional_fields() {
        let json = r#"{
            "id": "opp-1",
            "title": "Build a data pipeline",
            "platform": "upwork",
            "ai_score": null,
            "status": "discovered",
            "created_at": "2026-01-12T09:00:00"
        }"#;
        let opp: Opportunity = serde_json::from_str(json).unwrap();
        assert_eq!(opp.budget, 0.0);
        assert_eq!(opp.ai_score, None);
        assert!(opp.tech_stack.is_empty());
    }

    #[test]
    fn project_deadline_may_be_null() {
        let json = r#"{
            "id": "prj-1",
            "title": "Dashboard rework",
            "status": "in_progress",
            "budget": 2500.0,
            "deadline": null,
            "created_at": "2026-01-12T09:00:00"
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.deadline, None);
        assert_eq!(project.budget, 2500.0);
    }

    #[test]
    fn list_page_unwraps_items() {
        let json = r#"{"items": [{
            "id": "ka-1",
            "title": "Deploy checklist",
            "asset_type": "doc",
            "quality_score": 0.83,
            "reuse_count": 4,
            "created_at": "2026-01-12T09:00:00"
        }]}"#;
        let page: ListPage<KnowledgeAsset> = serde_json::from_str(json).unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].reuse_count, 4);
    }

    #[test]
    fn dashboard_summary_tolerates_missing_recents() {
        let json = r#"{
            "total_opportunities": 12,
            "total_applications": 4,
            "total_projects": 2,
            "knowledge_assets_count": 7
        }"#;
        let summary: DashboardSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.total_opportunities, 12);
        assert!(summary.recent_opportunities.is_empty());
        assert!(summary.recent_projects.is_empty());
    }

    #[test]
    fn draft_defaults_match_form_reset() {
        let draft = OpportunityDraft::default();
        assert_eq!(draft.platform, "upwork");
        assert_eq!(draft.budget, 0.0);
        assert!(draft.title.is_empty());
        assert!(draft.tech_stack.is_empty());
    }

    #[test]
    fn draft_serializes_all_fields() {
        let draft = OpportunityDraft {
            title: "Rust backend".to_string(),
            description: "API work".to_string(),
            platform: "toptal".to_string(),
            budget: 1500.0,
            tech_stack: vec!["rust".to_string(), "axum".to_string()],
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["platform"], "toptal");
        assert_eq!(value["budget"], 1500.0);
        assert_eq!(value["tech_stack"][1], "axum");
    }
}
