//! API Client
//!
//! HTTP bindings to the backend REST endpoints.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::models::{
    DashboardSummary, KnowledgeAsset, ListPage, Opportunity, OpportunityDraft, Project,
};

/// Backend origin plus versioned path prefix
pub const API_BASE: &str = "http://localhost:8000/api/v1";

/// Bytes escaped when a user-supplied value lands in a path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

/// Why a request failed. Pages collapse both kinds into one fixed message;
/// the detail only goes to the console.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("network failure: {0}")]
    Network(#[from] reqwest::Error),
    #[error("server returned {0}")]
    Status(StatusCode),
}

fn encode_segment(raw: &str) -> String {
    utf8_percent_encode(raw, PATH_SEGMENT).to_string()
}

fn user_scoped(user_id: &str, resource: &str) -> String {
    format!("/users/{}/{}", encode_segment(user_id), resource)
}

/// "all" selections map to an absent query parameter
pub fn filter_param(selection: &str) -> Option<&str> {
    if selection == "all" {
        None
    } else {
        Some(selection)
    }
}

/// skip/limit plus any set filters; unset filters are omitted entirely
fn list_query(
    skip: u32,
    limit: u32,
    filters: &[(&'static str, Option<&str>)],
) -> Vec<(&'static str, String)> {
    let mut pairs = vec![("skip", skip.to_string()), ("limit", limit.to_string())];
    for (name, value) in filters {
        if let Some(value) = value {
            pairs.push((name, (*value).to_string()));
        }
    }
    pairs
}

async fn get_json<T: DeserializeOwned>(
    path: &str,
    query: &[(&'static str, String)],
) -> Result<T, RequestError> {
    let response = Client::new()
        .get(format!("{API_BASE}{path}"))
        .query(&query)
        .send()
        .await?;
    if !response.status().is_success() {
        return Err(RequestError::Status(response.status()));
    }
    Ok(response.json().await?)
}

async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    query: &[(&'static str, String)],
    body: &B,
) -> Result<T, RequestError> {
    let response = Client::new()
        .post(format!("{API_BASE}{path}"))
        .query(&query)
        .json(body)
        .send()
        .await?;
    if !response.status().is_success() {
        return Err(RequestError::Status(response.status()));
    }
    Ok(response.json().await?)
}

// ========================
// Endpoint Bindings
// ========================

pub async fn dashboard_summary(user_id: &str) -> Result<DashboardSummary, RequestError> {
    get_json(&user_scoped(user_id, "dashboard"), &[]).await
}

pub async fn list_opportunities(
    user_id: &str,
    skip: u32,
    limit: u32,
    status: Option<&str>,
    platform: Option<&str>,
) -> Result<ListPage<Opportunity>, RequestError> {
    let query = list_query(skip, limit, &[("status", status), ("platform", platform)]);
    get_json(&user_scoped(user_id, "opportunities"), &query).await
}

/// Returns the created record; callers only use success/failure.
pub async fn create_opportunity(
    user_id: &str,
    draft: &OpportunityDraft,
) -> Result<Opportunity, RequestError> {
    let query = [("user_id", user_id.to_string())];
    post_json("/opportunities", &query, draft).await
}

pub async fn list_projects(
    user_id: &str,
    skip: u32,
    limit: u32,
) -> Result<ListPage<Project>, RequestError> {
    let query = list_query(skip, limit, &[]);
    get_json(&user_scoped(user_id, "projects"), &query).await
}

pub async fn list_knowledge_assets(
    skip: u32,
    limit: u32,
    asset_type: Option<&str>,
) -> Result<ListPage<KnowledgeAsset>, RequestError> {
    let query = list_query(skip, limit, &[("asset_type", asset_type)]);
    get_json("/knowledge-assets", &query).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_selection_omits_the_parameter() {
        assert_eq!(filter_param("all"), None);
        assert_eq!(filter_param("upwork"), Some("upwork"));
    }

    #[test]
    fn list_query_skips_unset_filters() {
        let pairs = list_query(0, 20, &[("status", None), ("platform", Some("upwork"))]);
        assert_eq!(
            pairs,
            vec![
                ("skip", "0".to_string()),
                ("limit", "20".to_string()),
                ("platform", "upwork".to_string()),
            ]
        );
        assert!(pairs.iter().all(|(name, _)| *name != "status"));
    }

    #[test]
    fn list_query_keeps_set_filters_in_order() {
        let pairs = list_query(
            0,
            50,
            &[("status", Some("won")), ("platform", Some("toptal"))],
        );
        assert_eq!(pairs[2], ("status", "won".to_string()));
        assert_eq!(pairs[3], ("platform", "toptal".to_string()));
    }

    #[test]
    fn plain_user_ids_pass_through_unescaped() {
        assert_eq!(
            user_scoped("demo-user-001", "dashboard"),
            "/users/demo-user-001/dashboard"
        );
    }

    #[test]
    fn hostile_user_ids_cannot_break_the_path() {
        assert_eq!(
            user_scoped("two words/x", "opportunities"),
            "/users/two%20words%2Fx/opportunities"
        );
        assert_eq!(encode_segment("50%"), "50%25");
    }
}
