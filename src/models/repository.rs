use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A repository item as returned by the search API.
///
/// Only the fields the relay reads are typed; everything else the API sends is
/// kept in `extra` so the item is handed back to the caller unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RepositoryRecord {
    /// Owner-qualified name (e.g., "owner/repo")
    #[schema(example = "rust-lang/rust")]
    pub full_name: String,
    /// Free-form description, null when the owner never set one
    pub description: Option<String>,
    /// Star count
    pub stargazers_count: u64,
    /// Fork count
    pub forks_count: u64,
    /// Repository creation timestamp
    pub created_at: DateTime<Utc>,
    /// Remaining upstream fields, passed through untouched
    #[serde(flatten)]
    #[schema(ignore)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Body of `GET /search/repositories`
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub incomplete_results: bool,
    pub items: Vec<RepositoryRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_untyped_fields_survive_a_round_trip() {
        let item = json!({
            "id": 42,
            "full_name": "octo/robot-planner",
            "description": null,
            "stargazers_count": 120,
            "forks_count": 7,
            "created_at": "2025-03-01T12:00:00Z",
            "html_url": "https://github.com/octo/robot-planner",
            "owner": { "login": "octo" },
            "topics": ["ros", "planning"]
        });

        let record: RepositoryRecord = serde_json::from_value(item.clone()).unwrap();
        assert_eq!(record.full_name, "octo/robot-planner");
        assert!(record.description.is_none());
        assert_eq!(record.extra["id"], 42);

        assert_eq!(serde_json::to_value(&record).unwrap(), item);
    }

    #[test]
    fn test_search_response_requires_items() {
        let result = serde_json::from_str::<SearchResponse>(r#"{"total_count": 0}"#);
        assert!(result.is_err());
    }
}
