use super::{LookbackDays, RepositoryRecord};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Request body for `POST /summary`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportRequest {
    /// Free-text search topic; absent or null searches on the trend qualifiers alone
    #[serde(default, deserialize_with = "null_as_empty")]
    #[schema(example = "robot path planning")]
    pub query: String,
    /// Lookback window in days, as a number or numeric string (180, 365 and 1095 are the offered windows)
    #[serde(default)]
    #[schema(value_type = Option<i64>, example = 365)]
    pub days: Option<LookbackDays>,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Response body for `POST /summary`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportResponse {
    /// Repositories in the order returned by the search API
    pub repos: Vec<RepositoryRecord>,
    /// Markdown report produced by the language model
    pub summary: String,
}
