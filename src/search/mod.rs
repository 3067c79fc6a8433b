//! Trending repository lookup against the GitHub search API.

use crate::config::GitHubConfig;
use crate::error::{Error, Result};
use crate::models::{RepositoryRecord, SearchResponse, TrendFilter};
use async_trait::async_trait;
use chrono::Utc;

/// Maximum number of repositories requested per search
pub const PER_PAGE: u32 = 10;

const USER_AGENT: &str = "trend-report";

/// Source of trending repositories for a topic
#[async_trait]
pub trait RepositorySource: Send + Sync {
    /// Repositories matching `query` created in the last `days` days, most-starred first
    async fn fetch_trending_repositories(
        &self,
        query: &str,
        days: i64,
    ) -> Result<Vec<RepositoryRecord>>;
}

/// [`RepositorySource`] backed by `GET /search/repositories`
#[derive(Debug, Clone)]
pub struct GitHubSearchClient {
    http_client: reqwest::Client,
    api_url: String,
    token: Option<String>,
}

impl GitHubSearchClient {
    pub fn new(http_client: reqwest::Client, config: &GitHubConfig) -> Self {
        Self {
            http_client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        }
    }

    /// Run one search with an already-built filter
    pub async fn search(&self, query: &str, filter: &TrendFilter) -> Result<Vec<RepositoryRecord>> {
        let expression = filter.search_expression(query);
        tracing::debug!(q = %expression, "Searching repositories");

        let url = format!("{}/search/repositories", self.api_url);
        let per_page = PER_PAGE.to_string();

        let mut request = self
            .http_client
            .get(&url)
            .query(&[
                ("q", expression.as_str()),
                ("sort", "stars"),
                ("order", "desc"),
                ("per_page", per_page.as_str()),
            ])
            .header("Accept", "application/vnd.github+json")
            .header("User-Agent", USER_AGENT);

        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("Bearer {token}"));
        }

        let response = request.send().await.map_err(|e| Error::RepositorySearch {
            msg: format!("failed to reach search API: {e}"),
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::RepositorySearch {
                msg: format!("search API returned {status}: {body}"),
            });
        }

        let results: SearchResponse = response.json().await.map_err(|e| Error::RepositorySearch {
            msg: format!("failed to parse search response: {e}"),
        })?;

        if results.incomplete_results {
            tracing::warn!("Search API reported incomplete results");
        }

        tracing::info!(
            total = results.total_count,
            returned = results.items.len(),
            "Repository search complete"
        );

        Ok(results.items)
    }
}

#[async_trait]
impl RepositorySource for GitHubSearchClient {
    async fn fetch_trending_repositories(
        &self,
        query: &str,
        days: i64,
    ) -> Result<Vec<RepositoryRecord>> {
        let filter = TrendFilter::for_window(days, Utc::now().date_naive())?;
        self.search(query, &filter).await
    }
}
