#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use trend_report::api::AppState;
use trend_report::build_app;
use trend_report::config::Config;
use trend_report::error::{Error, Result};
use trend_report::models::RepositoryRecord;
use trend_report::report::ReportWriter;
use trend_report::search::RepositorySource;

/// Search double returning a canned result and recording its calls
pub struct FakeSearch {
    result: std::result::Result<Vec<RepositoryRecord>, String>,
    pub calls: AtomicUsize,
    pub seen: Mutex<Vec<(String, i64)>>,
}

impl FakeSearch {
    pub fn returning(repos: Vec<RepositoryRecord>) -> Arc<Self> {
        Arc::new(Self {
            result: Ok(repos),
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(msg: &str) -> Arc<Self> {
        Arc::new(Self {
            result: Err(msg.to_string()),
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RepositorySource for FakeSearch {
    async fn fetch_trending_repositories(
        &self,
        query: &str,
        days: i64,
    ) -> Result<Vec<RepositoryRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push((query.to_string(), days));
        self.result
            .clone()
            .map_err(|msg| Error::RepositorySearch { msg })
    }
}

/// Report double returning a fixed text and recording the repositories it saw
pub struct FakeReports {
    result: std::result::Result<String, String>,
    pub calls: AtomicUsize,
    pub seen: Mutex<Vec<(Vec<RepositoryRecord>, String)>>,
}

impl FakeReports {
    pub fn returning(summary: &str) -> Arc<Self> {
        Arc::new(Self {
            result: Ok(summary.to_string()),
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(msg: &str) -> Arc<Self> {
        Arc::new(Self {
            result: Err(msg.to_string()),
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReportWriter for FakeReports {
    async fn generate_report(&self, repos: &[RepositoryRecord], query: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen
            .lock()
            .unwrap()
            .push((repos.to_vec(), query.to_string()));
        self.result
            .clone()
            .map_err(|msg| Error::ReportGeneration { msg })
    }
}

pub fn setup_test_app(search: Arc<FakeSearch>, reports: Arc<FakeReports>) -> Router {
    let state = Arc::new(AppState {
        config: Config::default(),
        search,
        reports,
    });

    build_app(state)
}

/// A repository item shaped like the search API's JSON
pub fn repo_json(full_name: &str, description: Option<&str>, stars: u64) -> serde_json::Value {
    serde_json::json!({
        "id": stars,
        "name": full_name.split('/').next_back().unwrap_or(full_name),
        "full_name": full_name,
        "html_url": format!("https://github.com/{full_name}"),
        "description": description,
        "stargazers_count": stars,
        "forks_count": 5,
        "language": "Python",
        "created_at": "2025-02-03T04:05:06Z"
    })
}

pub fn repo(full_name: &str, description: Option<&str>, stars: u64) -> RepositoryRecord {
    serde_json::from_value(repo_json(full_name, description, stars)).unwrap()
}
