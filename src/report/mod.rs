//! Report generation through an OpenAI-compatible chat completion API.

pub mod prompt;

pub use prompt::{build_prompt, serialize_repositories};

use crate::config::LlmConfig;
use crate::error::{Error, Result};
use crate::models::RepositoryRecord;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Writer of the natural-language report for a search result
#[async_trait]
pub trait ReportWriter: Send + Sync {
    async fn generate_report(&self, repos: &[RepositoryRecord], query: &str) -> Result<String>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// [`ReportWriter`] backed by Groq's chat completion endpoint
#[derive(Debug, Clone)]
pub struct GroqClient {
    http_client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl GroqClient {
    pub fn new(http_client: reqwest::Client, config: &LlmConfig) -> Self {
        Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// Send `prompt` as a single user turn and return the first choice's text
    pub async fn complete(&self, prompt: String) -> Result<String> {
        let api_key = self.api_key.as_deref().ok_or_else(|| Error::ReportGeneration {
            msg: "no API key configured (set GROQ_API_KEY)".to_string(),
        })?;

        let url = format!("{}/chat/completions", self.base_url);
        tracing::debug!(model = %self.model, prompt_len = prompt.len(), "Requesting completion");

        let request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt,
            }],
        };

        let response = self
            .http_client
            .post(&url)
            .header("Authorization", format!("Bearer {api_key}"))
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::ReportGeneration {
                msg: format!("failed to reach completion API: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::ReportGeneration {
                msg: format!("completion API returned {status}: {body}"),
            });
        }

        let completion: ChatCompletionResponse =
            response.json().await.map_err(|e| Error::ReportGeneration {
                msg: format!("failed to parse completion response: {e}"),
            })?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| Error::ReportGeneration {
                msg: "completion response contained no message content".to_string(),
            })
    }
}

#[async_trait]
impl ReportWriter for GroqClient {
    async fn generate_report(&self, repos: &[RepositoryRecord], query: &str) -> Result<String> {
        self.complete(build_prompt(repos, query)).await
    }
}
