//! Tavily web search implementing `SearchProvider`.

use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use crate::error::AgentError;

use super::SearchProvider;

const TAVILY_SEARCH_URL: &str = "https://api.tavily.com/search";
const MAX_RESULTS_CAP: u64 = 20;

/// Tavily search client: POSTs the query and renders the result list to text.
///
/// Requires a Tavily API key (`TAVILY_API_KEY` via [`TavilySearch::from_env`]).
pub struct TavilySearch {
    api_key: String,
    client: reqwest::Client,
    max_results: u64,
}

impl TavilySearch {
    /// Creates a client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            client: reqwest::Client::new(),
            max_results: 5,
        }
    }

    /// Creates a client reading `TAVILY_API_KEY` from the environment.
    pub fn from_env() -> Result<Self, AgentError> {
        let api_key = std::env::var("TAVILY_API_KEY")
            .map_err(|_| AgentError::ExecutionFailed("TAVILY_API_KEY is not set".to_string()))?;
        Ok(Self::new(api_key))
    }

    /// Set how many results to request (capped server-side friendly).
    pub fn with_max_results(mut self, max_results: u64) -> Self {
        self.max_results = max_results.min(MAX_RESULTS_CAP);
        self
    }

    fn build_body(&self, query: &str) -> serde_json::Value {
        json!({
            "api_key": self.api_key,
            "query": query,
            "max_results": self.max_results,
        })
    }
}

/// Renders the Tavily response's `results` array to a numbered text list.
///
/// Each entry shows title, URL, and content snippet. Missing fields render
/// as placeholders rather than failing: evidence text is free-form.
fn format_results(value: &serde_json::Value) -> String {
    let results: &[serde_json::Value] = value
        .get("results")
        .and_then(|r| r.as_array())
        .map(|v| v.as_slice())
        .unwrap_or(&[]);
    let mut s = String::new();
    for (i, r) in results.iter().enumerate() {
        let title = r
            .get("title")
            .and_then(|t| t.as_str())
            .unwrap_or("(no title)");
        let url = r.get("url").and_then(|u| u.as_str()).unwrap_or("");
        s.push_str(&format!("[{}] {}\n  URL: {}\n", i + 1, title, url));
        if let Some(content) = r.get("content").and_then(|c| c.as_str()) {
            let content = content.trim();
            if !content.is_empty() {
                s.push_str(&format!("  {}\n", content.replace('\n', " ")));
            }
        }
    }
    s
}

#[async_trait]
impl SearchProvider for TavilySearch {
    async fn search(&self, query: &str) -> Result<String, AgentError> {
        debug!(query = %query, max_results = self.max_results, "Tavily search");
        let res = self
            .client
            .post(TAVILY_SEARCH_URL)
            .header("Content-Type", "application/json")
            .json(&self.build_body(query))
            .send()
            .await
            .map_err(|e| AgentError::ExecutionFailed(format!("Tavily request failed: {}", e)))?;
        if !res.status().is_success() {
            let status = res.status();
            let err_body = res.text().await.unwrap_or_default();
            return Err(AgentError::ExecutionFailed(format!(
                "Tavily API error {}: {}",
                status, err_body
            )));
        }
        let out: serde_json::Value = res
            .json()
            .await
            .map_err(|e| AgentError::ExecutionFailed(format!("Tavily response decode: {}", e)))?;
        Ok(format_results(&out))
    }
}
