//! Web search capability for plan steps.
//!
//! The worker node dispatches `Google[...]` steps through [`SearchProvider`];
//! [`TavilySearch`] is the real implementation, [`MockSearch`] serves tests
//! and offline examples. Results are rendered to one plain-text blob that is
//! stored verbatim as the step's evidence.

mod tavily;

pub use tavily::TavilySearch;

use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::AgentError;

/// Web search: query text in, rendered result text out.
///
/// Failures propagate as fatal [`AgentError`]s; there is no caching and no
/// deduplication of repeated identical queries within a run.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, query: &str) -> Result<String, AgentError>;
}

/// Mock search: fixed result text, records every query.
pub struct MockSearch {
    result: String,
    queries: Mutex<Vec<String>>,
}

impl MockSearch {
    /// Creates a mock returning the given text for every query.
    pub fn with_result(result: impl Into<String>) -> Self {
        Self {
            result: result.into(),
            queries: Mutex::new(vec![]),
        }
    }

    /// Returns the queries received so far, in order.
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl SearchProvider for MockSearch {
    async fn search(&self, query: &str) -> Result<String, AgentError> {
        self.queries.lock().unwrap().push(query.to_string());
        Ok(self.result.clone())
    }
}
