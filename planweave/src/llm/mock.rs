//! Mock LLM for tests and examples.
//!
//! A ReWOO run makes several distinct LLM calls (plan, general-knowledge
//! steps, solve), so the mock plays back a scripted queue of responses in
//! order. Every received prompt is recorded for assertions.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::AgentError;
use crate::llm::{LlmClient, LlmResponse};
use crate::message::Message;

/// Mock LLM: plays back scripted responses in order.
///
/// `with_script` queues one response per expected call; when the queue runs
/// dry, `fallback` (if set) answers every further call. Received prompts are
/// recorded and readable via [`MockLlm::prompts`].
pub struct MockLlm {
    scripted: Mutex<VecDeque<String>>,
    fallback: Option<String>,
    prompts: Mutex<Vec<String>>,
}

impl MockLlm {
    /// Creates a mock that answers calls with the given responses, in order.
    ///
    /// A call beyond the end of the script is an `ExecutionFailed` error, so
    /// tests catch unexpected extra calls.
    pub fn with_script<I, T>(responses: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            scripted: Mutex::new(responses.into_iter().map(Into::into).collect()),
            fallback: None,
            prompts: Mutex::new(vec![]),
        }
    }

    /// Creates a mock that answers every call with the same content.
    pub fn with_fixed(content: impl Into<String>) -> Self {
        Self {
            scripted: Mutex::new(VecDeque::new()),
            fallback: Some(content.into()),
            prompts: Mutex::new(vec![]),
        }
    }

    /// Returns the prompts received so far, one concatenated string per call.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    /// Number of calls received so far.
    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl LlmClient for MockLlm {
    async fn invoke(&self, messages: &[Message]) -> Result<LlmResponse, AgentError> {
        let prompt = messages
            .iter()
            .map(Message::content)
            .collect::<Vec<_>>()
            .join("\n");
        self.prompts.lock().unwrap().push(prompt);

        let next = self.scripted.lock().unwrap().pop_front();
        let content = match (next, &self.fallback) {
            (Some(c), _) => c,
            (None, Some(f)) => f.clone(),
            (None, None) => {
                return Err(AgentError::ExecutionFailed(
                    "mock llm script exhausted".to_string(),
                ))
            }
        };
        Ok(LlmResponse {
            content,
            usage: None,
        })
    }
}
