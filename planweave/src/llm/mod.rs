//! LLM client abstraction for the planner, worker, and solver nodes.
//!
//! The graph depends on a callable that turns a message list into assistant
//! text; this module defines the trait plus a real OpenAI-compatible client
//! and a scripted mock. The solver additionally needs a JSON-mode call that
//! returns a parsed object rather than raw text.

mod mock;
mod openai;

pub use mock::MockLlm;
pub use openai::ChatOpenAI;

use async_trait::async_trait;

use crate::error::AgentError;
use crate::message::Message;

/// Token usage for one LLM call (prompt + completion).
#[derive(Clone, Debug, Default)]
pub struct LlmUsage {
    /// Tokens in the prompt (input).
    pub prompt_tokens: u32,
    /// Tokens in the completion (output).
    pub completion_tokens: u32,
    /// Total tokens (prompt + completion).
    pub total_tokens: u32,
}

/// Response from an LLM completion: assistant text plus optional usage.
pub struct LlmResponse {
    /// Assistant message content (plain text).
    pub content: String,
    /// Token usage for this call, when the provider returns it.
    pub usage: Option<LlmUsage>,
}

/// LLM client: given messages, returns assistant text.
///
/// Implementations: [`MockLlm`] (scripted responses) and [`ChatOpenAI`]
/// (real API). `invoke_json` serves structured synthesis: the default
/// implementation parses the plain response as JSON; providers that support
/// a native JSON output mode override it.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Invoke one completion: read messages, return assistant content.
    async fn invoke(&self, messages: &[Message]) -> Result<LlmResponse, AgentError>;

    /// Invoke one completion whose output must be a JSON value.
    ///
    /// An unparseable response is a fatal [`AgentError::ExecutionFailed`];
    /// no fallback value is substituted.
    async fn invoke_json(&self, messages: &[Message]) -> Result<serde_json::Value, AgentError> {
        let response = self.invoke(messages).await?;
        serde_json::from_str(response.content.trim()).map_err(|e| {
            AgentError::ExecutionFailed(format!("response is not valid JSON: {}", e))
        })
    }
}
