//! Work node: resolve and dispatch one step per visit.
//!
//! Each visit takes the next unresolved step in declared order, substitutes
//! all known evidence into its input, dispatches to the tool the step names,
//! and records the result under the step's evidence id. The conditional
//! edge after this node sends the run back here while steps remain.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::error::AgentError;
use crate::graph::{Next, Node};
use crate::llm::LlmClient;
use crate::message::Message;
use crate::tools::SearchProvider;

use super::state::ReWooState;
use super::substitute::{apply_evidence, next_step_index};

/// Tool tokens the dispatcher accepts. Any other token is a fatal error.
const TOOL_SEARCH: &str = "Google";
const TOOL_GENERAL: &str = "LLM";

/// Work node: executes the single next unresolved step of the plan.
pub struct WorkNode {
    llm: Arc<dyn LlmClient>,
    search: Arc<dyn SearchProvider>,
}

impl WorkNode {
    pub fn new(llm: Arc<dyn LlmClient>, search: Arc<dyn SearchProvider>) -> Self {
        Self { llm, search }
    }
}

#[async_trait]
impl Node<ReWooState> for WorkNode {
    fn id(&self) -> &str {
        "work"
    }

    async fn run(&self, state: ReWooState) -> Result<(ReWooState, Next), AgentError> {
        let idx = next_step_index(&state).ok_or_else(|| {
            AgentError::ExecutionFailed("work node visited with no unresolved step".to_string())
        })?;
        let step = state.steps[idx].clone();
        let input = apply_evidence(&step.input, &state.evidence);
        debug!(step = %step.id, tool = %step.tool, "dispatching step");

        let result = match step.tool.as_str() {
            TOOL_SEARCH => self.search.search(&input.replace('"', "")).await?,
            TOOL_GENERAL => self.llm.invoke(&[Message::user(input)]).await?.content,
            other => return Err(AgentError::UnknownTool(other.to_string())),
        };

        let mut evidence = state.evidence;
        evidence.insert(step.id.clone(), result);
        let new_state = ReWooState { evidence, ..state };
        Ok((new_state, Next::Continue))
    }
}
