//! Plan node: one planning call, lenient parse, then on to execution.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::error::AgentError;
use crate::graph::{Next, Node};
use crate::llm::LlmClient;
use crate::message::Message;

use super::parser::parse_plan;
use super::prompt::planner_prompt;
use super::state::ReWooState;

/// Plan node: invokes the planning call once with the task text and parses
/// the returned document into ordered steps.
///
/// A malformed plan is not an error: whatever subset parses (possibly
/// nothing) becomes the step sequence, and the run proceeds.
pub struct PlanNode {
    llm: Arc<dyn LlmClient>,
}

impl PlanNode {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Node<ReWooState> for PlanNode {
    fn id(&self) -> &str {
        "plan"
    }

    async fn run(&self, state: ReWooState) -> Result<(ReWooState, Next), AgentError> {
        let prompt = planner_prompt(&state.task);
        let response = self.llm.invoke(&[Message::user(prompt)]).await?;
        let steps = parse_plan(&response.content);
        debug!(
            step_count = steps.len(),
            usage = ?response.usage,
            "plan parsed"
        );
        let new_state = ReWooState {
            plan_text: response.content,
            steps,
            ..state
        };
        Ok((new_state, Next::Continue))
    }
}
