//! Solve node: synthesize the final structured answer from the full trail.
//!
//! Builds one transcript covering every step in order (description,
//! evidence id, tool, and input, with all known evidence substituted into
//! both the input and the id text at transcript-build time) and makes the
//! JSON-mode synthesis call. The parsed object becomes the run's answer.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::error::AgentError;
use crate::graph::{Next, Node};
use crate::llm::LlmClient;
use crate::message::Message;

use super::prompt::solver_prompt;
use super::state::ReWooState;
use super::substitute::apply_evidence;

/// Builds the plan-plus-evidence transcript handed to the solver.
///
/// Substitution runs again here, on top of the per-step pass the worker
/// already did: the id text itself is substituted too, which is how each
/// step's resolved evidence surfaces in the transcript.
pub fn build_transcript(state: &ReWooState) -> String {
    let mut transcript = String::new();
    for step in &state.steps {
        let input = apply_evidence(&step.input, &state.evidence);
        let id = apply_evidence(&step.id, &state.evidence);
        transcript.push_str(&format!(
            "Plan: {}\n{} = {}[{}]\n",
            step.description, id, step.tool, input
        ));
    }
    transcript
}

/// Solve node: one JSON-mode call over the transcript and the task.
///
/// The response must parse as a JSON object; anything else is fatal and no
/// fallback answer is substituted.
pub struct SolveNode {
    llm: Arc<dyn LlmClient>,
}

impl SolveNode {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Node<ReWooState> for SolveNode {
    fn id(&self) -> &str {
        "solve"
    }

    async fn run(&self, state: ReWooState) -> Result<(ReWooState, Next), AgentError> {
        let transcript = build_transcript(&state);
        debug!(transcript_len = transcript.len(), "synthesizing answer");
        let prompt = solver_prompt(&transcript, &state.task);
        let value = self.llm.invoke_json(&[Message::user(prompt)]).await?;
        if !value.is_object() {
            return Err(AgentError::ExecutionFailed(
                "synthesis response is not a JSON object".to_string(),
            ));
        }
        let new_state = ReWooState {
            answer: Some(value),
            ..state
        };
        Ok((new_state, Next::Continue))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::MockLlm;
    use crate::rewoo::state::PlanStep;

    fn step(id: &str, tool: &str, input: &str, description: &str) -> PlanStep {
        PlanStep {
            description: description.to_string(),
            id: id.to_string(),
            tool: tool.to_string(),
            input: input.to_string(),
        }
    }

    /// **Scenario**: the transcript substitutes evidence into both input and id.
    #[test]
    fn transcript_substitutes_input_and_id() {
        let mut state = ReWooState::for_task("t");
        state.steps = vec![
            step("#E1", "Google", "acme revenue", "Find revenue."),
            step("#E2", "LLM", "Double #E1", "Double it."),
        ];
        state.evidence.insert("#E1".into(), "10M".into());
        state.evidence.insert("#E2".into(), "20M".into());
        let transcript = build_transcript(&state);
        assert!(transcript.contains("Plan: Find revenue.\n10M = Google[acme revenue]"));
        assert!(transcript.contains("Plan: Double it.\n20M = LLM[Double 10M]"));
    }

    /// **Scenario**: zero steps produce an empty transcript body.
    #[test]
    fn transcript_empty_without_steps() {
        assert_eq!(build_transcript(&ReWooState::for_task("t")), "");
    }

    /// **Scenario**: the solve node stores the parsed JSON object as the answer.
    #[tokio::test]
    async fn solve_node_stores_parsed_object() {
        let llm = Arc::new(MockLlm::with_fixed(r#"{"companies": ["Acme"]}"#));
        let node = SolveNode::new(llm.clone());
        let (state, next) = node.run(ReWooState::for_task("list one")).await.unwrap();
        assert_eq!(next, Next::Continue);
        let answer = state.answer.expect("answer set");
        assert_eq!(answer["companies"][0], "Acme");
        // The solver call embeds the task text.
        assert!(llm.prompts()[0].contains("list one"));
    }

    /// **Scenario**: a non-object JSON response is fatal.
    #[tokio::test]
    async fn solve_node_rejects_non_object_json() {
        let llm = Arc::new(MockLlm::with_fixed(r#"["just", "a", "list"]"#));
        let node = SolveNode::new(llm);
        let err = node.run(ReWooState::for_task("t")).await.unwrap_err();
        assert!(matches!(err, AgentError::ExecutionFailed(_)));
    }

    /// **Scenario**: an unparseable synthesis response is fatal, no fallback.
    #[tokio::test]
    async fn solve_node_rejects_unparseable_response() {
        let llm = Arc::new(MockLlm::with_fixed("The answer is blue."));
        let node = SolveNode::new(llm);
        assert!(node.run(ReWooState::for_task("t")).await.is_err());
    }
}
