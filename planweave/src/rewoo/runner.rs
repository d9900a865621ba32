//! ReWOO graph runner: build, initial state, invoke.
//!
//! Graph: START → plan → [steps remain] → work | solve; solve → END.
//! The same routing condition runs after `plan` and after `work`, so an
//! empty plan goes straight to `solve` without ever visiting `work`.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::AgentError;
use crate::graph::{CompilationError, CompiledStateGraph, StateGraph, END, START};
use crate::llm::LlmClient;
use crate::tools::SearchProvider;

use super::plan_node::PlanNode;
use super::solve_node::SolveNode;
use super::state::ReWooState;
use super::substitute::next_step_index;
use super::work_node::WorkNode;

/// Condition: while unresolved steps remain, go to `work`; otherwise `solve`.
fn rewoo_route_condition(state: &ReWooState) -> &'static str {
    if next_step_index(state).is_some() {
        "work"
    } else {
        "solve"
    }
}

/// Builds the initial `ReWooState` for a run.
pub fn build_rewoo_initial_state(task: &str) -> ReWooState {
    ReWooState::for_task(task)
}

/// Error type for ReWooRunner operations.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("compilation failed: {0}")]
    Compilation(#[from] CompilationError),
    #[error("execution failed: {0}")]
    Execution(#[from] AgentError),
}

/// ReWOO graph runner: encapsulates the compiled graph.
///
/// One runner can serve many independent runs; each `invoke` owns its own
/// state and shares nothing mutable with concurrent runs.
pub struct ReWooRunner {
    compiled: CompiledStateGraph<ReWooState>,
}

impl ReWooRunner {
    /// Creates a runner with the given LLM and search capability.
    ///
    /// The same LLM client serves the planning call, `LLM[...]` steps, and
    /// the JSON-mode synthesis call.
    pub fn new(
        llm: Arc<dyn LlmClient>,
        search: Arc<dyn SearchProvider>,
    ) -> Result<Self, CompilationError> {
        let plan = PlanNode::new(Arc::clone(&llm));
        let work = WorkNode::new(Arc::clone(&llm), search);
        let solve = SolveNode::new(llm);

        let route_path_map: HashMap<String, String> = [
            ("work".to_string(), "work".to_string()),
            ("solve".to_string(), "solve".to_string()),
        ]
        .into_iter()
        .collect();

        let mut graph = StateGraph::<ReWooState>::new();
        graph
            .add_node("plan", Arc::new(plan))
            .add_node("work", Arc::new(work))
            .add_node("solve", Arc::new(solve))
            .add_edge(START, "plan")
            .add_conditional_edges(
                "plan",
                Arc::new(|state: &ReWooState| rewoo_route_condition(state).to_string()),
                Some(route_path_map.clone()),
            )
            .add_conditional_edges(
                "work",
                Arc::new(|state: &ReWooState| rewoo_route_condition(state).to_string()),
                Some(route_path_map),
            )
            .add_edge("solve", END);

        Ok(Self {
            compiled: graph.compile()?,
        })
    }

    /// Runs one task to completion and returns the final state.
    ///
    /// The final state's `answer` holds the parsed synthesis object. Any
    /// failure aborts the whole run; there is no partial result.
    pub async fn invoke(&self, task: &str) -> Result<ReWooState, RunError> {
        let state = build_rewoo_initial_state(task);
        let final_state = self.compiled.invoke(state).await?;
        Ok(final_state)
    }
}
