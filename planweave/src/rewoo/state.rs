//! ReWOO state and step types.
//!
//! `ReWooState` is the single state value that flows through the graph: the
//! plan node fills `plan_text` and `steps`, the work node appends to
//! `evidence` one entry per visit, and the solve node writes `answer`.

use std::collections::BTreeMap;

/// One planned unit of work extracted from the planner's output.
///
/// `tool` is the raw token the planner wrote (e.g. `Google`, `LLM`); the
/// worker resolves it against the supported set at dispatch time, so an
/// unsupported token survives parsing and fails the run only when its step
/// is reached. `input` may embed earlier steps' evidence ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanStep {
    /// Free-text description of the step ("Plan: ..." line).
    pub description: String,
    /// Evidence id this step resolves to (e.g. `#E1`). Unique per plan.
    pub id: String,
    /// Raw tool token from the plan document.
    pub tool: String,
    /// Raw tool input; may reference earlier evidence ids.
    pub input: String,
}

/// State for one ReWOO run.
///
/// Owned by the run for its whole duration; nodes receive it by value and
/// return the updated value, so there is exactly one writer at a time.
/// Evidence is keyed by step id in a `BTreeMap` so that substitution walks
/// the entries in a fixed order.
#[derive(Debug, Clone, Default)]
pub struct ReWooState {
    /// The natural-language task. Immutable once the run starts.
    pub task: String,
    /// Raw planning document as returned by the planner call.
    pub plan_text: String,
    /// Ordered steps parsed from `plan_text`. May be empty.
    pub steps: Vec<PlanStep>,
    /// Resolved evidence: step id → tool result text. Grows by exactly one
    /// entry per completed step and always covers a prefix of `steps`.
    pub evidence: BTreeMap<String, String>,
    /// Final structured answer from the solve call.
    pub answer: Option<serde_json::Value>,
}

impl ReWooState {
    /// Initial state for a task: everything empty except the task text.
    pub fn for_task(task: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            ..Self::default()
        }
    }
}
