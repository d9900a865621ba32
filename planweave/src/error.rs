//! Run execution error types.
//!
//! Used by `Node::run` and every capability the graph dispatches to.

use thiserror::Error;

/// Error raised while executing a graph run.
///
/// All variants are fatal for the run: there is no retry layer and no
/// partial result. Callers either get a complete final state or this error.
#[derive(Debug, Error)]
pub enum AgentError {
    /// Execution failed with a message (e.g. LLM call failed, search failed,
    /// synthesis output did not parse).
    #[error("execution failed: {0}")]
    ExecutionFailed(String),

    /// A plan step named a tool outside the supported set. The run aborts
    /// before any evidence is recorded for that step.
    #[error("unknown tool: {0}")]
    UnknownTool(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Scenario**: Display of ExecutionFailed contains "execution failed" and the message.
    #[test]
    fn execution_failed_display() {
        let err = AgentError::ExecutionFailed("boom".to_string());
        let s = err.to_string();
        assert!(s.contains("execution failed"), "{}", s);
        assert!(s.contains("boom"), "{}", s);
    }

    /// **Scenario**: Display of UnknownTool names the offending tool token.
    #[test]
    fn unknown_tool_display() {
        let err = AgentError::UnknownTool("Calculator".to_string());
        assert_eq!(err.to_string(), "unknown tool: Calculator");
    }
}
