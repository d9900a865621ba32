//! Structured logging for graph execution events.

/// Log node execution start.
pub fn log_node_start(node_id: &str) {
    tracing::debug!(node_id = node_id, "starting node");
}

/// Log node execution completion with its routing decision.
pub fn log_node_complete(node_id: &str, next: &crate::graph::Next) {
    tracing::debug!(node_id = node_id, ?next, "node complete");
}

/// Log graph execution start.
pub fn log_graph_start() {
    tracing::info!("starting graph run");
}

/// Log graph execution completion.
pub fn log_graph_complete() {
    tracing::info!("graph run complete");
}

/// Log graph execution error.
pub fn log_graph_error(error: &crate::error::AgentError) {
    tracing::error!(?error, "graph run failed");
}
