//! Compile-time validation errors for state graphs.

use thiserror::Error;

/// Error returned by [`StateGraph::compile`](super::StateGraph::compile) when
/// the declared wiring is invalid.
#[derive(Debug, Error)]
pub enum CompilationError {
    /// An edge or conditional source references a node id never added.
    #[error("node not found: {0}")]
    NodeNotFound(String),

    /// A conditional path map targets a node id never added.
    #[error("conditional path map targets unknown node: {0}")]
    InvalidConditionalPathMap(String),

    /// No edge from START.
    #[error("graph has no edge from START")]
    MissingStart,

    /// No edge or conditional path reaches END.
    #[error("graph has no path to END")]
    MissingEnd,

    /// Edges do not form a valid chain (branching edge, cycle without a
    /// conditional router, multiple START edges).
    #[error("invalid chain: {0}")]
    InvalidChain(String),

    /// A node has both an outgoing edge and conditional edges.
    #[error("node has both an edge and conditional edges: {0}")]
    NodeHasBothEdgeAndConditional(String),
}
