//! Next-step result from a graph node: continue the chain, jump, or end.

/// Next step after running a node.
///
/// - **Continue**: follow the node's outgoing edge (or END if it points there).
/// - **Node(id)**: jump to the given node.
/// - **End**: stop; the current state is the final result.
///
/// A node with conditional edges has its `Next` ignored; the router decides.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Next {
    /// Follow the declared outgoing edge.
    Continue,
    /// Run the node with the given id next.
    Node(String),
    /// Stop and return the current state.
    End,
}
