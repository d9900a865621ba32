//! State graph engine: nodes, explicit edges, conditional routing, async invoke.
//!
//! Build with [`StateGraph`]: `add_node`, `add_edge(from, to)` using [`START`]
//! and [`END`] for entry/exit, and `add_conditional_edges` for state-based
//! routing. `compile()` validates the wiring and returns a
//! [`CompiledStateGraph`] that runs the chain with [`CompiledStateGraph::invoke`].
//!
//! One logical run is strictly sequential: exactly one node executes at a
//! time and each node's output state is visible to the next. Concurrent runs
//! of the same compiled graph share no mutable state.

mod compile_error;
mod compiled;
mod conditional;
mod logging;
mod next;
mod node;
mod state_graph;

pub use compile_error::CompilationError;
pub use compiled::CompiledStateGraph;
pub use conditional::{ConditionalRouter, ConditionalRouterFn, NextEntry};
pub use logging::{
    log_graph_complete, log_graph_error, log_graph_start, log_node_complete, log_node_start,
};
pub use next::Next;
pub use node::Node;
pub use state_graph::{StateGraph, END, START};
