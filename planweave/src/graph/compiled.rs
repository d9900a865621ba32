//! Compiled state graph: immutable, supports invoke only.
//!
//! Built by `StateGraph::compile`. Holds nodes and routing derived from the
//! declared edges at compile time.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;

use crate::error::AgentError;

use super::logging::{
    log_graph_complete, log_graph_error, log_graph_start, log_node_complete, log_node_start,
};
use super::state_graph::END;
use super::{Next, NextEntry, Node};

/// Compiled graph: immutable structure, supports invoke only.
///
/// Created by [`StateGraph::compile`](super::StateGraph::compile). Runs from
/// the node START points to; after each node, uses the node's returned
/// [`Next`] or its conditional router to choose the next node.
#[derive(Clone)]
pub struct CompiledStateGraph<S> {
    pub(super) nodes: HashMap<String, Arc<dyn Node<S>>>,
    /// First node to run (from START).
    pub(super) first_node_id: String,
    /// Linear order of nodes (used for Next::Continue without conditionals).
    /// Contains only the first node when the graph has conditional edges.
    pub(super) edge_order: Vec<String>,
    /// Map from node id to how to get the next node after it runs.
    pub(super) next_map: HashMap<String, NextEntry<S>>,
}

impl<S> CompiledStateGraph<S>
where
    S: Clone + Send + Sync + Debug + 'static,
{
    /// Runs the graph to completion with the given initial state.
    ///
    /// Nodes execute strictly one at a time; each node's output state fully
    /// replaces the current state before routing is resolved. The first
    /// error aborts the run and is returned as-is.
    pub async fn invoke(&self, state: S) -> Result<S, AgentError> {
        if self.nodes.is_empty() || !self.nodes.contains_key(&self.first_node_id) {
            return Err(AgentError::ExecutionFailed("empty graph".into()));
        }
        let mut state = state;
        let mut current_id = self.first_node_id.clone();

        log_graph_start();
        loop {
            let node = self
                .nodes
                .get(&current_id)
                .expect("compiled graph has all nodes")
                .clone();

            log_node_start(&current_id);
            let (new_state, next) = match node.run(state.clone()).await {
                Ok(output) => output,
                Err(e) => {
                    log_graph_error(&e);
                    return Err(e);
                }
            };
            log_node_complete(&current_id, &next);

            state = new_state;

            let next_id: Option<String> =
                if let Some(NextEntry::Conditional(router)) = self.next_map.get(&current_id) {
                    let target = router.resolve_next(&state);
                    tracing::debug!(from = %current_id, to = %target, "conditional routing");
                    Some(target)
                } else {
                    match next {
                        Next::End => None,
                        Next::Node(id) => Some(id),
                        Next::Continue => self
                            .next_map
                            .get(&current_id)
                            .and_then(|e| {
                                if let NextEntry::Unconditional(id) = e {
                                    Some(id.clone())
                                } else {
                                    None
                                }
                            })
                            .or_else(|| {
                                let pos =
                                    self.edge_order.iter().position(|x| x == &current_id)?;
                                self.edge_order.get(pos + 1).cloned()
                            }),
                    }
                };

            match next_id {
                None => break,
                Some(id) if id == END => break,
                Some(id) => current_id = id,
            }
        }
        log_graph_complete();
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;

    use crate::graph::{StateGraph, END, START};

    #[derive(Clone)]
    struct AddNode {
        id: &'static str,
        delta: i32,
    }

    #[async_trait]
    impl Node<i32> for AddNode {
        fn id(&self) -> &str {
            self.id
        }
        async fn run(&self, state: i32) -> Result<(i32, Next), AgentError> {
            Ok((state + self.delta, Next::Continue))
        }
    }

    /// Node that returns Next::End after one step.
    #[derive(Clone)]
    struct EndAfterNode {
        id: &'static str,
        delta: i32,
    }

    #[async_trait]
    impl Node<i32> for EndAfterNode {
        fn id(&self) -> &str {
            self.id
        }
        async fn run(&self, state: i32) -> Result<(i32, Next), AgentError> {
            Ok((state + self.delta, Next::End))
        }
    }

    fn build_two_step_graph() -> CompiledStateGraph<i32> {
        let mut graph = StateGraph::<i32>::new();
        graph.add_node("first", Arc::new(AddNode { id: "first", delta: 1 }));
        graph.add_node("second", Arc::new(AddNode { id: "second", delta: 2 }));
        graph.add_edge(START, "first");
        graph.add_edge("first", "second");
        graph.add_edge("second", END);
        graph.compile().expect("graph compiles")
    }

    /// **Scenario**: When the graph has no nodes, invoke returns ExecutionFailed("empty graph").
    #[tokio::test]
    async fn invoke_empty_graph_returns_execution_failed() {
        let graph = CompiledStateGraph::<i32> {
            nodes: HashMap::new(),
            first_node_id: String::new(),
            edge_order: vec![],
            next_map: HashMap::new(),
        };
        match graph.invoke(0).await {
            Err(AgentError::ExecutionFailed(msg)) => {
                assert!(msg.contains("empty graph"), "{}", msg)
            }
            other => panic!("expected ExecutionFailed(empty graph), got {:?}", other),
        }
    }

    /// **Scenario**: Linear two-step chain applies both nodes in order.
    #[tokio::test]
    async fn invoke_linear_chain_runs_nodes_in_order() {
        let graph = build_two_step_graph();
        assert_eq!(graph.invoke(0).await.unwrap(), 3, "0 -> +1 -> +2");
    }

    /// **Scenario**: Node returning Next::End stops the run before later nodes.
    #[tokio::test]
    async fn invoke_next_end_stops_run() {
        let mut graph = StateGraph::<i32>::new();
        graph.add_node("stop", Arc::new(EndAfterNode { id: "stop", delta: 5 }));
        graph.add_node("never", Arc::new(AddNode { id: "never", delta: 100 }));
        graph.add_edge(START, "stop");
        graph.add_edge("stop", "never");
        graph.add_edge("never", END);
        let compiled = graph.compile().expect("graph compiles");
        assert_eq!(compiled.invoke(0).await.unwrap(), 5, "run ends at stop");
    }

    /// **Scenario**: Conditional edges route by state; END key exits the run.
    #[tokio::test]
    async fn invoke_conditional_edges_route_by_state() {
        let mut graph = StateGraph::<i32>::new();
        graph.add_node("decide", Arc::new(AddNode { id: "decide", delta: 0 }));
        graph.add_node("grow", Arc::new(AddNode { id: "grow", delta: 10 }));
        graph.add_edge(START, "decide");
        graph.add_edge("grow", END);
        let path_map: HashMap<String, String> = [
            ("grow".to_string(), "grow".to_string()),
            (END.to_string(), END.to_string()),
        ]
        .into_iter()
        .collect();
        graph.add_conditional_edges(
            "decide",
            Arc::new(|s: &i32| if *s < 0 { END.into() } else { "grow".into() }),
            Some(path_map),
        );
        let compiled = graph.compile().expect("graph compiles");
        assert_eq!(compiled.invoke(2).await.unwrap(), 12, "2 -> grow -> +10");
        assert_eq!(compiled.invoke(-1).await.unwrap(), -1, "-1 -> END directly");
    }

    /// **Scenario**: A conditional self-loop drains work one visit at a time.
    #[tokio::test]
    async fn invoke_conditional_self_loop_drains() {
        #[derive(Clone)]
        struct CountDown;

        #[async_trait]
        impl Node<i32> for CountDown {
            fn id(&self) -> &str {
                "count_down"
            }
            async fn run(&self, state: i32) -> Result<(i32, Next), AgentError> {
                Ok((state - 1, Next::Continue))
            }
        }

        let mut graph = StateGraph::<i32>::new();
        graph.add_node("count_down", Arc::new(CountDown));
        graph.add_edge(START, "count_down");
        graph.add_conditional_edges(
            "count_down",
            Arc::new(|s: &i32| {
                if *s > 0 {
                    "count_down".into()
                } else {
                    END.into()
                }
            }),
            None,
        );
        let compiled = graph.compile().expect("graph compiles");
        assert_eq!(compiled.invoke(3).await.unwrap(), 0, "loops until zero");
    }

    /// **Scenario**: A node error aborts the run and propagates unchanged.
    #[tokio::test]
    async fn invoke_node_error_aborts_run() {
        struct FailNode;

        #[async_trait]
        impl Node<i32> for FailNode {
            fn id(&self) -> &str {
                "fail"
            }
            async fn run(&self, _state: i32) -> Result<(i32, Next), AgentError> {
                Err(AgentError::ExecutionFailed("deliberate".into()))
            }
        }

        let mut graph = StateGraph::<i32>::new();
        graph.add_node("fail", Arc::new(FailNode));
        graph.add_edge(START, "fail");
        graph.add_edge("fail", END);
        let compiled = graph.compile().expect("graph compiles");
        match compiled.invoke(0).await {
            Err(AgentError::ExecutionFailed(msg)) => assert_eq!(msg, "deliberate"),
            other => panic!("expected ExecutionFailed, got {:?}", other),
        }
    }
}
