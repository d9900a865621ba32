//! # PlanWeave
//!
//! Plan–work–solve (ReWOO) task graphs in Rust with a **state-in, state-out**
//! design: one shared state value flows through the graph's nodes, each node
//! returning the updated state plus a routing decision.
//!
//! Given a natural-language task, a planning call produces a multi-step plan
//! in which each step names a tool and an input that may reference earlier
//! steps' evidence (`#E1`, `#E2`, ...). A worker drains the steps strictly in
//! order, substituting resolved evidence into each input before dispatching
//! it, and a final JSON-mode call synthesizes a structured answer from the
//! full plan-plus-evidence transcript.
//!
//! ## Design principles
//!
//! - **Single state type**: one run owns one [`ReWooState`]; nodes receive it
//!   by value and return the replacement. No locks, one writer.
//! - **Strictly sequential steps**: step *N+1* starts only after step *N*'s
//!   evidence is stored, because its input substitution reads that entry.
//! - **Lenient planning, fatal everything else**: a malformed plan degrades
//!   to fewer (or zero) steps; an unknown tool or a failed capability call
//!   aborts the run with no partial result.
//!
//! ## Main modules
//!
//! - [`graph`]: [`StateGraph`], [`CompiledStateGraph`], [`Node`], [`Next`];
//!   build and run state graphs with conditional routing.
//! - [`rewoo`]: the task graph: [`ReWooRunner`], [`ReWooState`],
//!   [`PlanStep`], plan parser, evidence substitution, plan/work/solve nodes.
//! - [`llm`]: [`LlmClient`] trait, [`ChatOpenAI`], [`MockLlm`].
//! - [`tools`]: [`SearchProvider`] trait, [`TavilySearch`], [`MockSearch`].
//! - [`niche`]: enrichment-facing entry point ([`research_niche`]).
//! - [`message`]: [`Message`] (System / User / Assistant).
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use planweave::{ChatOpenAI, ReWooRunner, TavilySearch};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let llm = Arc::new(ChatOpenAI::new("gpt-4o"));
//! let search = Arc::new(TavilySearch::from_env()?);
//! let runner = ReWooRunner::new(llm, search)?;
//! let state = runner.invoke("What city hosts the next summer olympics?").await?;
//! println!("{}", state.answer.unwrap());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod graph;
pub mod llm;
pub mod message;
pub mod niche;
pub mod rewoo;
pub mod tools;

pub use error::AgentError;
pub use graph::{
    log_graph_complete, log_graph_error, log_graph_start, log_node_complete, log_node_start,
    CompilationError, CompiledStateGraph, Next, Node, StateGraph, END, START,
};
pub use llm::{ChatOpenAI, LlmClient, LlmResponse, LlmUsage, MockLlm};
pub use message::Message;
pub use niche::{company_niche_task, research_niche};
pub use rewoo::{
    apply_evidence, build_rewoo_initial_state, next_step_index, parse_plan, PlanNode, PlanStep,
    ReWooRunner, ReWooState, RunError, SolveNode, WorkNode,
};
pub use tools::{MockSearch, SearchProvider, TavilySearch};

/// When running `cargo test -p planweave`, initializes tracing from `RUST_LOG`
/// so that unit tests in `src/**` can print logs with `--nocapture`.
#[cfg(test)]
mod test_logging {
    use ctor::ctor;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::Layer;

    #[ctor]
    fn init() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_test_writer()
                    .with_filter(filter),
            )
            .try_init();
    }
}
