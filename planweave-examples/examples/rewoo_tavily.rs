//! ReWOO example against the real APIs.
//!
//! Requires `OPENAI_API_KEY` and `TAVILY_API_KEY` (e.g. in `.env`).
//! Run: `cargo run -p planweave-examples --example rewoo_tavily -- "your task"`

use std::env;
use std::sync::Arc;

use planweave::{ChatOpenAI, ReWooRunner, TavilySearch};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let task = env::args()
        .nth(1)
        .unwrap_or_else(|| "What is the hometown of the 2024 Australian Open winner?".to_string());

    let llm = Arc::new(ChatOpenAI::new("gpt-4o"));
    let search = Arc::new(TavilySearch::from_env()?.with_max_results(5));
    let runner = ReWooRunner::new(llm, search)?;

    let state = runner.invoke(&task).await?;
    println!("{}", serde_json::to_string_pretty(&state.answer.unwrap())?);
    Ok(())
}
