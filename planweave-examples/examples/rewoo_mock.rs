//! ReWOO example over mock capabilities: no API keys needed.
//!
//! Scripts the three LLM calls a one-step run makes (plan, step, solve) and
//! prints the evidence trail plus the structured answer.
//! Run: `cargo run -p planweave-examples --example rewoo_mock`

use std::sync::Arc;

use planweave::{MockLlm, MockSearch, ReWooRunner};

#[tokio::main]
async fn main() {
    let llm = Arc::new(MockLlm::with_script([
        "Plan: Name three rainbow colors used in flags. #E1 = LLM[name 3 colors of the rainbow]",
        "red, orange, yellow",
        r#"{"colors": ["red", "orange", "yellow"]}"#,
    ]));
    let search = Arc::new(MockSearch::with_result("unused in this plan"));

    let runner = ReWooRunner::new(llm, search).expect("graph compiles");
    let state = runner
        .invoke("list 3 colors of the rainbow used in flags")
        .await
        .expect("mock run succeeds");

    println!("plan document:\n{}\n", state.plan_text);
    for (id, text) in &state.evidence {
        println!("{} = {}", id, text);
    }
    println!(
        "\nanswer: {}",
        serde_json::to_string_pretty(&state.answer.expect("answer set")).unwrap()
    );
}
