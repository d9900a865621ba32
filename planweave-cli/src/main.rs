//! PlanWeave CLI binary: run one plan-work-solve task from the command line.
//!
//! Default mode takes a free-form task and prints the structured answer as
//! JSON. `--niche` runs the company-niche research task instead and prints
//! one normalized company name per line.

mod logging;

use std::sync::Arc;

use clap::Parser;

use planweave::{research_niche, ChatOpenAI, ReWooRunner, TavilySearch};

#[derive(Parser, Debug)]
#[command(name = "planweave")]
#[command(about = "PlanWeave: plan, gather evidence step by step, then solve")]
struct Args {
    /// Task text (or pass as positional arguments)
    #[arg(short, long, value_name = "TEXT")]
    message: Option<String>,

    /// Positional args: task text when -m/--message is not used
    #[arg(trailing_var_arg = true)]
    rest: Vec<String>,

    /// Run the company-niche research task for this niche instead of a raw task
    #[arg(short, long, value_name = "NICHE")]
    niche: Option<String>,

    /// Model for the planning, step, and synthesis calls
    #[arg(long, value_name = "MODEL", default_value = "gpt-4o")]
    model: String,
}

impl Args {
    fn task_text(&self) -> Option<String> {
        if let Some(ref m) = self.message {
            return Some(m.clone());
        }
        if self.rest.is_empty() {
            None
        } else {
            Some(self.rest.join(" "))
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    logging::init();

    let args = Args::parse();
    let llm = Arc::new(ChatOpenAI::new(args.model.clone()));
    let search = Arc::new(TavilySearch::from_env()?);
    let runner = ReWooRunner::new(llm, search)?;

    if let Some(ref niche) = args.niche {
        tracing::info!(niche = %niche, model = %args.model, "running niche research");
        let companies = research_niche(&runner, niche).await?;
        for name in companies {
            println!("{}", name);
        }
        return Ok(());
    }

    let task = args
        .task_text()
        .ok_or("no task given: pass text, -m/--message, or --niche")?;
    tracing::info!(model = %args.model, "running task");
    let state = runner.invoke(&task).await?;
    let answer = state
        .answer
        .ok_or("run finished without a final answer")?;
    println!("{}", serde_json::to_string_pretty(&answer)?);
    Ok(())
}
