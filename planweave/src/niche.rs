//! Niche research entry point for the enrichment pipeline.
//!
//! Wraps a [`ReWooRunner`]: builds the companies-in-niche task, runs the
//! graph, and extracts the company name list the downstream enrichment
//! query consumes.

use serde_json::Value;

use crate::error::AgentError;
use crate::rewoo::{ReWooRunner, RunError};

/// Builds the task text asking for companies within a niche.
///
/// Names are requested in generic normalized form (no inc/ltd/co suffixes)
/// so they match company-database records downstream.
pub fn company_niche_task(niche: &str) -> String {
    format!(
        "Return me a list of at least 30 companies in the USA within the following niche: {niche}. \
         Return the list in json format: companies: [list of company names]. \
         Return generic normalized names of companies so it will be easy to find them in a \
         database, i.e. no inc, ltd, and co etc."
    )
}

/// Runs one niche research task and returns the company names.
///
/// The synthesis answer must carry a `companies` array of strings; a
/// missing key or non-string entry is fatal, matching the no-fallback
/// contract of the synthesis result.
pub async fn research_niche(runner: &ReWooRunner, niche: &str) -> Result<Vec<String>, RunError> {
    let state = runner.invoke(&company_niche_task(niche)).await?;
    Ok(companies_from_answer(state.answer.as_ref())?)
}

fn companies_from_answer(answer: Option<&Value>) -> Result<Vec<String>, AgentError> {
    let value = answer.ok_or_else(|| {
        AgentError::ExecutionFailed("run finished without a final answer".to_string())
    })?;
    let list = value
        .get("companies")
        .and_then(|v| v.as_array())
        .ok_or_else(|| {
            AgentError::ExecutionFailed(
                "synthesis answer has no companies list".to_string(),
            )
        })?;
    list.iter()
        .map(|v| {
            v.as_str().map(str::to_string).ok_or_else(|| {
                AgentError::ExecutionFailed(
                    "companies list contains a non-string entry".to_string(),
                )
            })
        })
        .collect()
}
