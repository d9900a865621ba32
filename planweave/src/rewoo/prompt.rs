//! Planner and solver prompts.
//!
//! The planner prompt teaches the `Plan: ... #En = Tool[input]` line format
//! the parser extracts, with the two supported tools. The solver prompt
//! presents the full plan-plus-evidence transcript and asks for the answer.

/// Planner prompt. `{task}` is replaced with the task text.
///
/// Evidence variables `#E1`, `#E2`, ... let later steps reference earlier
/// results; the worker substitutes them before dispatch.
pub const PLANNER_PROMPT: &str = r#"For the following task, make plans that can solve the problem step by step. For each plan, indicate which external tool together with tool input to retrieve evidence. You can store the evidence into a variable #E that can be called by later tools. (Plan, #E1, Plan, #E2, Plan, ...). For plan, always use 'Plan:' without giving it a number.

Tools can be one of the following:
(1) Google[input]: Worker that searches results from Google. Useful when you need to find short and succinct answers about a specific topic. The input should be a search query.
(2) LLM[input]: A pretrained LLM like yourself. Useful when you need to act with general world knowledge and common sense. Prioritize it when you are confident in solving the problem yourself. Input can be any instruction.

For example,
Task: Which direct competitor of the highest-valued US meal-kit company raised funding most recently?
Plan: Find the highest-valued meal-kit company in the USA. #E1 = Google[highest valued meal kit company USA]
Plan: Identify that company's direct competitors. #E2 = LLM[List direct competitors of #E1]
Plan: Find which of those competitors raised funding most recently. #E3 = Google[most recent funding round among #E2]

Begin!
Describe your plans with rich details. Each Plan should be followed by only one #E.

Task: {task}"#;

/// Solver prompt. `{plan}` is replaced with the transcript, `{task}` with
/// the task text.
pub const SOLVER_PROMPT: &str = r#"Solve the following task or problem. To solve the problem, we have made step-by-step Plan and retrieved corresponding Evidence to each Plan. Use them with caution since long evidence might contain irrelevant information.

{plan}

Now solve the question or task according to provided Evidence above. Respond with a single JSON object containing the answer and nothing else.

Task: {task}
Response:"#;

/// Renders the planner prompt for a task.
pub fn planner_prompt(task: &str) -> String {
    PLANNER_PROMPT.replace("{task}", task)
}

/// Renders the solver prompt for a transcript and task.
pub fn solver_prompt(plan: &str, task: &str) -> String {
    SOLVER_PROMPT.replace("{plan}", plan).replace("{task}", task)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Scenario**: planner prompt embeds the task and names both tools.
    #[test]
    fn planner_prompt_embeds_task() {
        let p = planner_prompt("count the clouds");
        assert!(p.contains("count the clouds"));
        assert!(p.contains("Google[input]"));
        assert!(p.contains("LLM[input]"));
        assert!(!p.contains("{task}"));
    }

    /// **Scenario**: solver prompt embeds transcript and task.
    #[test]
    fn solver_prompt_embeds_plan_and_task() {
        let p = solver_prompt("Plan: x\n#E1 = LLM[y]", "the task");
        assert!(p.contains("Plan: x"));
        assert!(p.contains("the task"));
        assert!(!p.contains("{plan}"));
        assert!(!p.contains("{task}"));
    }
}
