//! Lenient plan parser: extract typed steps from the planner's free text.
//!
//! The planner is a generative model whose output format is only
//! probabilistically well-formed, so the parser never fails: it returns
//! whatever subset of the document matches the step pattern, in document
//! order. Zero matches is a valid (empty) plan.

use std::sync::OnceLock;

use regex::Regex;

use super::state::PlanStep;

/// Step pattern: `Plan: <description> #En = Tool[input]`, where the
/// evidence id may sit on the same line or the next one.
fn step_regex() -> &'static Regex {
    static STEP_RE: OnceLock<Regex> = OnceLock::new();
    STEP_RE.get_or_init(|| {
        Regex::new(r"Plan:\s*(.+)\s*(#E\d+)\s*=\s*(\w+)\s*\[([^\]]+)\]")
            .expect("step pattern compiles")
    })
}

/// Parses every step occurrence out of a planning document.
///
/// Non-matching text is skipped silently; step order follows document order.
/// The returned count never exceeds the number of pattern occurrences.
pub fn parse_plan(raw: &str) -> Vec<PlanStep> {
    step_regex()
        .captures_iter(raw)
        .map(|cap| PlanStep {
            description: cap[1].trim().to_string(),
            id: cap[2].to_string(),
            tool: cap[3].to_string(),
            input: cap[4].to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_STEP_PLAN: &str = "\
Plan: Search for the founding year of the company. #E1 = Google[Acme Corp founding year]
Plan: Compute the company's age from the founding year.
#E2 = LLM[How old is a company founded in #E1?]
";

    /// **Scenario**: well-formed steps parse in document order with all four fields.
    #[test]
    fn parses_steps_in_document_order() {
        let steps = parse_plan(TWO_STEP_PLAN);
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].id, "#E1");
        assert_eq!(steps[0].tool, "Google");
        assert_eq!(steps[0].input, "Acme Corp founding year");
        assert_eq!(
            steps[0].description,
            "Search for the founding year of the company."
        );
        assert_eq!(steps[1].id, "#E2");
        assert_eq!(steps[1].tool, "LLM");
        assert_eq!(steps[1].input, "How old is a company founded in #E1?");
    }

    /// **Scenario**: the id may sit on the line after the description.
    #[test]
    fn parses_id_on_next_line() {
        let steps = parse_plan("Plan: Think about it.\n#E1 = LLM[think]");
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].description, "Think about it.");
    }

    /// **Scenario**: malformed lines are silently omitted; the rest still parse.
    #[test]
    fn skips_malformed_lines() {
        let raw = "\
Plan: missing assignment entirely
Some prose the model added.
#E9 = Google[orphan line without a Plan prefix]
Plan: valid step #E1 = LLM[hello]
";
        let steps = parse_plan(raw);
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].id, "#E1");
        assert_eq!(steps[0].description, "valid step");
    }

    /// **Scenario**: a document with no step pattern yields an empty plan, not an error.
    #[test]
    fn empty_plan_on_unstructured_text() {
        assert!(parse_plan("I could not produce a plan, sorry.").is_empty());
        assert!(parse_plan("").is_empty());
    }

    /// **Scenario**: parsed count never exceeds the count of pattern occurrences.
    #[test]
    fn count_bounded_by_pattern_occurrences() {
        let raw = TWO_STEP_PLAN.repeat(3);
        assert_eq!(parse_plan(&raw).len(), 6);
    }

    /// **Scenario**: an unsupported tool token still parses; dispatch decides its fate.
    #[test]
    fn unsupported_tool_token_parses() {
        let steps = parse_plan("Plan: add numbers #E1 = Calculator[2 + 2]");
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].tool, "Calculator");
    }
}
