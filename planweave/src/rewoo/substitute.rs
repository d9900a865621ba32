//! Evidence substitution and step routing.
//!
//! Substitution is plain textual replacement: every evidence id currently in
//! the store is replaced by its resolved text wherever it literally occurs.
//! The store is a `BTreeMap`, so replacements apply in a fixed lexicographic
//! id order on every call. Replacement is not recursive: an id token embedded
//! in another step's resolved text is left alone. Ids not yet in the store
//! (forward references) pass through untouched.

use std::collections::BTreeMap;

use super::state::ReWooState;

/// Rewrites `input`, replacing every occurrence of each known evidence id
/// with that id's resolved text.
pub fn apply_evidence(input: &str, evidence: &BTreeMap<String, String>) -> String {
    let mut resolved = input.to_string();
    for (id, text) in evidence {
        if resolved.contains(id.as_str()) {
            resolved = resolved.replace(id.as_str(), text);
        }
    }
    resolved
}

/// Returns the index of the next unresolved step, or `None` when every step
/// has evidence (route to solve).
///
/// Steps complete strictly in declared order, so the resolved count is also
/// the index of the next step. A plan with zero steps is complete
/// immediately.
pub fn next_step_index(state: &ReWooState) -> Option<usize> {
    if state.evidence.len() == state.steps.len() {
        None
    } else {
        Some(state.evidence.len())
    }
}
