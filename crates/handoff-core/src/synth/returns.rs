//! Return annotations for callable elements

use super::tables::{CURATED_RETURNS, GENERIC_RETURN, RETURN_RULES, ReturnText, lookup, refine};
use crate::naming;

/// Return wording for a name in every dialect: curated entry, then prefix
/// heuristics, then a generic fallback
#[must_use]
pub fn return_text(name: &str) -> ReturnText {
    let normalized = naming::normalize(name);

    if let Some(curated) = lookup(CURATED_RETURNS, &normalized) {
        return curated;
    }

    RETURN_RULES
        .iter()
        .find(|rule| rule.trigger.matches(&normalized))
        .map_or(GENERIC_RETURN, |rule| {
            refine(rule.refinements, rule.default, &normalized)
        })
}
