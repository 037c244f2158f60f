//! Description text for an element
//!
//! Knowledge snippets are tried first. When none yields a usable sentence
//! the description is derived from the element's name and a few lines of
//! its source.

use once_cell::sync::Lazy;
use regex::Regex;

use super::tables::{
    CODE_KEYWORDS, CURATED_DESCRIPTIONS, DESCRIPTION_RULES, DOMAIN_RULES, EXTRACTION_PATTERNS,
    GENERIC_PHRASES, IRRELEVANT_PHRASES, KEYWORD_DESCRIPTIONS, NAME_KEYWORDS, lookup, refine,
};
use crate::extract::CodeElement;
use crate::naming;

const MIN_CLAUSE_LEN: usize = 15;
const LONG_CONTEXT_LEN: usize = 100;
const MIN_SENTENCE_LEN: usize = 20;
const MAX_SENTENCE_LEN: usize = 80;
const MIN_DESCRIPTION_LEN: usize = 10;

#[allow(clippy::expect_used)]
fn regex(source: &str) -> Regex {
    Regex::new(source).expect("synthesis pattern is a valid regex")
}

static MARKDOWN: Lazy<Regex> = Lazy::new(|| regex(r"[#*\-\[\]]"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| regex(r"\s+"));
static NUMBERED: Lazy<Regex> = Lazy::new(|| regex(r"^\d+\.\s*"));
static BULLET: Lazy<Regex> = Lazy::new(|| regex(r"^[•\-]\s*"));
static CLAUSE_BREAK: Lazy<Regex> = Lazy::new(|| regex(r"[.!?:]+"));
static SENTENCE_BREAK: Lazy<Regex> = Lazy::new(|| regex(r"[.!?]+"));

static EXTRACTORS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    EXTRACTION_PATTERNS
        .iter()
        .map(|(name, source)| (*name, regex(&format!("(?i){source}"))))
        .collect()
});

/// Strip markdown punctuation, list markers and redundant whitespace
#[must_use]
pub fn clean_markdown(text: &str) -> String {
    let stripped = MARKDOWN.replace_all(text, "");
    let collapsed = WHITESPACE.replace_all(&stripped, " ");
    let collapsed = collapsed.trim();
    let unnumbered = NUMBERED.replace(collapsed, "");
    BULLET.replace(&unnumbered, "").trim().to_string()
}

/// Whether a sentence plausibly talks about the named element
#[must_use]
pub fn is_sentence_relevant(name: &str, sentence: &str) -> bool {
    let lowered = sentence.to_lowercase();
    if IRRELEVANT_PHRASES.iter().any(|p| lowered.contains(p)) {
        return false;
    }

    let normalized = naming::normalize(name);
    if let Some(rule) = DOMAIN_RULES.iter().find(|rule| rule.applies_to(&normalized)) {
        return rule.accepts(&lowered);
    }

    lowered.contains(&name.to_lowercase()) || lowered.contains(&naming::words(name))
}

fn within_sentence_bounds(sentence: &str) -> bool {
    let len = sentence.chars().count();
    len > MIN_SENTENCE_LEN && len < MAX_SENTENCE_LEN
}

/// Pull a description for `element` out of one knowledge snippet
#[must_use]
pub fn describe_from_context(element: &CodeElement, context: &str) -> Option<String> {
    let description = clean_markdown(context);
    let normalized = naming::normalize(&element.name);

    if let Some((_, extractor)) = EXTRACTORS.iter().find(|(name, _)| *name == normalized) {
        if let Some(found) = extractor.find(&description) {
            return Some(found.as_str().to_string());
        }
    }

    let clause = CLAUSE_BREAK
        .split(&description)
        .map(str::trim)
        .find(|clause| {
            clause.chars().count() > MIN_CLAUSE_LEN && is_sentence_relevant(&element.name, clause)
        });
    if let Some(clause) = clause {
        return Some(clause.to_string());
    }

    let lowered = description.to_lowercase();
    if GENERIC_PHRASES.iter().any(|p| lowered.contains(p)) {
        return None;
    }

    if description.chars().count() > LONG_CONTEXT_LEN {
        let sentences: Vec<&str> = SENTENCE_BREAK.split(&description).map(str::trim).collect();
        let lowered_name = element.name.to_lowercase();

        return sentences
            .iter()
            .find(|s| within_sentence_bounds(s) && s.to_lowercase().contains(&lowered_name))
            .or_else(|| {
                sentences
                    .iter()
                    .find(|s| within_sentence_bounds(s) && is_sentence_relevant(&element.name, s))
            })
            .map(|s| (*s).to_string());
    }

    if description.chars().count() < MIN_DESCRIPTION_LEN
        || !is_sentence_relevant(&element.name, &description)
    {
        return None;
    }

    Some(description)
}

/// Keywords suggested by the name and by tokens in the source preview
#[must_use]
pub fn infer_keywords(name: &str, source: &str) -> Vec<&'static str> {
    let lowered_name = name.to_lowercase();
    let lowered_source = source.to_lowercase();

    let from_name = NAME_KEYWORDS
        .iter()
        .filter(|(fragment, _)| lowered_name.contains(fragment))
        .flat_map(|(_, keywords)| keywords.iter().copied());
    let from_source = CODE_KEYWORDS
        .iter()
        .filter(|(tokens, _)| tokens.iter().any(|t| lowered_source.contains(t)))
        .flat_map(|(_, keywords)| keywords.iter().copied());

    from_name.chain(from_source).collect()
}

/// Describe an element from its name and source alone; never empty
#[must_use]
pub fn describe_structurally(element: &CodeElement, source: &str) -> String {
    let normalized = naming::normalize(&element.name);

    if let Some(curated) = lookup(CURATED_DESCRIPTIONS, &normalized) {
        return curated.to_string();
    }

    if let Some(rule) = DESCRIPTION_RULES.iter().find(|r| r.trigger.matches(&normalized)) {
        return refine(rule.refinements, rule.default, &normalized).to_string();
    }

    if let Some(primary) = infer_keywords(&element.name, source).first() {
        return lookup(KEYWORD_DESCRIPTIONS, primary)
            .map_or_else(|| format!("Handles {primary} operations"), ToString::to_string);
    }

    format!("{} - {} implementation", element.name, element.kind)
}
