//! Score module: Rank knowledge snippets for an element
//!
//! Three passes run in priority order and their hits are pooled:
//! direct name matches, curated keyword phrases for well-known names, and
//! (only when both found nothing) generic name-prefix keywords. The pool
//! is stable-sorted by score and the best two snippets are kept.

mod tables;

use serde::Serialize;

use crate::naming;

pub use tables::{
    GENERIC_PREFIX_RULES, PrefixRule, SPECIFIC_KEYWORDS, generic_keywords, specific_keywords,
};

/// Score of a snippet containing the element name itself
pub const DIRECT_MATCH_SCORE: u32 = 10;
/// Score of a snippet containing a curated keyword phrase
pub const PATTERN_MATCH_SCORE: u32 = 8;
/// Number of snippets handed to the synthesizer
pub const MAX_CONTEXTS: usize = 2;

const DIRECT_WINDOW: usize = 2;
const KEYWORD_WINDOW: usize = 1;

/// Which pass produced a snippet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchSource {
    DirectMatch,
    PatternMatch,
    GenericMatch,
}

/// A knowledge snippet ranked for one element
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredContext {
    pub text: String,
    pub score: u32,
    pub source: MatchSource,
}

/// Knowledge text split into lines once per run
///
/// Every element is still scored against every line.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeIndex {
    lines: Vec<String>,
    lowered: Vec<String>,
}

impl KnowledgeIndex {
    /// Index the concatenated knowledge text
    #[must_use]
    pub fn new(text: &str) -> Self {
        let lines: Vec<String> = text.split('\n').map(ToString::to_string).collect();
        let lowered = lines.iter().map(|line| line.to_lowercase()).collect();
        Self { lines, lowered }
    }

    /// Rank snippets for an element name, best first, at most `MAX_CONTEXTS`
    #[must_use]
    pub fn find_relevant_contexts(&self, name: &str) -> Vec<ScoredContext> {
        let normalized = naming::normalize(name);
        let mut hits = Vec::new();

        self.collect_hits(
            &name.to_lowercase(),
            DIRECT_WINDOW,
            DIRECT_MATCH_SCORE,
            MatchSource::DirectMatch,
            &mut hits,
        );

        for keyword in specific_keywords(&normalized) {
            self.collect_hits(
                keyword,
                KEYWORD_WINDOW,
                PATTERN_MATCH_SCORE,
                MatchSource::PatternMatch,
                &mut hits,
            );
        }

        if hits.is_empty() {
            for (keyword, score) in generic_keywords(&normalized) {
                self.collect_hits(
                    keyword,
                    KEYWORD_WINDOW,
                    score,
                    MatchSource::GenericMatch,
                    &mut hits,
                );
            }
        }

        // sort_by is stable: equal scores keep scan order
        hits.sort_by(|a, b| b.score.cmp(&a.score));
        hits.truncate(MAX_CONTEXTS);
        hits
    }

    fn collect_hits(
        &self,
        needle: &str,
        window: usize,
        score: u32,
        source: MatchSource,
        out: &mut Vec<ScoredContext>,
    ) {
        if needle.is_empty() {
            return;
        }
        for (index, line) in self.lowered.iter().enumerate() {
            if line.contains(needle) {
                out.push(ScoredContext {
                    text: self.window(index, window),
                    score,
                    source,
                });
            }
        }
    }

    fn window(&self, index: usize, radius: usize) -> String {
        let start = index.saturating_sub(radius);
        let end = (index + radius + 1).min(self.lines.len());
        self.lines[start..end].join(" ").trim().to_string()
    }
}

/// One-shot convenience over [`KnowledgeIndex`]
#[must_use]
pub fn find_relevant_contexts(name: &str, knowledge_text: &str) -> Vec<ScoredContext> {
    KnowledgeIndex::new(knowledge_text).find_relevant_contexts(name)
}
