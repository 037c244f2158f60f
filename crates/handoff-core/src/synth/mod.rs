//! Synth module: Turn an element and its knowledge into a doc block
//!
//! Descriptions come from the ranked knowledge snippets when one of them
//! contains a sentence about the element, and from name and source
//! heuristics otherwise. The block is rendered in the comment convention
//! of the file's language but is not indented yet; injection does that.

mod describe;
mod returns;
mod style;
mod tables;

use serde::Serialize;

use crate::extract::CodeElement;
use crate::score::ScoredContext;

pub use describe::{
    clean_markdown, describe_from_context, describe_structurally, infer_keywords,
    is_sentence_relevant,
};
pub use returns::return_text;
pub use style::DocStyle;
pub use tables::ReturnText;

/// Generated documentation for one element
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentationBlock {
    pub element: CodeElement,
    /// Rendered block, unindented
    pub text: String,
}

impl DocumentationBlock {
    /// First line of prose, with comment delimiters stripped
    #[must_use]
    pub fn summary_line(&self) -> &str {
        self.text
            .lines()
            .map(strip_delimiters)
            .find(|line| !line.is_empty())
            .unwrap_or_default()
    }
}

fn strip_delimiters(line: &str) -> &str {
    let mut line = line.trim();
    for prefix in ["/**", "/*", "\"\"\"", "*"] {
        if let Some(rest) = line.strip_prefix(prefix) {
            line = rest;
            break;
        }
    }
    for suffix in ["*/", "\"\"\""] {
        if let Some(rest) = line.strip_suffix(suffix) {
            line = rest;
            break;
        }
    }
    line.trim()
}

/// Build the documentation block for `element`
///
/// `contexts` are tried in rank order; `source` is the preview of the
/// element's declaration used by the structural fallback.
#[must_use]
pub fn synthesize(
    element: &CodeElement,
    contexts: &[ScoredContext],
    source: &str,
    style: DocStyle,
) -> DocumentationBlock {
    let description = contexts
        .iter()
        .find_map(|context| describe_from_context(element, &context.text))
        .unwrap_or_else(|| describe_structurally(element, source));

    DocumentationBlock {
        element: element.clone(),
        text: style.render(element, &description),
    }
}

#[cfg(test)]
mod tests;
