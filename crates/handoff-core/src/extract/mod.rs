//! Extract module: Heuristic element discovery
//!
//! Applies per-language declaration patterns to file content and reports
//! each match as a documentable element with its 1-based source line.
//! Matches are not merged: a declaration hit by two patterns yields two
//! elements.

mod patterns;

use serde::Serialize;

use crate::scanner::Language;

pub use patterns::{ElementPattern, for_language};

/// Lines of source handed to the structural fallback
pub const SOURCE_PREVIEW_LINES: usize = 5;

/// Kind of documentable element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Function,
    Class,
    Method,
}

impl ElementKind {
    /// Functions and methods get a return annotation, classes do not
    #[must_use]
    pub const fn is_callable(self) -> bool {
        matches!(self, Self::Function | Self::Method)
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Function => "function",
            Self::Class => "class",
            Self::Method => "method",
        };
        write!(f, "{s}")
    }
}

/// A named element found in a source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeElement {
    #[serde(rename = "type")]
    pub kind: ElementKind,
    pub name: String,
    /// Line of the declaration in the original content (1-indexed)
    pub line: usize,
}

impl CodeElement {
    /// Create a new element
    #[must_use]
    pub fn new(kind: ElementKind, name: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            name: name.into(),
            line,
        }
    }
}

/// Find all elements in `content`, grouped by pattern in pattern order
#[must_use]
pub fn extract_elements(content: &str, language: Language) -> Vec<CodeElement> {
    let mut elements = Vec::new();

    for pattern in for_language(language) {
        for captures in pattern.regex.captures_iter(content) {
            let (Some(whole), Some(name)) = (captures.get(0), captures.get(1)) else {
                continue;
            };
            elements.push(CodeElement::new(
                pattern.kind,
                name.as_str(),
                line_at(content, whole.start()),
            ));
        }
    }

    elements
}

/// 1-based line number of a byte offset
#[must_use]
pub fn line_at(content: &str, offset: usize) -> usize {
    content.as_bytes()[..offset.min(content.len())]
        .iter()
        .filter(|b| **b == b'\n')
        .count()
        + 1
}

/// The first few lines of an element's source, starting at its declaration
#[must_use]
pub fn element_source(content: &str, element: &CodeElement) -> String {
    content
        .split('\n')
        .skip(element.line.saturating_sub(1))
        .take(SOURCE_PREVIEW_LINES)
        .collect::<Vec<_>>()
        .join("\n")
}
