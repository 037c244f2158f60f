//! Declaration patterns per language
//!
//! These are token patterns, not a grammar: nested braces, keywords inside
//! strings or comments, and signatures split oddly across lines are not
//! handled.

use once_cell::sync::Lazy;
use regex::Regex;

use super::ElementKind;
use crate::scanner::Language;

/// One declaration pattern; capture group 1 is the element name
#[derive(Debug)]
pub struct ElementPattern {
    pub kind: ElementKind,
    pub regex: Regex,
}

#[allow(clippy::expect_used)]
fn pattern(kind: ElementKind, source: &str) -> ElementPattern {
    ElementPattern {
        kind,
        regex: Regex::new(source).expect("declaration pattern is a valid regex"),
    }
}

static SCRIPT_PATTERNS: Lazy<Vec<ElementPattern>> = Lazy::new(|| {
    vec![
        pattern(
            ElementKind::Function,
            r"\b(?:export\s+)?(?:async\s+)?function\s+(\w+)\s*\([^)]*\)",
        ),
        pattern(
            ElementKind::Class,
            r"(?m)^[ \t]*(?:export\s+)?(?:default\s+)?(?:abstract\s+)?class\s+(\w+)",
        ),
        pattern(
            ElementKind::Function,
            r"\b(?:export\s+)?const\s+(\w+)\s*=\s*(?:async\s*)?\([^)]*\)\s*(?::\s*[\w<>\[\]|, ]+?\s*)?=>",
        ),
    ]
});

static PYTHON_PATTERNS: Lazy<Vec<ElementPattern>> = Lazy::new(|| {
    vec![
        pattern(
            ElementKind::Function,
            r"\bdef\s+(\w+)\s*\([^)]*\)\s*(?:->\s*[^:\n]+)?:",
        ),
        pattern(ElementKind::Class, r"\bclass\s+(\w+)(?:\([^)]*\))?:"),
    ]
});

static JAVA_PATTERNS: Lazy<Vec<ElementPattern>> = Lazy::new(|| {
    vec![
        pattern(
            ElementKind::Class,
            r"(?m)^[ \t]*(?:(?:public|protected|private|abstract|final|static)\s+)*(?:class|interface|enum)\s+(\w+)",
        ),
        pattern(
            ElementKind::Method,
            r"(?m)^[ \t]*(?:(?:public|protected|private|static|final|abstract|synchronized)\s+)+(?:<[^>]+>\s+)?[\w<>\[\],.? ]+?\s+(\w+)\s*\([^)]*\)\s*(?:throws\s+[\w.,\s]+?)?\{",
        ),
    ]
});

/// Patterns for a language, in the order their matches are reported
#[must_use]
pub fn for_language(language: Language) -> &'static [ElementPattern] {
    match language {
        Language::JavaScript | Language::TypeScript => SCRIPT_PATTERNS.as_slice(),
        Language::Python => PYTHON_PATTERNS.as_slice(),
        Language::Java => JAVA_PATTERNS.as_slice(),
        Language::CSharp
        | Language::Go
        | Language::Rust
        | Language::Php
        | Language::Ruby
        | Language::Cpp
        | Language::C => &[],
    }
}
