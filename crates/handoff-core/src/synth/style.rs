//! Comment conventions and their renderers

use serde::Serialize;

use super::returns::return_text;
use super::tables::ReturnText;
use crate::extract::CodeElement;
use crate::scanner::Language;

/// Comment convention used for a generated block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocStyle {
    /// `/** ... @returns ... */`
    JsDoc,
    /// Triple-quoted docstring with a `Returns:` section
    Docstring,
    /// `/** ... @return ... */`
    JavaDoc,
    /// Single-line `/* ... */`
    ///
    /// C-family languages have no declaration patterns yet, so the pipeline
    /// only produces this style once an extractor is added for one of them.
    Block,
}

impl DocStyle {
    /// Style for a language, `None` when the language has no block comments
    #[must_use]
    pub const fn for_language(language: Language) -> Option<Self> {
        match language {
            Language::JavaScript | Language::TypeScript => Some(Self::JsDoc),
            Language::Python => Some(Self::Docstring),
            Language::Java => Some(Self::JavaDoc),
            Language::CSharp
            | Language::Go
            | Language::Rust
            | Language::Php
            | Language::Cpp
            | Language::C => Some(Self::Block),
            Language::Ruby => None,
        }
    }

    fn pick(self, text: ReturnText) -> Option<&'static str> {
        match self {
            Self::JsDoc => Some(text.script),
            Self::Docstring => Some(text.python),
            Self::JavaDoc => Some(text.java),
            Self::Block => None,
        }
    }

    /// Return annotation for an element, if this style carries one
    #[must_use]
    pub fn returns_for(self, element: &CodeElement) -> Option<&'static str> {
        if !element.kind.is_callable() {
            return None;
        }
        self.pick(return_text(&element.name))
    }

    /// Render a block, unindented; continuation lines of a docstring carry
    /// the four-space body indent of the declaration they sit above
    #[must_use]
    pub fn render(self, element: &CodeElement, description: &str) -> String {
        let returns = self.returns_for(element);
        match self {
            Self::JsDoc | Self::JavaDoc => {
                let tag = if self == Self::JsDoc { "@returns" } else { "@return" };
                let returns = returns
                    .map(|r| format!("\n * {tag} {r}"))
                    .unwrap_or_default();
                format!("/**\n * {description}{returns}\n */")
            }
            Self::Docstring => {
                let returns = returns
                    .map(|r| format!("\n\n    Returns:\n        {r}"))
                    .unwrap_or_default();
                format!("\"\"\"{description}{returns}\n    \"\"\"")
            }
            Self::Block => format!("/* {description} */"),
        }
    }
}
