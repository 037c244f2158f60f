//! Knowledge module: Project knowledge base loading
//!
//! Reads a fixed whitelist of markdown documents from the knowledge
//! directory. Missing documents are skipped; only the absence of every
//! presence-check document is an error.

mod assumptions;

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::error::{InjectError, Result};

pub use assumptions::{SECTION_HEADERS, extract_meaningful};

/// Default knowledge directory, relative to the project root
pub const DEFAULT_KNOWLEDGE_DIR: &str = ".project";

/// Whitelisted knowledge documents, in concatenation order
pub const KNOWLEDGE_FILES: &[&str] = &[
    "assumptions.md",
    "architecture.md",
    "api-docs.md",
    "design-principles.md",
    "patterns.md",
    "business-logic.md",
    "constraints.md",
];

/// Documents whose presence satisfies the knowledge precondition
pub const PRESENCE_CHECK_FILES: &[&str] = &["assumptions.md"];

/// A document counts as meaningful above this trimmed length
pub const MEANINGFUL_MIN_LEN: usize = 50;

const ASSUMPTIONS: &str = "assumptions";

/// A single loaded knowledge document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KnowledgeDocument {
    /// File stem (`api-docs` for `api-docs.md`)
    pub name: String,
    pub text: String,
}

/// Presence of one whitelisted document on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentStatus {
    pub file: &'static str,
    pub present: bool,
}

/// Knowledge documents loaded once per run, immutable afterwards
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    documents: Vec<KnowledgeDocument>,
}

impl KnowledgeBase {
    /// Build a knowledge base from already-processed text
    #[must_use]
    pub fn with_document(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.documents.push(KnowledgeDocument {
            name: name.into(),
            text: text.into(),
        });
        self
    }

    /// Whether any presence-check document exists in `dir`
    pub async fn exists(dir: &Path) -> bool {
        for file in PRESENCE_CHECK_FILES {
            if tokio::fs::try_exists(dir.join(file)).await.unwrap_or(false) {
                return true;
            }
        }
        false
    }

    /// Report which whitelisted documents are present in `dir`
    pub async fn survey(dir: &Path) -> Vec<DocumentStatus> {
        let mut statuses = Vec::with_capacity(KNOWLEDGE_FILES.len());
        for file in KNOWLEDGE_FILES {
            let present = tokio::fs::try_exists(dir.join(file)).await.unwrap_or(false);
            statuses.push(DocumentStatus { file, present });
        }
        statuses
    }

    /// Load the whitelisted documents from `dir`
    ///
    /// The assumptions document is reduced to its meaningful sections.
    ///
    /// # Errors
    /// Returns `NoKnowledgeBase` if no presence-check document exists, or a
    /// read error if a present document cannot be read.
    pub async fn load(dir: &Path) -> Result<Self> {
        if !Self::exists(dir).await {
            return Err(InjectError::NoKnowledgeBase(dir.to_path_buf()));
        }

        let mut base = Self::default();
        for file in KNOWLEDGE_FILES {
            let path: PathBuf = dir.join(file);
            let text = match tokio::fs::read_to_string(&path).await {
                Ok(text) => text,
                Err(e) if e.kind() == ErrorKind::NotFound => continue,
                Err(e) => return Err(InjectError::read(path, e)),
            };

            let name = file.trim_end_matches(".md");
            let text = if name == ASSUMPTIONS {
                extract_meaningful(&text)
            } else {
                text
            };
            debug!("Loaded knowledge document {} ({} bytes)", name, text.len());
            base = base.with_document(name, text);
        }

        Ok(base)
    }

    /// Look up a document by file stem
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.documents
            .iter()
            .find(|doc| doc.name == name)
            .map(|doc| doc.text.as_str())
    }

    /// All loaded documents in whitelist order
    #[must_use]
    pub fn documents(&self) -> &[KnowledgeDocument] {
        &self.documents
    }

    /// All document text joined by newlines, the scorer's search space
    #[must_use]
    pub fn combined_text(&self) -> String {
        self.documents
            .iter()
            .map(|doc| doc.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Whether any document is long enough to drive synthesis
    #[must_use]
    pub fn has_meaningful_content(&self) -> bool {
        self.documents
            .iter()
            .any(|doc| doc.text.trim().len() > MEANINGFUL_MIN_LEN)
    }
}

#[cfg(test)]
mod tests;
