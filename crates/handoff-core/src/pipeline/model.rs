//! Per-file results of a run and the outcome handed to reporting

use std::path::PathBuf;

use serde::Serialize;

use crate::scanner::Language;
use crate::synth::DocumentationBlock;

/// Planned rewrite of one source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileResult {
    pub file: PathBuf,
    pub language: Language,
    #[serde(skip)]
    pub original_content: String,
    /// SHA-256 of `original_content`, checked again before writing
    pub original_hash: String,
    /// Blocks that will be inserted, in discovery order
    pub documentation: Vec<DocumentationBlock>,
    #[serde(skip)]
    pub new_content: String,
}

/// Everything a run produced
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InjectOutcome {
    /// Files with at least one new block, in scan order
    pub results: Vec<FileResult>,
    /// Files that look unsaved, empty or binary
    pub unsaved: Vec<PathBuf>,
}

impl InjectOutcome {
    /// Whether there is nothing to write
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Total number of blocks across all files
    #[must_use]
    pub fn block_count(&self) -> usize {
        self.results.iter().map(|r| r.documentation.len()).sum()
    }
}
