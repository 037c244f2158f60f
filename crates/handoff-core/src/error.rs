//! Error types for the injection pipeline

use std::path::PathBuf;

use thiserror::Error;

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, InjectError>;

/// Errors that abort an injection run
#[derive(Debug, Error)]
pub enum InjectError {
    #[error("No knowledge base found in {} (expected assumptions.md)", .0.display())]
    NoKnowledgeBase(PathBuf),

    #[error("No source files found to process")]
    NoSourceFiles,

    #[error(
        "No files could be processed ({} appear unsaved or empty). Please save your files and try again.",
        .unsaved.len()
    )]
    AllFilesUnprocessable { unsaved: Vec<PathBuf> },

    #[error("Invalid file pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source} ({} files already written)", .path.display(), .written.len())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        written: Vec<PathBuf>,
    },

    #[error("{} changed on disk since it was analyzed ({} files already written)", .path.display(), .written.len())]
    ContentChanged { path: PathBuf, written: Vec<PathBuf> },
}

impl InjectError {
    /// Create a read error for a path
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Files already rewritten before the error stopped the commit
    #[must_use]
    pub fn written_files(&self) -> &[PathBuf] {
        match self {
            Self::Write { written, .. } | Self::ContentChanged { written, .. } => written,
            _ => &[],
        }
    }
}
