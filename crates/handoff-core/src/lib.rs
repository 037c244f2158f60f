//! handoff-core: Knowledge-driven documentation injection
//!
//! Scans source files, recovers documentable elements with per-language
//! token patterns, matches them against a project knowledge base and
//! inserts a synthesized doc comment above each element that lacks one.
//!
//! # Pipeline
//!
//! 1. **scanner** - resolve globs into language-tagged files
//! 2. **knowledge** - load the whitelisted knowledge documents
//! 3. **extract** - find functions, classes and methods
//! 4. **score** - rank knowledge snippets per element
//! 5. **synth** - turn the best snippet into a formatted comment
//! 6. **inject** - insert comments bottom-up, skipping documented elements
//! 7. **report** - dry-run preview or commit to disk

pub mod error;
pub mod extract;
pub mod inject;
pub mod knowledge;
pub mod naming;
pub mod pipeline;
pub mod report;
pub mod scanner;
pub mod score;
pub mod synth;

// Re-export commonly used types
pub use error::{InjectError, Result};
pub use extract::{CodeElement, ElementKind};
pub use knowledge::KnowledgeBase;
pub use pipeline::{FileResult, InjectOptions, InjectOutcome};
pub use scanner::{DiscoveredFile, Language, Scanner, compute_hash};
pub use synth::{DocStyle, DocumentationBlock};
