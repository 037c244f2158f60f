//! Scanner module: File discovery and language detection
//!
//! Resolves a glob (or the default per-language glob set) into a
//! deduplicated file list and tags each file with the language implied
//! by its extension. No file content is read at this stage.

mod language;
mod walker;

pub use language::Language;
pub use walker::{DEFAULT_PATTERNS, DiscoveredFile, IGNORED_DIRS, Scanner, compute_hash};
