//! Run options and the scanner they configure

use std::path::PathBuf;

use crate::knowledge::DEFAULT_KNOWLEDGE_DIR;
use crate::scanner::Scanner;

/// Files processed concurrently unless overridden
pub const DEFAULT_CONCURRENCY: usize = 8;

/// Options for one injection run
#[derive(Debug, Clone)]
pub struct InjectOptions {
    /// Project root the globs are resolved against
    pub root: PathBuf,
    /// Knowledge directory; `<root>/.project` when unset
    pub knowledge_dir: Option<PathBuf>,
    /// Single glob replacing the default set
    pub pattern: Option<String>,
    /// Forced language; recorded but extraction always uses extensions
    pub language: Option<String>,
    /// Preview instead of writing
    pub dry_run: bool,
    /// Maximum files in flight
    pub concurrency: usize,
}

impl Default for InjectOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            knowledge_dir: None,
            pattern: None,
            language: None,
            dry_run: false,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

impl InjectOptions {
    /// Create options for a project root
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_knowledge_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.knowledge_dir = Some(dir.into());
        self
    }

    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Set the number of files processed at once (at least one)
    #[must_use]
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Resolved knowledge directory
    #[must_use]
    pub fn knowledge_dir(&self) -> PathBuf {
        self.knowledge_dir
            .clone()
            .unwrap_or_else(|| self.root.join(DEFAULT_KNOWLEDGE_DIR))
    }

    /// Scanner for these options; a custom knowledge directory is skipped too
    #[must_use]
    pub fn scanner(&self) -> Scanner {
        let mut scanner = Scanner::new(&self.root);
        if let Some(pattern) = &self.pattern {
            scanner = scanner.with_pattern(pattern);
        }
        if let Some(name) = self.knowledge_dir().file_name().and_then(|n| n.to_str()) {
            scanner = scanner.ignore_dir(name);
        }
        scanner
    }
}
