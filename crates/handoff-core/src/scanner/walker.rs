//! File walker: Resolves glob patterns into candidate source files

use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};
use ignore::WalkBuilder;
use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::debug;

use super::Language;
use crate::error::{InjectError, Result};

/// Globs applied when no explicit pattern is given, one per extension
pub const DEFAULT_PATTERNS: &[&str] = &[
    "**/*.js", "**/*.ts", "**/*.jsx", "**/*.tsx", "**/*.py", "**/*.java", "**/*.cs", "**/*.go",
    "**/*.rs", "**/*.php", "**/*.rb", "**/*.cpp", "**/*.c", "**/*.h", "**/*.hpp",
];

/// Directory names never descended into
pub const IGNORED_DIRS: &[&str] = &["node_modules", ".git", "dist", "build", ".project"];

/// A file discovered during scanning
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscoveredFile {
    pub path: PathBuf,
    /// `None` when the extension is not in the language table
    pub language: Option<Language>,
}

impl DiscoveredFile {
    /// Language name for display, `unknown` for unmapped extensions
    #[must_use]
    pub fn language_name(&self) -> String {
        self.language
            .map_or_else(|| "unknown".to_string(), |lang| lang.to_string())
    }
}

/// Hex-encoded SHA-256 of a byte slice
#[must_use]
pub fn compute_hash(content: &[u8]) -> String {
    let digest = Sha256::digest(content);
    let mut hex = String::with_capacity(digest.len() * 2);
    for byte in digest {
        let _ = write!(hex, "{byte:02x}");
    }
    hex
}

/// Scanner for resolving file globs under a root directory
#[derive(Debug)]
pub struct Scanner {
    root: PathBuf,
    pattern: Option<String>,
    ignored_dirs: Vec<String>,
}

impl Scanner {
    /// Create a new scanner for the given root directory
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            pattern: None,
            ignored_dirs: IGNORED_DIRS.iter().map(ToString::to_string).collect(),
        }
    }

    /// Replace the default glob set with a single pattern
    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Skip an additional directory name (e.g. a custom knowledge directory)
    #[must_use]
    pub fn ignore_dir(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.ignored_dirs.contains(&name) {
            self.ignored_dirs.push(name);
        }
        self
    }

    /// Patterns this scanner resolves, in priority order
    #[must_use]
    pub fn patterns(&self) -> Vec<&str> {
        match &self.pattern {
            Some(pattern) => vec![pattern.as_str()],
            None => DEFAULT_PATTERNS.to_vec(),
        }
    }

    /// Resolve the patterns into a deduplicated file list
    ///
    /// Files are ordered by the first pattern that matched them, then by
    /// path within that pattern.
    ///
    /// # Errors
    /// Returns an error if a pattern is not a valid glob.
    pub fn scan(&self) -> Result<Vec<DiscoveredFile>> {
        let matchers = self
            .patterns()
            .into_iter()
            .map(|pattern| compile_glob(pattern, &self.scoped(pattern)))
            .collect::<Result<Vec<_>>>()?;

        let candidates = self.walk();
        debug!("Walked {} candidate files", candidates.len());

        let mut seen: HashSet<&Path> = HashSet::new();
        let mut files = Vec::new();
        for matcher in &matchers {
            for relative in &candidates {
                if matcher.is_match(relative) && seen.insert(relative.as_path()) {
                    files.push(DiscoveredFile {
                        path: self.root.join(relative),
                        language: Language::from_path(relative),
                    });
                }
            }
        }

        Ok(files)
    }

    /// An absolute pattern under the root, rewritten relative to it
    fn scoped<'a>(&self, pattern: &'a str) -> Cow<'a, str> {
        let path = Path::new(pattern);
        if !path.is_absolute() {
            return Cow::Borrowed(pattern);
        }

        let canonical = self.root.canonicalize().ok();
        let scoped = [Some(self.root.as_path()), canonical.as_deref()]
            .into_iter()
            .flatten()
            .find_map(|root| path.strip_prefix(root).ok())
            .and_then(Path::to_str)
            .map_or(Cow::Borrowed(pattern), |relative| {
                Cow::Owned(relative.replace('\\', "/"))
            });
        scoped
    }

    fn walk(&self) -> Vec<PathBuf> {
        let ignored = self.ignored_dirs.clone();

        WalkBuilder::new(&self.root)
            .hidden(false)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| {
                let is_ignored_dir = entry.depth() > 0
                    && entry.file_type().is_some_and(|ft| ft.is_dir())
                    && entry
                        .file_name()
                        .to_str()
                        .is_some_and(|name| ignored.iter().any(|dir| dir == name));
                !is_ignored_dir
            })
            .build()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
            .filter_map(|entry| {
                entry
                    .path()
                    .strip_prefix(&self.root)
                    .ok()
                    .map(Path::to_path_buf)
            })
            .collect()
    }
}

fn compile_glob(pattern: &str, scoped: &str) -> Result<GlobMatcher> {
    let normalized = scoped.strip_prefix("./").unwrap_or(scoped);
    GlobBuilder::new(normalized)
        .literal_separator(true)
        .build()
        .map(|glob| glob.compile_matcher())
        .map_err(|source| InjectError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
}
