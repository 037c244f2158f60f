//! Language detection utilities

use std::path::Path;

use serde::Serialize;

/// Languages recognized by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    JavaScript,
    TypeScript,
    Python,
    Java,
    CSharp,
    Go,
    Rust,
    Php,
    Ruby,
    Cpp,
    C,
}

impl Language {
    /// Detect language from file extension
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "js" | "jsx" | "mjs" | "cjs" => Some(Self::JavaScript),
            "ts" | "tsx" => Some(Self::TypeScript),
            "py" => Some(Self::Python),
            "java" => Some(Self::Java),
            "cs" => Some(Self::CSharp),
            "go" => Some(Self::Go),
            "rs" => Some(Self::Rust),
            "php" => Some(Self::Php),
            "rb" => Some(Self::Ruby),
            "cpp" | "cc" | "cxx" | "hpp" => Some(Self::Cpp),
            "c" | "h" => Some(Self::C),
            _ => None,
        }
    }

    /// Detect language from file path
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Parse a user-supplied language name (as printed by `Display`)
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "javascript" | "js" => Some(Self::JavaScript),
            "typescript" | "ts" => Some(Self::TypeScript),
            "python" | "py" => Some(Self::Python),
            "java" => Some(Self::Java),
            "csharp" | "c#" | "cs" => Some(Self::CSharp),
            "go" => Some(Self::Go),
            "rust" | "rs" => Some(Self::Rust),
            "php" => Some(Self::Php),
            "ruby" | "rb" => Some(Self::Ruby),
            "cpp" | "c++" => Some(Self::Cpp),
            "c" => Some(Self::C),
            _ => None,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::JavaScript => "javascript",
            Self::TypeScript => "typescript",
            Self::Python => "python",
            Self::Java => "java",
            Self::CSharp => "csharp",
            Self::Go => "go",
            Self::Rust => "rust",
            Self::Php => "php",
            Self::Ruby => "ruby",
            Self::Cpp => "cpp",
            Self::C => "c",
        };
        write!(f, "{s}")
    }
}
