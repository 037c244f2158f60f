//! Command types shared between main and library

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use handoff_core::InjectOptions;
use handoff_core::knowledge::DEFAULT_KNOWLEDGE_DIR;
use handoff_core::pipeline::DEFAULT_CONCURRENCY;

#[derive(Debug, Parser)]
#[command(name = "handoff")]
#[command(author, version, about = "Knowledge-driven documentation injection", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Insert doc comments synthesized from the project knowledge base
    #[command(alias = "inject")]
    InjectDocs(InjectArgs),

    /// Show which knowledge documents are present
    Knowledge(KnowledgeArgs),
}

#[derive(Debug, Args)]
pub struct InjectArgs {
    /// Project root
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Glob selecting the files to document, replacing the defaults
    #[arg(short, long)]
    pub files: Option<String>,

    /// Force a language (accepted, but languages come from extensions)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Preview the changes without writing
    #[arg(long)]
    pub dry_run: bool,

    /// Knowledge directory (defaults to <root>/.project)
    #[arg(long)]
    pub knowledge_dir: Option<PathBuf>,

    /// Files processed concurrently
    #[arg(short, long, default_value_t = DEFAULT_CONCURRENCY)]
    pub jobs: usize,

    /// Print the planned changes as JSON
    #[arg(long)]
    pub json: bool,
}

impl InjectArgs {
    /// Collect the flags into pipeline options
    #[must_use]
    pub fn to_options(&self) -> InjectOptions {
        let mut options = InjectOptions::new(&self.root)
            .with_dry_run(self.dry_run)
            .with_concurrency(self.jobs);
        if let Some(files) = &self.files {
            options = options.with_pattern(files);
        }
        if let Some(language) = &self.language {
            options = options.with_language(language);
        }
        if let Some(dir) = &self.knowledge_dir {
            options = options.with_knowledge_dir(dir);
        }
        options
    }
}

#[derive(Debug, Args)]
pub struct KnowledgeArgs {
    /// Project root
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Knowledge directory (defaults to <root>/.project)
    #[arg(long)]
    pub knowledge_dir: Option<PathBuf>,
}

impl KnowledgeArgs {
    #[must_use]
    pub fn knowledge_dir(&self) -> PathBuf {
        self.knowledge_dir
            .clone()
            .unwrap_or_else(|| self.root.join(DEFAULT_KNOWLEDGE_DIR))
    }
}
